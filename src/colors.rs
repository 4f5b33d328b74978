pub use owo_colors::OwoColorize;

/// Prints every argument with `Display`, then a newline.
#[macro_export]
macro_rules! showln {
    ($($expression:expr),* $(,)?) => {
        $( ::std::print!("{}", $expression); )*
        ::std::println!();
    };
}
