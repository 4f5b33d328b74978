use std::fmt::Display;

use crate::colors::OwoColorize;

pub trait UnwrapOrExplode<T> {
    fn unwrap_or_explode(self, context: &str) -> T;
}

impl<T, E: Display> UnwrapOrExplode<T> for Result<T, E> {
    fn unwrap_or_explode(self, context: &str) -> T {
        match self {
            Ok(inner) => inner,
            Err(err) => explode_error(format_args!("{context}: {err}")),
        }
    }
}

fn explode_error(message: impl Display) -> ! {
    crate::showln!("Error".red(), ": ", message);
    std::process::exit(1)
}
