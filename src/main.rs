mod colors;
mod error;
mod time;

use std::str::FromStr;

use clap::Parser;

use crate::{colors::OwoColorize, error::UnwrapOrExplode, time::ClockTime};

#[derive(Parser)]
#[command(about = "Times of day as seconds since midnight")]
enum CliArgs {
    /// Walk through every operation with a few sample times.
    Demo,
    /// Show a time (HH:MM[:SS] or total seconds) and whether it's valid.
    Show {
        #[arg(allow_hyphen_values = true)]
        time: Term,
    },
    /// Add times (HH:MM[:SS]) and offsets (seconds), starting from zero.
    Sum {
        #[arg(required = true, allow_hyphen_values = true)]
        terms: Vec<Term>,
    },
    /// Check if the first time is after the second one.
    After {
        #[arg(allow_hyphen_values = true)]
        first: Term,
        #[arg(allow_hyphen_values = true)]
        second: Term,
    },
}

fn main() {
    match CliArgs::parse() {
        CliArgs::Demo => run_demo(),
        CliArgs::Show { time } => {
            let time = time.into_clock_time();
            showln!(time.bold());
            showln!("  total seconds: ", time.to_int().blue());
            if time.is_valid() {
                showln!("  ", "valid time of day".green());
            } else {
                showln!("  ", "outside of a single day".red());
            }
        }
        CliArgs::Sum { terms } => {
            let total = sum_terms(terms).unwrap_or_explode("failed to sum");

            total.print();
            if !total.is_valid() {
                showln!("Warning".yellow(), ": result is outside of a single day");
            }
        }
        CliArgs::After { first, second } => {
            showln!(first.into_clock_time().is_after(second.into_clock_time()));
        }
    }
}

fn run_demo() {
    for line in demo_lines() {
        showln!(line);
    }
}

fn demo_lines() -> Vec<String> {
    let start = ClockTime::new(9, 45, 0);
    let end = start.increment(1337);

    let duration = ClockTime::hm(1, 35);
    let times = [ClockTime::hm(7, 43), ClockTime::hm(7, 41), ClockTime::hm(7, 37)];
    let total: ClockTime = times.iter().sum();

    vec![
        start.to_string(),
        end.to_string(),
        "Is end after start?".to_owned(),
        end.is_after(start).to_string(),
        "Using Display".to_owned(),
        format!("{start} {end}"),
        (start + duration).to_string(),
        (start + 1337).to_string(),
        (1337 + start).to_string(),
        "Example of polymorphism".to_owned(),
        total.to_string(),
    ]
}

#[derive(Debug, thiserror::Error)]
enum SumError {
    #[error("{0} is not a valid time of day")]
    InvalidTime(ClockTime),
    #[error("can't add {time} to {total}, the total already left the day")]
    TotalLeftTheDay { total: ClockTime, time: ClockTime },
    #[error("the total doesn't fit in 64-bit seconds")]
    Overflow,
}

/// Reduces like `ClockTime`'s `Sum`, seeded with zero, but reports bad
/// operands instead of panicking.
fn sum_terms(terms: impl IntoIterator<Item = Term>) -> Result<ClockTime, SumError> {
    let mut terms = terms.into_iter();
    let Some(first) = terms.next() else {
        return Ok(ClockTime::default());
    };

    terms.try_fold(first.into_clock_time(), |total, term| {
        let offset = term.into_clock_time().to_int();
        total.to_int().checked_add(offset).ok_or(SumError::Overflow)?;

        match term {
            Term::Time(time) if !time.is_valid() => Err(SumError::InvalidTime(time)),
            Term::Time(time) if !total.is_valid() => Err(SumError::TotalLeftTheDay { total, time }),
            Term::Time(time) => Ok(total + time),
            Term::Seconds(seconds) => Ok(total + seconds),
        }
    })
}

/// Command-line operand, either a time or a bare offset in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Term {
    Time(ClockTime),
    Seconds(i64),
}

impl Term {
    fn into_clock_time(self) -> ClockTime {
        match self {
            Term::Time(time) => time,
            Term::Seconds(seconds) => ClockTime::from_total_seconds(seconds),
        }
    }
}

impl FromStr for Term {
    type Err = time::ParseClockTimeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().parse::<i64>() {
            Ok(seconds) => Ok(Term::Seconds(seconds)),
            Err(_) => text.parse().map(Term::Time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_parsing() {
        assert_eq!("1337".parse::<Term>().unwrap(), Term::Seconds(1337));
        assert_eq!("-60".parse::<Term>().unwrap(), Term::Seconds(-60));
        assert_eq!("9:45".parse::<Term>().unwrap(), Term::Time(ClockTime::hm(9, 45)));
        assert!("nine".parse::<Term>().is_err());
    }

    fn time(text: &str) -> Term {
        Term::Time(text.parse().unwrap())
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(
            demo_lines(),
            [
                "09:45:00",
                "10:07:17",
                "Is end after start?",
                "true",
                "Using Display",
                "09:45:00 10:07:17",
                "11:20:00",
                "10:07:17",
                "10:07:17",
                "Example of polymorphism",
                "23:01:00",
            ]
        );
    }

    #[test]
    fn test_sum_terms_dispatch() {
        assert_eq!(sum_terms([time("9:45"), time("1:35")]).unwrap(), ClockTime::hm(11, 20));
        assert_eq!(sum_terms([time("9:45"), Term::Seconds(1337)]).unwrap(), ClockTime::new(10, 7, 17));
        assert_eq!(sum_terms([Term::Seconds(1337), time("9:45")]).unwrap(), ClockTime::new(10, 7, 17));
        assert_eq!(sum_terms([Term::Seconds(60), Term::Seconds(-1)]).unwrap(), ClockTime::from_total_seconds(59));
        assert_eq!(
            sum_terms([time("7:43"), time("7:41"), time("7:37")]).unwrap().to_string(),
            "23:01:00"
        );
        assert_eq!(sum_terms(std::iter::empty()).unwrap(), ClockTime::default());
    }

    #[test]
    fn test_sum_terms_may_leave_the_day_through_offsets() {
        let total = sum_terms([time("23:00"), Term::Seconds(7200)]).unwrap();
        assert_eq!(total.to_string(), "25:00:00");
        assert!(!total.is_valid());
    }

    #[test]
    fn test_sum_terms_rejects_invalid_time() {
        assert!(matches!(
            sum_terms([time("9:45"), time("25:00")]),
            Err(SumError::InvalidTime(time)) if time == ClockTime::hm(25, 0)
        ));
    }

    #[test]
    fn test_sum_terms_rejects_time_after_total_left_the_day() {
        let result = sum_terms([time("20:00"), time("10:00"), time("1:00")]);
        assert!(matches!(result, Err(SumError::TotalLeftTheDay { .. })));
        assert_eq!(
            result.unwrap_err().to_string(),
            "can't add 01:00:00 to 30:00:00, the total already left the day"
        );
    }

    #[test]
    fn test_sum_terms_reports_overflow() {
        assert!(matches!(
            sum_terms([time("9:45"), Term::Seconds(i64::MAX)]),
            Err(SumError::Overflow)
        ));
        assert!(matches!(
            sum_terms([Term::Seconds(-1), Term::Seconds(i64::MIN)]),
            Err(SumError::Overflow)
        ));
    }

    #[test]
    fn test_cli_parses_negative_offsets() {
        let args = CliArgs::try_parse_from(["clock-time", "sum", "23:00", "-3600", "-1:00"]).unwrap();
        let CliArgs::Sum { terms } = args else {
            panic!("expected the sum subcommand");
        };
        assert_eq!(
            terms,
            [
                Term::Time(ClockTime::hm(23, 0)),
                Term::Seconds(-3600),
                Term::Time(ClockTime::hm(-1, 0)),
            ]
        );
    }

    #[test]
    fn test_cli_rejects_malformed_time() {
        assert!(CliArgs::try_parse_from(["clock-time", "show", "9:45:00:00"]).is_err());
    }

    #[test]
    fn test_cli_rejects_overflowing_time() {
        assert!(CliArgs::try_parse_from(["clock-time", "show", "3000000000000000:00"]).is_err());
        assert!(CliArgs::try_parse_from(["clock-time", "sum", "1:00", "3000000000000000:00"]).is_err());
    }
}
