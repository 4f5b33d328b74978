use std::{
    fmt,
    iter::Sum,
    num::ParseIntError,
    ops::Add,
    str::FromStr,
};

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// A time of day, stored as seconds since midnight.
///
/// Out-of-range values are representable, use [`ClockTime::is_valid`] to
/// check if a value falls inside a single day.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    total_seconds: i64,
}

impl ClockTime {
    /// # Panics
    ///
    /// On `i64` overflow when combining the components (debug builds).
    pub const fn new(hour: i64, minute: i64, second: i64) -> Self {
        Self {
            total_seconds: hour * SECONDS_PER_HOUR + minute * SECONDS_PER_MINUTE + second,
        }
    }

    pub const fn hm(hour: i64, minute: i64) -> Self {
        Self::new(hour, minute, 0)
    }

    /// Builds from any number of seconds, including negative ones and ones
    /// past the end of the day.
    ///
    /// Splitting into floor-divided components and combining them back is the
    /// identity, so the value is stored as-is (see [`ClockTime::hms`]). Unlike
    /// [`ClockTime::new`] this never overflows.
    pub const fn from_total_seconds(seconds: i64) -> Self {
        Self { total_seconds: seconds }
    }

    pub const fn to_int(self) -> i64 {
        self.total_seconds
    }

    /// Splits into `(hour, minute, second)` with floor division, the hour is
    /// not wrapped to a day. `-1` splits into `(-1, 59, 59)`.
    pub const fn hms(self) -> (i64, i64, i64) {
        let (hour, rest) = floor_divmod(self.total_seconds, SECONDS_PER_HOUR);
        let (minute, second) = floor_divmod(rest, SECONDS_PER_MINUTE);
        (hour, minute, second)
    }

    pub const fn is_valid(self) -> bool {
        0 <= self.total_seconds && self.total_seconds < SECONDS_PER_DAY
    }

    pub const fn is_after(self, other: Self) -> bool {
        self.total_seconds > other.total_seconds
    }

    /// Adds two times of day.
    ///
    /// # Panics
    ///
    /// If either operand is not valid. The result may still be past the end
    /// of the day, but two valid operands can't overflow.
    pub fn add_time(self, other: Self) -> Self {
        assert!(
            self.is_valid() && other.is_valid(),
            "Can't add invalid times ({self} + {other})"
        );
        Self::from_total_seconds(self.total_seconds + other.total_seconds)
    }

    /// # Panics
    ///
    /// If the offset takes the total past the `i64` range (debug builds).
    pub const fn increment(self, seconds: i64) -> Self {
        Self::from_total_seconds(self.total_seconds + seconds)
    }

    pub fn print(self) {
        crate::showln!(self);
    }
}

const fn floor_divmod(dividend: i64, divisor: i64) -> (i64, i64) {
    (dividend.div_euclid(divisor), dividend.rem_euclid(divisor))
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, minute, second) = self.hms();
        write!(f, "{hour:02}:{minute:02}:{second:02}")
    }
}

impl From<i64> for ClockTime {
    fn from(seconds: i64) -> Self {
        Self::from_total_seconds(seconds)
    }
}

impl From<ClockTime> for i64 {
    fn from(time: ClockTime) -> Self {
        time.to_int()
    }
}

impl Add for ClockTime {
    type Output = ClockTime;

    fn add(self, rhs: ClockTime) -> ClockTime {
        self.add_time(rhs)
    }
}

impl Add<&ClockTime> for &ClockTime {
    type Output = ClockTime;

    fn add(self, rhs: &ClockTime) -> ClockTime {
        self.add_time(*rhs)
    }
}

impl Add<i64> for ClockTime {
    type Output = ClockTime;

    fn add(self, seconds: i64) -> ClockTime {
        self.increment(seconds)
    }
}

impl Add<ClockTime> for i64 {
    type Output = ClockTime;

    fn add(self, time: ClockTime) -> ClockTime {
        time + self
    }
}

impl Add<&ClockTime> for i64 {
    type Output = ClockTime;

    fn add(self, time: &ClockTime) -> ClockTime {
        *time + self
    }
}

/// Sums like a fold seeded with `0`: the first item is an increment, the
/// remaining ones go through [`ClockTime::add_time`].
impl Sum for ClockTime {
    fn sum<I: Iterator<Item = ClockTime>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(0_i64 + first, |total, time| total + time),
            None => ClockTime::default(),
        }
    }
}

impl<'a> Sum<&'a ClockTime> for ClockTime {
    fn sum<I: Iterator<Item = &'a ClockTime>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseClockTimeError {
    #[error("expected HH:MM or HH:MM:SS, found {0} field(s)")]
    FieldCount(usize),
    #[error("invalid {field} field")]
    InvalidField {
        field: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("time doesn't fit in 64-bit seconds")]
    OutOfRange,
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = text.trim().split(':').collect();

        if !matches!(fields.len(), 2 | 3) {
            return Err(ParseClockTimeError::FieldCount(fields.len()));
        }

        let mut components = [0i64; 3];
        for ((component, field), name) in components.iter_mut().zip(&fields).zip(["hour", "minute", "second"]) {
            *component = field
                .parse()
                .map_err(|source| ParseClockTimeError::InvalidField { field: name, source })?;
        }

        let [hour, minute, second] = components;
        let total_seconds = hour
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(|seconds| seconds.checked_add(minute.checked_mul(SECONDS_PER_MINUTE)?))
            .and_then(|seconds| seconds.checked_add(second))
            .ok_or(ParseClockTimeError::OutOfRange)?;

        Ok(Self { total_seconds })
    }
}
