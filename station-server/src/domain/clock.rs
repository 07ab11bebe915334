//! 12-hour clock handling for station schedules.
//!
//! Schedules are submitted as "H:MM AM" strings. Internally every time is a
//! [`MinuteOfDay`], which makes comparisons and the day-cyclic search cheap.

use chrono::NaiveTime;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Minutes from midnight to noon.
const NOON: u16 = 12 * 60;

/// Error returned when a clock string or minute value is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct ClockError {
    reason: &'static str,
}

impl ClockError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// Short description of what was wrong with the input.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A time of day as minutes after midnight, in the range 0-1439.
///
/// Values outside the range cannot be constructed, so formatting is total.
///
/// # Examples
///
/// ```
/// use station_server::domain::MinuteOfDay;
///
/// let t = MinuteOfDay::parse_clock("1:05 PM").unwrap();
/// assert_eq!(t.get(), 13 * 60 + 5);
/// assert_eq!(t.to_string(), "1:05 PM");
///
/// assert!(MinuteOfDay::new(1440).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    /// 12:00 AM.
    pub const MIDNIGHT: Self = Self(0);

    /// Create a minute-of-day, rejecting values of 1440 or more.
    pub fn new(minute: u16) -> Result<Self, ClockError> {
        if minute >= MINUTES_PER_DAY {
            return Err(ClockError::new("minute of day must be 0-1439"));
        }
        Ok(Self(minute))
    }

    /// Returns the raw minute value.
    pub fn get(self) -> u16 {
        self.0
    }

    /// Parse a 12-hour clock string such as "9:30 AM" or "09:30 PM".
    ///
    /// The hour is one or two digits (1-12, with an optional leading zero),
    /// the minute exactly two digits (00-59), followed by a single space and
    /// an uppercase `AM` or `PM`.
    ///
    /// # Examples
    ///
    /// ```
    /// use station_server::domain::MinuteOfDay;
    ///
    /// assert_eq!(MinuteOfDay::parse_clock("12:00 AM").unwrap().get(), 0);
    /// assert_eq!(MinuteOfDay::parse_clock("12:00 PM").unwrap().get(), 720);
    /// assert_eq!(MinuteOfDay::parse_clock("01:00 AM").unwrap().get(), 60);
    ///
    /// assert!(MinuteOfDay::parse_clock("13:00 AM").is_err());
    /// assert!(MinuteOfDay::parse_clock("1:60 AM").is_err());
    /// assert!(MinuteOfDay::parse_clock("1:00 am").is_err());
    /// ```
    pub fn parse_clock(s: &str) -> Result<Self, ClockError> {
        let (hour_str, rest) = s
            .split_once(':')
            .ok_or_else(|| ClockError::new("expected H:MM AM|PM format"))?;

        let hour = parse_hour(hour_str.as_bytes())?;

        // Remainder is exactly "MM AM" or "MM PM"
        let rest = rest.as_bytes();
        if rest.len() != 5 {
            return Err(ClockError::new("expected H:MM AM|PM format"));
        }

        let minute =
            parse_two_digits(&rest[0..2]).ok_or_else(|| ClockError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(ClockError::new("minute must be 00-59"));
        }

        if rest[2] != b' ' {
            return Err(ClockError::new("expected a space before AM/PM"));
        }

        let afternoon = match &rest[3..5] {
            b"AM" => false,
            b"PM" => true,
            _ => return Err(ClockError::new("period must be AM or PM")),
        };

        let minute_of_day = (hour % 12) * 60 + minute + if afternoon { NOON } else { 0 };
        Ok(Self(minute_of_day))
    }

    /// Render as a 12-hour clock string, e.g. "12:30 AM" or "6:05 PM".
    pub fn to_clock_string(self) -> String {
        self.to_naive_time().format("%-I:%M %p").to_string()
    }

    /// Returns the hour on a 12-hour clock (1-12).
    pub fn hour12(self) -> u16 {
        match (self.0 / 60) % 12 {
            0 => 12,
            h => h,
        }
    }

    /// Returns the minute within the hour (0-59).
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Returns true for times from noon onwards.
    pub fn is_pm(self) -> bool {
        self.0 >= NOON
    }

    /// Converts to a chrono time on no particular date.
    pub fn to_naive_time(self) -> NaiveTime {
        // Always in range: the value is below 1440 minutes
        NaiveTime::from_num_seconds_from_midnight_opt(u32::from(self.0) * 60, 0)
            .expect("minute of day is a valid time")
    }
}

/// Returns true if `s` is an acceptable 12-hour clock string.
pub fn is_valid_clock_time(s: &str) -> bool {
    MinuteOfDay::parse_clock(s).is_ok()
}

impl FromStr for MinuteOfDay {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_clock(s)
    }
}

impl fmt::Debug for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MinuteOfDay({} = {})", self.0, self.to_clock_string())
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_clock_string())
    }
}

impl Serialize for MinuteOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_clock_string())
    }
}

/// Parse a one- or two-digit hour in the range 1-12.
fn parse_hour(bytes: &[u8]) -> Result<u16, ClockError> {
    let hour = match bytes {
        [d] => digit(*d),
        [d1, d2] => parse_two_digits(&[*d1, *d2]),
        _ => None,
    }
    .ok_or_else(|| ClockError::new("invalid hour digits"))?;

    if !(1..=12).contains(&hour) {
        return Err(ClockError::new("hour must be 1-12"));
    }
    Ok(hour)
}

fn digit(b: u8) -> Option<u16> {
    (b as char).to_digit(10).map(|d| d as u16)
}

/// Parse two ASCII digit bytes into a u16.
fn parse_two_digits(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 2 {
        return None;
    }
    Some(digit(bytes[0])? * 10 + digit(bytes[1])?)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_clock()(
            hour in 1u16..=12,
            minute in 0u16..60,
            pm in any::<bool>(),
            padded in any::<bool>(),
        ) -> (u16, u16, bool, String) {
            let period = if pm { "PM" } else { "AM" };
            let s = if padded {
                format!("{:02}:{:02} {}", hour, minute, period)
            } else {
                format!("{}:{:02} {}", hour, minute, period)
            };
            (hour, minute, pm, s)
        }
    }

    proptest! {
        /// Every minute of the day survives format then parse
        #[test]
        fn format_parse_roundtrip(m in 0u16..MINUTES_PER_DAY) {
            let t = MinuteOfDay::new(m).unwrap();
            prop_assert_eq!(MinuteOfDay::parse_clock(&t.to_string()).unwrap(), t);
        }

        /// Parse then format keeps hour, minute and period
        #[test]
        fn parse_format_roundtrip((hour, minute, pm, s) in valid_clock()) {
            let t = MinuteOfDay::parse_clock(&s).unwrap();
            prop_assert_eq!(t.hour12(), hour);
            prop_assert_eq!(t.minute(), minute);
            prop_assert_eq!(t.is_pm(), pm);

            let period = if pm { "PM" } else { "AM" };
            prop_assert_eq!(t.to_string(), format!("{}:{:02} {}", hour, minute, period));
        }

        /// Ordering matches the underlying minute value
        #[test]
        fn ordering_matches_minutes(a in 0u16..MINUTES_PER_DAY, b in 0u16..MINUTES_PER_DAY) {
            let ta = MinuteOfDay::new(a).unwrap();
            let tb = MinuteOfDay::new(b).unwrap();
            prop_assert_eq!(ta.cmp(&tb), a.cmp(&b));
        }

        /// Hours above 12 are rejected
        #[test]
        fn invalid_hour_rejected(hour in 13u16..100, minute in 0u16..60) {
            let s = format!("{}:{:02} AM", hour, minute);
            prop_assert!(MinuteOfDay::parse_clock(&s).is_err());
        }

        /// Minutes above 59 are rejected
        #[test]
        fn invalid_minute_rejected(hour in 1u16..=12, minute in 60u16..100) {
            let s = format!("{}:{:02} PM", hour, minute);
            prop_assert!(MinuteOfDay::parse_clock(&s).is_err());
        }

        /// Arbitrary text never panics the parser
        #[test]
        fn arbitrary_input_does_not_panic(s in "\\PC{0,12}") {
            let _ = MinuteOfDay::parse_clock(&s);
        }
    }
}
