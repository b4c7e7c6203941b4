//! Local wall-clock timestamps.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::error::{DomainError, DomainResult};

/// Pattern every timestamp is rendered and parsed with.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Length of a rendered timestamp, e.g. `2024-03-07 14:05:09`.
const TIMESTAMP_LEN: usize = 19;

/// A local wall-clock reading, truncated to whole seconds.
///
/// The value carries no zone. It is whatever the host clock showed when
/// it was read, so two hosts in different zones render different text
/// for the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Creates a timestamp from a wall-clock reading, dropping sub-second precision.
    #[must_use]
    pub fn new(reading: NaiveDateTime) -> Self {
        Self(reading.with_nanosecond(0).unwrap_or(reading))
    }

    /// Creates a timestamp from its calendar fields.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidTimestamp`] if the fields do not name a
    /// real date and time (month 13, February 30th, hour 24, ...).
    pub fn from_parts(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> DomainResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(Self)
            .ok_or_else(|| {
                DomainError::InvalidTimestamp(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ))
            })
    }

    /// Parses text rendered with [`TIMESTAMP_FORMAT`].
    ///
    /// Only the exact fixed-width shape is accepted: unpadded fields,
    /// surrounding whitespace or other separators are rejected.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidTimestamp`] if the text does not have
    /// the fixed shape or names an impossible date.
    pub fn parse(input: &str) -> DomainResult<Self> {
        if !has_fixed_shape(input) {
            return Err(DomainError::InvalidTimestamp(input.to_owned()));
        }

        NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|err| DomainError::InvalidTimestamp(format!("{input}: {err}")))
    }

    /// Returns the underlying wall-clock reading.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(reading: NaiveDateTime) -> Self {
        Self::new(reading)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

fn has_fixed_shape(input: &str) -> bool {
    input.len() == TIMESTAMP_LEN
        && input.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            10 => byte == b' ',
            13 | 16 => byte == b':',
            _ => byte.is_ascii_digit(),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_matches_fixed_pattern() {
        let ts = Timestamp::from_parts(2024, 3, 7, 14, 5, 9).unwrap();
        assert_eq!(ts.to_string(), "2024-03-07 14:05:09");
    }

    #[test]
    fn test_display_zero_pads_every_field() {
        let ts = Timestamp::from_parts(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(ts.to_string(), "2024-01-02 03:04:05");

        let midnight = Timestamp::from_parts(2000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(midnight.to_string(), "2000-01-01 00:00:00");
    }

    #[test]
    fn test_display_uses_24_hour_clock() {
        let ts = Timestamp::from_parts(2023, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(ts.to_string(), "2023-12-31 23:59:59");
    }

    #[test]
    fn test_display_pads_short_years_to_four_digits() {
        let ts = Timestamp::from_parts(999, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(ts.to_string(), "0999-06-15 12:00:00");
    }

    #[test]
    fn test_new_drops_sub_second_precision() {
        let reading = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_milli_opt(14, 5, 9, 987)
            .unwrap();

        let ts = Timestamp::new(reading);

        assert_eq!(ts.as_naive().nanosecond(), 0);
        assert_eq!(ts, Timestamp::from_parts(2024, 3, 7, 14, 5, 9).unwrap());
        assert_eq!(ts.to_string(), "2024-03-07 14:05:09");
    }

    #[test]
    fn test_from_parts_rejects_impossible_dates() {
        assert!(Timestamp::from_parts(2024, 13, 1, 0, 0, 0).is_err());
        assert!(Timestamp::from_parts(2023, 2, 29, 0, 0, 0).is_err());
        assert!(Timestamp::from_parts(2024, 1, 1, 24, 0, 0).is_err());
        assert!(Timestamp::from_parts(2024, 2, 29, 0, 0, 0).is_ok());
    }

    #[test]
    fn test_parse_reads_back_rendered_text() {
        let ts = Timestamp::parse("2024-03-07 14:05:09").unwrap();
        assert_eq!(ts, Timestamp::from_parts(2024, 3, 7, 14, 5, 9).unwrap());
    }

    #[test]
    fn test_parse_rejects_unpadded_fields() {
        let err = Timestamp::parse("2024-3-7 14:05:09").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidTimestamp("2024-3-7 14:05:09".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(Timestamp::parse("").is_err());
        assert!(Timestamp::parse("2024-03-07T14:05:09").is_err());
        assert!(Timestamp::parse("2024/03/07 14:05:09").is_err());
        assert!(Timestamp::parse(" 2024-03-07 14:05:09").is_err());
        assert!(Timestamp::parse("2024-03-07 14:05:09.").is_err());
        assert!(Timestamp::parse("2024-03-07 14:05").is_err());
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        let err = Timestamp::parse("2024-02-30 10:00:00").unwrap_err();
        assert!(matches!(err, DomainError::InvalidTimestamp(_)));
    }

    #[test]
    fn test_ordering_follows_time() {
        let earlier = Timestamp::from_parts(2024, 3, 7, 14, 5, 9).unwrap();
        let later = Timestamp::from_parts(2024, 3, 7, 14, 5, 10).unwrap();
        assert!(earlier < later);
    }
}
