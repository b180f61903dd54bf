//! Defines the [`Month`] type, the `(year, month)` key by which posts are
//! archived.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A calendar month, the key under which posts are grouped into archive
/// pages. Equality, hashing, and ordering all go by `(year, month)` value,
/// so two posts published in the same month produce the same key no matter
/// which collection they came from, and keys sort chronologically.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Month {
    /// The calendar year.
    pub year: i32,

    /// The calendar month, `1..=12`.
    pub month: u32,
}

impl Month {
    /// The directory fragment under which the month's archive page lives:
    /// `{year:04}/{month:02}`, e.g. `2023/01`.
    pub fn dir_name(&self) -> String {
        format!("{:04}/{:02}", self.year, self.month)
    }

    /// The first day of the month. Archive pages carry this as their
    /// synthesized date, since they have no authored one.
    pub fn first_day(&self) -> NaiveDate {
        // `month` comes from a parsed date, so it is always in range
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }
}

impl From<NaiveDate> for Month {
    /// Extracts the archive key from a publication date.
    fn from(date: NaiveDate) -> Month {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for Month {
    /// Formats the month as its navigation label, e.g. `2023-04`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn month(year: i32, month: u32) -> Month {
        Month { year, month }
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 17).unwrap();
        assert_eq!(Month::from(date), month(2023, 4));
    }

    #[test]
    fn test_orders_chronologically() {
        assert!(month(2022, 12) < month(2023, 1));
        assert!(month(2023, 1) < month(2023, 2));
    }

    #[test]
    fn test_dir_name_zero_pads() {
        assert_eq!(month(2023, 4).dir_name(), "2023/04");
        assert_eq!(month(99, 7).dir_name(), "0099/07");
    }

    #[test]
    fn test_label_pads_month_only() {
        assert_eq!(month(2023, 4).to_string(), "2023-04");
        assert_eq!(month(99, 7).to_string(), "99-07");
    }

    #[test]
    fn test_first_day() {
        assert_eq!(
            month(2023, 2).first_day(),
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()
        );
    }
}
