//! Shared traits and the calendar month type used across the domain.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

/// Exposes a stable identifier for records handed to the engine.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Associates entities with optional category ownership.
pub trait BelongsToCategory {
    fn category_id(&self) -> Option<Uuid>;
}

/// Supplies a common contract for retrieving monetary amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Exposes the calendar date an entity counts against.
pub trait Dated {
    fn effective_date(&self) -> NaiveDate;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// A calendar month (year plus month-of-year).
///
/// The month spans the half-open range `[start, next.start)`. Construction
/// goes through [`Month::new`] or [`Month::of`], so a value always holds a
/// month number in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Builds a month, rejecting month numbers outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Month> {
        if (1..=12).contains(&month) {
            Some(Month { year, month })
        } else {
            None
        }
    }

    /// The month a date falls in.
    pub fn of(date: NaiveDate) -> Month {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// First day of the month.
    pub fn start(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// The following month.
    pub fn next(self) -> Month {
        if self.month == 12 {
            Month {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Month {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month.
    pub fn prev(self) -> Month {
        if self.month == 1 {
            Month {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Month {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// True when `date` falls inside `[start, next.start)`.
    pub fn contains(self, date: NaiveDate) -> bool {
        Month::of(date) == self
    }

    /// Serial month index used for elapsed-month arithmetic.
    pub fn index(self) -> i32 {
        self.year * 12 + self.month as i32 - 1
    }

    /// Whole months from `earlier` to `self`. Negative when `earlier` is
    /// actually later.
    pub fn months_since(self, earlier: Month) -> i32 {
        self.index() - earlier.index()
    }

    /// The date in this month with the given day-of-month, if it exists.
    /// Day 31 in a 30-day month yields `None`.
    pub fn date_with_day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Human-facing label such as "May 2024".
    pub fn label(self) -> String {
        self.start().format("%B %Y").to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_month_numbers() {
        assert!(Month::new(2024, 0).is_none());
        assert!(Month::new(2024, 13).is_none());
        assert!(Month::new(2024, 12).is_some());
    }

    #[test]
    fn navigation_crosses_year_boundaries() {
        let december = Month::new(2023, 12).unwrap();
        assert_eq!(december.next(), Month::new(2024, 1).unwrap());
        assert_eq!(Month::new(2024, 1).unwrap().prev(), december);
    }

    #[test]
    fn contains_is_half_open() {
        let month = Month::new(2024, 5).unwrap();
        assert!(month.contains(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
        assert!(month.contains(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 4, 30).unwrap()));
    }

    #[test]
    fn months_since_spans_years() {
        let jan = Month::new(2024, 1).unwrap();
        let apr = Month::new(2024, 4).unwrap();
        assert_eq!(apr.months_since(jan), 3);
        assert_eq!(jan.months_since(apr), -3);
        assert_eq!(Month::new(2025, 2).unwrap().months_since(jan), 13);
    }

    #[test]
    fn date_with_day_skips_missing_days() {
        let april = Month::new(2024, 4).unwrap();
        assert!(april.date_with_day(31).is_none());
        assert_eq!(
            april.date_with_day(30),
            Some(NaiveDate::from_ymd_opt(2024, 4, 30).unwrap())
        );
        // Leap-year February keeps the 29th.
        assert!(Month::new(2024, 2).unwrap().date_with_day(29).is_some());
        assert!(Month::new(2023, 2).unwrap().date_with_day(29).is_none());
    }

    #[test]
    fn display_and_label() {
        let month = Month::new(2024, 5).unwrap();
        assert_eq!(month.to_string(), "2024-05");
        assert_eq!(month.label(), "May 2024");
    }
}
