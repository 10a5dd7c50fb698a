//! Months, as displayed by a month view

use std::convert::TryFrom;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use chrono::{Datelike, Local, NaiveDate};

/// Earliest supported year. Leading filler days of its first month must remain representable
pub const MIN_YEAR: i32 = -9999;
/// Latest supported year
pub const MAX_YEAR: i32 = 9999;

/// A month of a given year.
///
/// There is deliberately no day-of-month here, so that moving from a 31-day month to a shorter one never skips or repeats a month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawMonth")]
pub struct Month {
    year: i32,
    /// 1 to 12
    month: u32,
}

/// The serialized form of a [`Month`], before it is validated
#[derive(Deserialize)]
struct RawMonth {
    year: i32,
    month: u32,
}

/// Used to support serde
impl TryFrom<RawMonth> for Month {
    type Error = String;

    fn try_from(raw: RawMonth) -> Result<Self, Self::Error> {
        Month::new(raw.year, raw.month)
            .ok_or_else(|| format!("Month {}-{:02} is out of range", raw.year, raw.month))
    }
}

impl Month {
    /// Returns `None` if `month` is not in `1..=12` or `year` is out of the supported range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) == false || (MIN_YEAR..=MAX_YEAR).contains(&year) == false {
            return None;
        }
        Some(Self { year, month })
    }

    /// The month that contains this date
    pub fn containing<D: Datelike>(date: &D) -> Self {
        let year = date.year().max(MIN_YEAR).min(MAX_YEAR);
        Self { year, month: date.month() }
    }

    /// The month we are currently in, according to the local clock
    pub fn current() -> Self {
        Self::containing(&Local::now())
    }

    pub fn year(&self) -> i32  { self.year  }
    pub fn month(&self) -> u32 { self.month }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN /* cannot happen within the supported years */)
    }

    pub fn last_day(&self) -> NaiveDate {
        let (year, month) = if self.month == 12 { (self.year + 1, 1) } else { (self.year, self.month + 1) };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .unwrap_or(NaiveDate::MAX /* cannot happen within the supported years */)
    }

    pub fn num_days(&self) -> u32 {
        self.last_day().day()
    }

    /// Whether this date belongs to this month. Only the year and month are compared.
    pub fn contains<D: Datelike>(&self, date: &D) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Shift by `delta` months (negative values go back in time), rolling over years as needed.
    /// The result saturates at the bounds of the supported years.
    pub fn advance(&self, delta: i32) -> Self {
        let min_index = i64::from(MIN_YEAR) * 12;
        let max_index = i64::from(MAX_YEAR) * 12 + 11;
        let index = (self.index() + i64::from(delta)).max(min_index).min(max_index);

        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn previous(&self) -> Self { self.advance(-1) }
    pub fn next(&self) -> Self     { self.advance(1)  }

    fn index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }
}

impl Display for Month {
    /// e.g. `March 2024`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.first_day().format("%B %Y"))
    }
}

/// Parses `YYYY-MM`
impl FromStr for Month {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = match s.trim().rsplit_once('-') {
            Some(parts) => parts,
            None => return Err(format!("Invalid month {:?}, expected YYYY-MM", s).into()),
        };
        let year: i32 = year.parse()?;
        let month: u32 = month.parse()?;
        match Self::new(year, month) {
            Some(m) => Ok(m),
            None => Err(format!("Month {:?} is out of range", s).into()),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new() {
        assert!(Month::new(2024, 0).is_none());
        assert!(Month::new(2024, 13).is_none());
        assert!(Month::new(MAX_YEAR + 1, 1).is_none());
        assert_eq!(Month::new(2024, 3).unwrap().month(), 3);
    }

    #[test]
    fn test_bounds() {
        let feb_2023 = Month::new(2023, 2).unwrap();
        assert_eq!(feb_2023.first_day(), NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
        assert_eq!(feb_2023.last_day(), NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
        assert_eq!(Month::new(2024, 2).unwrap().num_days(), 29);
        assert_eq!(Month::new(2024, 12).unwrap().last_day(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_advance() {
        let jan_2024 = Month::new(2024, 1).unwrap();
        assert_eq!(jan_2024.previous(), Month::new(2023, 12).unwrap());
        assert_eq!(jan_2024.advance(11), Month::new(2024, 12).unwrap());
        assert_eq!(jan_2024.advance(12), Month::new(2025, 1).unwrap());
        assert_eq!(jan_2024.advance(-25), Month::new(2021, 12).unwrap());

        // From a 31-day month to a 30-day one
        let from_31st = Month::containing(&NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert_eq!(from_31st.next(), Month::new(2024, 4).unwrap());
        assert_eq!(from_31st.next().next(), Month::new(2024, 5).unwrap());

        // From January 31st, February must not be skipped
        let jan_31 = Month::containing(&NaiveDate::from_ymd_opt(2023, 1, 31).unwrap());
        assert_eq!(jan_31.next(), Month::new(2023, 2).unwrap());

        let last = Month::new(MAX_YEAR, 12).unwrap();
        assert_eq!(last.next(), last);
        let first = Month::new(MIN_YEAR, 1).unwrap();
        assert_eq!(first.advance(-100), first);
    }

    #[test]
    fn test_display_and_parse() {
        let month: Month = "2024-03".parse().unwrap();
        assert_eq!(month, Month::new(2024, 3).unwrap());
        assert_eq!(month.to_string(), "March 2024");

        assert!("2024".parse::<Month>().is_err());
        assert!("2024-13".parse::<Month>().is_err());
        assert!("march-2024".parse::<Month>().is_err());
    }

    #[test]
    fn test_serde() {
        let month: Month = serde_json::from_str(r#"{"year":2024,"month":3}"#).unwrap();
        assert_eq!(month, Month::new(2024, 3).unwrap());
        assert_eq!(serde_json::to_string(&month).unwrap(), r#"{"year":2024,"month":3}"#);

        assert!(serde_json::from_str::<Month>(r#"{"year":2024,"month":13}"#).is_err());
        assert!(serde_json::from_str::<Month>(r#"{"year":2024,"month":0}"#).is_err());
        assert!(serde_json::from_str::<Month>(r#"{"year":20000,"month":1}"#).is_err());
    }

    #[test]
    fn test_contains() {
        let march = Month::new(2024, 3).unwrap();
        assert!(march.contains(&NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(march.contains(&NaiveDate::from_ymd_opt(2024, 3, 31).unwrap().and_hms_opt(23, 59, 59).unwrap()));
        assert!(march.contains(&NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()) == false);
        assert!(march.contains(&NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()) == false);
    }
}
