//! Computation of the month grid, and binding of events onto it
//!
//! Everything in this module is pure: the results only depend on the arguments (and, for [`is_today`], on the local clock).

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

use crate::Event;
use crate::Month;

/// The first day of every displayed week
pub const WEEK_START: Weekday = Weekday::Sun;

/// A single day of the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    date: NaiveDate,
    in_displayed_month: bool,
}

impl Cell {
    pub fn date(&self) -> NaiveDate { self.date }
    /// `false` for the days of adjacent months that only complete the first or last week
    pub fn in_displayed_month(&self) -> bool { self.in_displayed_month }
}

/// The cells to display for `month`.
///
/// They start on the [`WEEK_START`] on or before the first day of the month, end on the last day of the week that contains the last day of the month,
/// and there is exactly one cell per day in between.
pub fn cells_for(month: Month) -> Vec<Cell> {
    let start = start_of_week(month.first_day());
    let end = end_of_week(month.last_day());

    let mut cells = Vec::with_capacity(42);
    let mut day = Some(start);
    while let Some(date) = day {
        if date > end {
            break;
        }
        cells.push(Cell { date, in_displayed_month: month.contains(&date) });
        day = date.succ_opt();
    }
    cells
}

/// Same as [`cells_for`], split into rows of seven days
pub fn weeks_for(month: Month) -> Vec<Vec<Cell>> {
    cells_for(month)
        .chunks(7)
        .map(|week| week.to_vec())
        .collect()
}

/// The seven days of a week, in display order
pub fn weekday_headers() -> [Weekday; 7] {
    let mut headers = [WEEK_START; 7];
    let mut weekday = WEEK_START;
    for header in headers.iter_mut() {
        *header = weekday;
        weekday = weekday.succ();
    }
    headers
}

fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = days_since_week_start(date.weekday());
    date.checked_sub_days(Days::new(u64::from(offset))).unwrap_or(date)
}

fn end_of_week(date: NaiveDate) -> NaiveDate {
    let offset = 6 - days_since_week_start(date.weekday());
    date.checked_add_days(Days::new(u64::from(offset))).unwrap_or(date)
}

fn days_since_week_start(weekday: Weekday) -> u32 {
    (7 + weekday.num_days_from_monday() - WEEK_START.num_days_from_monday()) % 7
}


/// The events of `month`, grouped by day.
///
/// Events keep the order they have in `events`. Events from other months (including the filler days shown around `month`) are left out,
/// and so are events whose date cannot be parsed.
pub fn events_by_date<'a>(events: &'a [Event], month: Month) -> BTreeMap<NaiveDate, Vec<&'a Event>> {
    let mut map: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();

    for event in events {
        let date = match event.date() {
            None => continue,
            Some(date) => date,
        };
        if month.contains(&date) == false {
            continue;
        }
        map.entry(date).or_default().push(event);
    }

    map
}

/// The key that identifies a day, e.g. `2024-03-05`
pub fn date_key<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Returns `month` shifted by `delta` months. See [`Month::advance`]
pub fn advance_month(month: Month, delta: i32) -> Month {
    month.advance(delta)
}


/// Whether both values fall on the same calendar day. Time-of-day components are ignored.
pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.ordinal() == b.ordinal()
}

/// Whether `date` is today, according to the local clock
pub fn is_today<D: Datelike>(date: &D) -> bool {
    is_today_at(date, &Local::now())
}

/// Whether `date` is the same day as `now`
pub fn is_today_at<D: Datelike, N: Datelike>(date: &D, now: &N) -> bool {
    is_same_day(date, now)
}

pub fn is_selected<D: Datelike, S: Datelike>(date: &D, selected: &S) -> bool {
    is_same_day(date, selected)
}

pub fn is_in_month<D: Datelike>(date: &D, month: Month) -> bool {
    month.contains(date)
}
