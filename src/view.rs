//! The state of a month view, and the snapshots it hands to the renderer

use chrono::{Datelike, Local, NaiveDate, Weekday};
use csscolorparser::Color;

use crate::grid::{self, Cell};
use crate::Event;
use crate::Month;

/// The mutable state of a month view: which month is displayed, which day is selected, and which day is today.
///
/// It is owned by whatever renders the calendar, and only changes on explicit user actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarView {
    reference_month: Month,
    selected: NaiveDate,
    today: NaiveDate,
}

impl CalendarView {
    /// A view that displays the month of `today`, with `today` selected
    pub fn new(today: NaiveDate) -> Self {
        Self {
            reference_month: Month::containing(&today),
            selected: today,
            today,
        }
    }

    /// Same as [`CalendarView::new`], using the local clock
    pub fn now() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn reference_month(&self) -> Month { self.reference_month }
    pub fn selected(&self) -> NaiveDate    { self.selected        }
    pub fn today(&self) -> NaiveDate       { self.today           }

    pub fn previous_month(&mut self) {
        self.reference_month = grid::advance_month(self.reference_month, -1);
    }

    pub fn next_month(&mut self) {
        self.reference_month = grid::advance_month(self.reference_month, 1);
    }

    pub fn go_to(&mut self, month: Month) {
        self.reference_month = month;
    }

    /// Display the month of today again
    pub fn go_to_today(&mut self) {
        self.reference_month = Month::containing(&self.today);
    }

    /// Record `date` as the selected date.
    /// This does not change the displayed month, even for a filler day of an adjacent month.
    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    /// Update what "today" is, e.g. after midnight
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// Compute everything needed to render the current state
    pub fn snapshot<'a>(&self, events: &'a [Event]) -> MonthSnapshot<'a> {
        let mut by_date = grid::events_by_date(events, self.reference_month);

        let days = grid::cells_for(self.reference_month)
            .into_iter()
            .map(|cell| {
                let date = cell.date();
                DayView {
                    cell,
                    is_today: grid::is_today_at(&date, &self.today),
                    is_selected: grid::is_selected(&date, &self.selected),
                    events: by_date.remove(&date).unwrap_or_default(),
                }
            })
            .collect();

        let headers = grid::weekday_headers()
            .iter()
            .map(|weekday| WeekdayHeader {
                weekday: *weekday,
                is_today: *weekday == self.today.weekday(),
            })
            .collect();

        MonthSnapshot {
            month: self.reference_month,
            today: self.today,
            selected: self.selected,
            headers,
            days,
        }
    }
}

/// A column header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekdayHeader {
    pub weekday: Weekday,
    /// Today falls on this day of the week (regardless of the displayed month)
    pub is_today: bool,
}

/// One day of a [`MonthSnapshot`]
#[derive(Clone, Debug, PartialEq)]
pub struct DayView<'a> {
    pub cell: Cell,
    pub is_today: bool,
    pub is_selected: bool,
    /// Always empty for days outside of the displayed month
    pub events: Vec<&'a Event>,
}

impl<'a> DayView<'a> {
    pub fn date(&self) -> NaiveDate {
        self.cell.date()
    }

    pub fn in_displayed_month(&self) -> bool {
        self.cell.in_displayed_month()
    }

    /// The colors to draw the events with, in the same order as `events`
    pub fn event_colors(&self) -> Vec<Color> {
        self.events.iter().map(|e| e.color()).collect()
    }
}

/// An immutable picture of a month view
#[derive(Clone, Debug, PartialEq)]
pub struct MonthSnapshot<'a> {
    pub month: Month,
    pub today: NaiveDate,
    pub selected: NaiveDate,
    pub headers: Vec<WeekdayHeader>,
    /// Whole weeks, see [`grid::cells_for`]
    pub days: Vec<DayView<'a>>,
}

impl<'a> MonthSnapshot<'a> {
    pub fn weeks(&self) -> std::slice::Chunks<'_, DayView<'a>> {
        self.days.chunks(7)
    }

    /// The selected day, if it is displayed
    pub fn selected_day(&self) -> Option<&DayView<'a>> {
        self.days.iter().find(|d| d.is_selected)
    }
}
