//! Some utility functions, to render a month view as text

use chrono::{Datelike, NaiveDate};

use crate::view::{DayView, MonthSnapshot, WeekdayHeader};

/// Width of a rendered day, in characters
const CELL_WIDTH: usize = 9;

/// e.g. `5 March 2024`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Render a month as a text grid.
///
/// In each cell, `>` marks the selected day, `*` marks today, days of adjacent months are between parentheses and `+n` tells how many events there are.
pub fn render_month(snapshot: &MonthSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:^width$}\n", snapshot.month.to_string(), width = CELL_WIDTH * 7));

    let headers: Vec<String> = snapshot.headers.iter().map(render_header).collect();
    out.push_str(headers.join("").trim_end());
    out.push('\n');

    for week in snapshot.weeks() {
        let cells: Vec<String> = week.iter().map(render_cell).collect();
        out.push_str(cells.join("").trim_end());
        out.push('\n');
    }
    out
}

fn render_header(header: &WeekdayHeader) -> String {
    let name = header.weekday.to_string();
    let label = if header.is_today { format!("[{}]", name) } else { name };
    format!("{:^width$}", label, width = CELL_WIDTH)
}

fn render_cell(day: &DayView) -> String {
    let selected = if day.is_selected { '>' } else { ' ' };
    let (open, close) = if day.in_displayed_month() { (' ', ' ') } else { ('(', ')') };
    let today = if day.is_today { '*' } else { ' ' };
    let events = if day.events.is_empty() { String::new() } else { format!("+{}", day.events.len()) };
    format!("{}{}{:>2}{}{}{:<3}", selected, open, day.date().day(), close, today, events)
}

/// Render the list of events of a day
pub fn render_day_events(day: &DayView) -> String {
    let mut out = format!("{}\n", day.date().format("%A %-d %B %Y"));
    if day.events.is_empty() {
        out.push_str("    (no events)\n");
    }
    for event in &day.events {
        out.push_str(&format!("    • {} ({}) {}\n", event.title(), event.time_range(), event.color().to_hex_string()));
    }
    out
}

/// A debug utility that pretty-prints a month, and the events of its selected day
pub fn print_month(snapshot: &MonthSnapshot) {
    println!("{}", render_month(snapshot));
    match snapshot.selected_day() {
        Some(day) => print!("{}", render_day_events(day)),
        None => println!("Selected: {} (not displayed)", format_long_date(snapshot.selected)),
    }
}
