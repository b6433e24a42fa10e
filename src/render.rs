//! Text rendering of a [`Calendar`]
//!
//! The output looks like this:
//! ```text
//! Events Calendar
//! [ New event ]
//!
//! 2018-07-14 .. 2018-07-18 (5 days)
//!          Sat Sun Mon Tue Wed
//!          14  15  16* 17  18
//! Event 1  ### ### ### ###      2018-07-14 .. 2018-07-17
//! Event 2          ### ### ###  2018-07-16 .. 2018-07-18
//! ```

use chrono::{Datelike, NaiveDate};
use unicode_width::UnicodeWidthStr;

use crate::Calendar;
use crate::Event;
use crate::calendar::form::EventForm;

/// The title of the calendar view
pub const TITLE: &str = "Events Calendar";
/// Shown when events could not be fetched
pub const FETCH_ERROR_MESSAGE: &str = "There was an error while fetching the events.";
/// Shown when there is nothing to display
pub const NO_EVENTS_MESSAGE: &str = "No events.";

const NEW_EVENT_BUTTON: &str = "[ New event ]";
const CANCEL_BUTTON: &str = "[ Cancel ]";
const EVENT_BAR: &str = "###";
const CELL_WIDTH: usize = 4;
const MIN_TITLE_WIDTH: usize = 5;

/// Render the whole calendar view
pub fn render<S>(calendar: &Calendar<S>) -> String {
    let mut out = String::new();

    push_line(&mut out, TITLE);
    match calendar.is_new_event_open() {
        true => push_line(&mut out, CANCEL_BUTTON),
        false => push_line(&mut out, NEW_EVENT_BUTTON),
    }
    out.push('\n');

    if calendar.has_fetch_error() {
        push_line(&mut out, FETCH_ERROR_MESSAGE);
    }

    let days = calendar.days();
    match (calendar.first_day(), calendar.last_day()) {
        (Some(first), Some(last)) => {
            push_line(&mut out, &format!("{} .. {} ({} days)", first, last, calendar.days_count()));
            render_grid(&mut out, calendar.events(), &days, calendar.today());
        },
        _ => push_line(&mut out, NO_EVENTS_MESSAGE),
    }

    if let Some(form) = calendar.new_event_form() {
        out.push('\n');
        out.push_str(&render_event_form(form));
    }

    out
}

fn render_grid(out: &mut String, events: &[Event], days: &[NaiveDate], today: NaiveDate) {
    let title_width = events.iter()
        .map(|event| event.title().width())
        .max()
        .unwrap_or(0)
        .max(MIN_TITLE_WIDTH);
    let indent = " ".repeat(title_width + 2);

    let weekdays: String = days.iter().map(|day| format!("{:<width$}", day.format("%a").to_string(), width = CELL_WIDTH)).collect();
    let numbers: String = days.iter().map(|day| render_day(*day, today)).collect();
    push_line(out, &format!("{}{}", indent, weekdays));
    push_line(out, &format!("{}{}", indent, numbers));

    for event in events {
        push_line(out, &render_event_row(event, days, title_width));
    }
}

/// A day cell: the day of the month, marked with a `*` when it is today
pub fn render_day(day: NaiveDate, today: NaiveDate) -> String {
    let mark = if day == today { '*' } else { ' ' };
    format!("{:<2}{} ", day.day(), mark)
}

/// An event cell: its title, a bar over the days it covers, and its date range
pub fn render_event_row(event: &Event, days: &[NaiveDate], title_width: usize) -> String {
    let mut row = pad(event.title(), title_width);
    row.push_str("  ");
    for day in days {
        match event.covers(*day) {
            true => row.push_str(&format!("{:<width$}", EVENT_BAR, width = CELL_WIDTH)),
            false => row.push_str(&" ".repeat(CELL_WIDTH)),
        }
    }
    row.push_str(&format!(" {} .. {}", event.start_date(), event.end_date()));
    row
}

/// The "new event" sub-view
pub fn render_event_form(form: &EventForm) -> String {
    format!(
        "New event\n  Title: {}\n  Start date (YYYY-MM-DD): {}\n  End date (YYYY-MM-DD): {}\n",
        form.title, form.start_date, form.end_date
    )
}

/// Pad `text` with spaces, up to `width` columns on a terminal
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}
