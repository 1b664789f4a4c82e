//! Text rendering of the day view. Consumes the layout engine's geometry
//! and metadata only; all placement decisions happen upstream.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::config::ViewConfig;
use crate::service::countdown::CountdownState;
use crate::service::layout::LaidOutEvent;

pub const EVENT_AREA_WIDTH: usize = 72;
const SLOT_MINUTES: u32 = 15;
const GUTTER_WIDTH: usize = 7;

pub fn day_header(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        format!("Today – {} ({})", date.format("%A"), date)
    } else {
        format!("{} ({})", date.format("%A"), date)
    }
}

fn hour_label(hour: u32) -> String {
    let display_hour = match hour % 24 {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    let ampm = if hour % 24 >= 12 { "PM" } else { "AM" };
    format!("{display_hour} {ampm}")
}

fn gutter_for(row: usize, view: &ViewConfig, now_row: Option<usize>) -> String {
    if now_row == Some(row) {
        return format!("{:>width$}▶", "now", width = GUTTER_WIDTH - 1);
    }
    let minutes = view.window_start() + row as u32 * SLOT_MINUTES;
    if minutes % 60 == 0 {
        format!("{:>width$}┤", hour_label(minutes / 60), width = GUTTER_WIDTH - 1)
    } else {
        format!("{:>width$}│", "", width = GUTTER_WIDTH - 1)
    }
}

/// Renders the hour timeline with events placed by their layout geometry.
/// `now` draws the current-time marker and is only passed when the
/// displayed date is the real current date.
pub fn render_day(
    laid_out: &[LaidOutEvent],
    now: Option<NaiveTime>,
    view: &ViewConfig,
) -> String {
    let window_start = view.window_start();
    let window_end = view.window_end();
    let rows = ((window_end - window_start) / SLOT_MINUTES) as usize;
    let mut grid = vec![vec![' '; EVENT_AREA_WIDTH]; rows];

    for event in laid_out {
        if event.end_minutes <= window_start || event.start_minutes >= window_end {
            continue;
        }
        let start = event.start_minutes.max(window_start);
        let end = event.end_minutes.min(window_end);
        let row_start = ((start - window_start) / SLOT_MINUTES) as usize;
        let row_end =
            (((end - window_start) + SLOT_MINUTES - 1) / SLOT_MINUTES) as usize;
        let row_end = row_end.max(row_start + 1).min(rows);

        let left = ((event.left_percent / 100.0) * EVENT_AREA_WIDTH as f32).round() as usize;
        let left = left.min(EVENT_AREA_WIDTH - 1);
        let span = ((event.width_percent / 100.0) * EVENT_AREA_WIDTH as f32).round() as usize;
        let span = span.max(2).min(EVENT_AREA_WIDTH - left);

        let label = format!(
            "{} {}–{} [{}]",
            event.candidate.title,
            event.candidate.start,
            event.candidate.end,
            event.candidate.color.label()
        );
        for row in row_start..row_end {
            grid[row][left] = '▌';
            if row == row_start {
                for (offset, ch) in label.chars().take(span - 1).enumerate() {
                    grid[row][left + 1 + offset] = ch;
                }
            }
        }
    }

    let now_row = now.and_then(|time| {
        let minutes = time.hour() * 60 + time.minute();
        (window_start..window_end)
            .contains(&minutes)
            .then(|| ((minutes - window_start) / SLOT_MINUTES) as usize)
    });

    let mut out = String::new();
    for (row, cells) in grid.iter().enumerate() {
        let line: String = cells.iter().collect();
        out.push_str(&gutter_for(row, view, now_row));
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn format_countdown(state: &CountdownState) -> String {
    match state {
        CountdownState::Inactive => "Countdown: --:--:--".to_string(),
        CountdownState::Upcoming {
            label,
            hours,
            minutes,
            seconds,
        } => format!("{label}: {hours:02}h {minutes:02}m {seconds:02}s"),
        CountdownState::DayComplete => "Work Day Complete! 🎉".to_string(),
    }
}
