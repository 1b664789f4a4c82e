use chrono::{DateTime, Local, NaiveDate};
use std::io::{self, Write};
use std::time::Duration;
use tokio::time::interval;

use crate::config::ViewConfig;
use crate::defaults::{self, BREAK_TIMES};
use crate::handlers::terminal;
use crate::models::event::Event;
use crate::models::time::TimeError;
use crate::service::{countdown, layout, resolver};
use crate::store;

const FULL_RENDER_SECS: u64 = 60;
const COUNTDOWN_SECS: u64 = 1;

/// Builds the complete view for one moment: header, timeline, countdown.
/// The countdown line comes last and unterminated so the fine tick can
/// overwrite it in place.
pub fn render_tick(
    now: DateTime<Local>,
    displayed: NaiveDate,
    events: &[Event],
    view: &ViewConfig,
) -> Result<String, TimeError> {
    let today = now.date_naive();
    let fixed = defaults::fixed_events_for(displayed, today);
    let candidates = resolver::resolve_day(displayed, events, fixed);
    let laid_out = layout::layout_day(&candidates, view)?;

    let mut out = String::new();
    out.push_str(&terminal::day_header(displayed, today));
    out.push('\n');
    if laid_out.is_empty() {
        out.push_str("No events scheduled.\n");
    }
    let now_time = (displayed == today).then(|| now.time());
    out.push_str(&terminal::render_day(&laid_out, now_time, view));
    out.push('\n');
    out.push_str(&countdown_tick(now, displayed)?);
    Ok(out)
}

pub fn countdown_tick(now: DateTime<Local>, displayed: NaiveDate) -> Result<String, TimeError> {
    let state = countdown::next_breakpoint(now.naive_local(), displayed, &BREAK_TIMES)?;
    Ok(terminal::format_countdown(&state))
}

/// Live mode: a coarse timer redraws the whole view (now marker moves),
/// a fine timer refreshes only the countdown line.
pub async fn run_watch_loop(displayed: NaiveDate, view: ViewConfig) {
    let mut full_render = interval(Duration::from_secs(FULL_RENDER_SECS));
    let mut countdown_refresh = interval(Duration::from_secs(COUNTDOWN_SECS));
    loop {
        tokio::select! {
            _ = full_render.tick() => {
                let events = store::load_events(&store::get_db_location());
                match render_tick(Local::now(), displayed, &events, &view) {
                    Ok(body) => {
                        print!("\x1b[2J\x1b[H{body}");
                        let _ = io::stdout().flush();
                    }
                    Err(err) => eprintln!("Failed to render day view: {err}"),
                }
            }
            _ = countdown_refresh.tick() => {
                match countdown_tick(Local::now(), displayed) {
                    Ok(line) => {
                        print!("\r{line}   ");
                        let _ = io::stdout().flush();
                    }
                    Err(err) => eprintln!("Failed to update countdown: {err}"),
                }
            }
        }
    }
}
