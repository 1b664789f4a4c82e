use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::defaults::Breakpoint;
use crate::models::time::{to_minutes, TimeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownState {
    /// Displayed date is not the real current date.
    Inactive,
    Upcoming {
        label: String,
        hours: u32,
        minutes: u32,
        seconds: u32,
    },
    /// Every breakpoint is behind us.
    DayComplete,
}

/// Pure function of the clock: picks the earliest breakpoint strictly in
/// the future today and decomposes the remaining time.
pub fn next_breakpoint(
    now: NaiveDateTime,
    displayed: NaiveDate,
    breakpoints: &[Breakpoint],
) -> Result<CountdownState, TimeError> {
    if displayed != now.date() {
        return Ok(CountdownState::Inactive);
    }
    let now_seconds = now.time().num_seconds_from_midnight();
    let mut next: Option<(u32, &'static str)> = None;
    for breakpoint in breakpoints {
        let target_seconds = to_minutes(breakpoint.time)? * 60;
        if target_seconds <= now_seconds {
            continue;
        }
        if next.is_none_or(|(best, _)| target_seconds < best) {
            next = Some((target_seconds, breakpoint.label));
        }
    }
    Ok(match next {
        Some((target_seconds, label)) => {
            let remaining = target_seconds - now_seconds;
            CountdownState::Upcoming {
                label: label.to_string(),
                hours: remaining / 3600,
                minutes: (remaining / 60) % 60,
                seconds: remaining % 60,
            }
        }
        None => CountdownState::DayComplete,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::BREAK_TIMES;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn counts_down_to_the_first_break() {
        let state = next_breakpoint(at(8, 12, 30), today(), &BREAK_TIMES).unwrap();
        assert_eq!(
            state,
            CountdownState::Upcoming {
                label: "Next Break In".to_string(),
                hours: 0,
                minutes: 47,
                seconds: 30,
            }
        );
    }

    #[test]
    fn mid_day_picks_the_next_upcoming_target() {
        let state = next_breakpoint(at(12, 0, 0), today(), &BREAK_TIMES).unwrap();
        assert_eq!(
            state,
            CountdownState::Upcoming {
                label: "Next Break In".to_string(),
                hours: 2,
                minutes: 0,
                seconds: 0,
            }
        );
    }

    #[test]
    fn a_breakpoint_at_exactly_now_is_not_upcoming() {
        let state = next_breakpoint(at(14, 0, 0), today(), &BREAK_TIMES).unwrap();
        match state {
            CountdownState::Upcoming { label, hours, .. } => {
                assert_eq!(label, "Time Until Clock Out");
                assert_eq!(hours, 2);
            }
            other => panic!("expected clock-out countdown, got {other:?}"),
        }
    }

    #[test]
    fn after_the_last_breakpoint_the_day_is_complete() {
        let state = next_breakpoint(at(16, 0, 0), today(), &BREAK_TIMES).unwrap();
        assert_eq!(state, CountdownState::DayComplete);
    }

    #[test]
    fn inactive_when_viewing_another_date() {
        let other = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
        let state = next_breakpoint(at(8, 0, 0), other, &BREAK_TIMES).unwrap();
        assert_eq!(state, CountdownState::Inactive);
    }
}
