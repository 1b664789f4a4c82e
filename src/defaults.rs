//! Built-in schedule: the fixed events injected per weekday and the break
//! times the countdown counts toward. Supplied to the resolver as plain
//! candidate lists; nothing here is persisted.

use chrono::NaiveDate;

use crate::models::event::ColorClass;
use crate::service::resolver::{weekday_index, Candidate};

pub struct Breakpoint {
    pub time: &'static str,
    pub label: &'static str,
}

pub const BREAK_TIMES: [Breakpoint; 4] = [
    Breakpoint { time: "09:00", label: "Next Break In" },
    Breakpoint { time: "11:00", label: "Lunch Break In" },
    Breakpoint { time: "14:00", label: "Next Break In" },
    Breakpoint { time: "16:00", label: "Time Until Clock Out" },
];

fn fixed(id: &str, start: &str, end: &str, title: &str, color: ColorClass) -> Candidate {
    Candidate {
        id: id.to_string(),
        title: title.to_string(),
        start: start.to_string(),
        end: end.to_string(),
        color,
        editable: false,
    }
}

fn weekday_defaults() -> Vec<Candidate> {
    vec![
        fixed("d1", "06:00", "07:00", "Workout 🏋️", ColorClass::Blue),
        fixed("d2", "07:00", "07:30", "Breakfast & Log Prio Today", ColorClass::Orange),
        fixed("d3", "08:15", "08:30", "Red Room Meeting 📲", ColorClass::Red),
        fixed("d4", "09:00", "09:15", "Break Time", ColorClass::Green),
        fixed("d5", "09:30", "11:00", "Focus on BAU", ColorClass::Yellow),
        fixed("d6", "11:00", "12:00", "Lunch Break", ColorClass::Green),
        fixed("d7", "12:00", "14:00", "Focus on Projects", ColorClass::Yellow),
        fixed("d8", "14:00", "14:15", "Break Time", ColorClass::Green),
        fixed("d9", "15:45", "16:00", "Create EOD and prepare to leave", ColorClass::Orange),
    ]
}

fn tomorrow_defaults() -> Vec<Candidate> {
    vec![fixed("d10", "11:00", "12:00", "Lunch with Sarah", ColorClass::Purple)]
}

fn friday_meeting() -> Candidate {
    fixed("d-friday-meeting", "10:00", "11:00", "Catch up meeting", ColorClass::Purple)
}

/// Fixed candidates for `date`. The weekday set covers Mon-Fri, the
/// "tomorrow" set is relative to the real current date (not the displayed
/// one), and Friday gets its own meeting on top of the weekday set.
pub fn fixed_events_for(date: NaiveDate, today: NaiveDate) -> Vec<Candidate> {
    let mut out = Vec::new();
    let weekday = weekday_index(date);
    if (1..=5).contains(&weekday) {
        out.extend(weekday_defaults());
    }
    if today.succ_opt() == Some(date) {
        out.extend(tomorrow_defaults());
    }
    if weekday == 5 {
        out.push(friday_meeting());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekdays_get_the_default_schedule() {
        // Monday, displayed well away from "today".
        let fixed = fixed_events_for(date(2026, 3, 2), date(2026, 2, 1));
        assert_eq!(fixed.len(), 9);
        assert!(fixed.iter().all(|c| !c.editable));
    }

    #[test]
    fn weekends_are_empty() {
        // Saturday and Sunday.
        assert!(fixed_events_for(date(2026, 3, 7), date(2026, 2, 1)).is_empty());
        assert!(fixed_events_for(date(2026, 3, 8), date(2026, 2, 1)).is_empty());
    }

    #[test]
    fn friday_adds_the_catch_up_meeting() {
        let fixed = fixed_events_for(date(2026, 3, 6), date(2026, 2, 1));
        assert_eq!(fixed.len(), 10);
        assert_eq!(fixed.last().unwrap().id, "d-friday-meeting");
    }

    #[test]
    fn tomorrow_set_tracks_the_real_current_date() {
        // Displayed date is the day after "today", a Tuesday.
        let fixed = fixed_events_for(date(2026, 3, 3), date(2026, 3, 2));
        assert!(fixed.iter().any(|c| c.id == "d10"));
        // Same displayed date, but "today" is elsewhere.
        let fixed = fixed_events_for(date(2026, 3, 3), date(2026, 3, 3));
        assert!(!fixed.iter().any(|c| c.id == "d10"));
    }

    #[test]
    fn tomorrow_set_applies_even_on_weekends() {
        // Saturday as the day after a Friday "today".
        let fixed = fixed_events_for(date(2026, 3, 7), date(2026, 3, 6));
        assert_eq!(fixed.len(), 1);
        assert_eq!(fixed[0].id, "d10");
    }
}
