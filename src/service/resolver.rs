use chrono::{Datelike, NaiveDate};

use crate::models::event::{ColorClass, Event, Recurrence};

/// An event confirmed to occur on a specific date, before layout.
/// Fixed schedule entries are not editable; stored events are.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub color: ColorClass,
    pub editable: bool,
}

impl Candidate {
    pub fn from_event(event: &Event) -> Self {
        Candidate {
            id: event.id.clone(),
            title: event.title.clone(),
            start: event.start.clone(),
            end: event.end.clone(),
            color: event.color,
            editable: true,
        }
    }
}

/// Weekday index with 0 = Sunday .. 6 = Saturday, matching stored
/// recurrence rules.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

fn occurs_on(event: &Event, date: NaiveDate) -> bool {
    if date < event.start_date {
        return false;
    }
    match &event.recurrence {
        Recurrence::None => event.start_date == date,
        Recurrence::Daily => true,
        Recurrence::Weekly { days } => days.contains(&weekday_index(date)),
    }
}

/// Collects every stored event occurring on `date`, then appends the fixed
/// schedule candidates. No dedup by id: duplicates from different sources
/// are laid out independently.
pub fn resolve_day(date: NaiveDate, stored: &[Event], fixed: Vec<Candidate>) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = stored
        .iter()
        .filter(|event| occurs_on(event, date))
        .map(Candidate::from_event)
        .collect();
    candidates.extend(fixed);
    candidates
}
