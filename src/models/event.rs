use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{self, StoreError};

/// Visual category tag. Serialized with the CSS-class style names the
/// stored event file has always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorClass {
    #[serde(rename = "event-blue")]
    Blue,
    #[serde(rename = "event-orange")]
    Orange,
    #[serde(rename = "event-red")]
    Red,
    #[serde(rename = "event-green")]
    Green,
    #[serde(rename = "event-yellow")]
    Yellow,
    #[serde(rename = "event-purple")]
    Purple,
}

impl ColorClass {
    pub const ALL: [ColorClass; 6] = [
        ColorClass::Blue,
        ColorClass::Orange,
        ColorClass::Red,
        ColorClass::Green,
        ColorClass::Yellow,
        ColorClass::Purple,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorClass::Blue => "blue",
            ColorClass::Orange => "orange",
            ColorClass::Red => "red",
            ColorClass::Green => "green",
            ColorClass::Yellow => "yellow",
            ColorClass::Purple => "purple",
        }
    }
}

/// Weekday indices use 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly {
        days: Vec<u8>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// First calendar day the event can occur on, "YYYY-MM-DD" on disk.
    pub start_date: NaiveDate,
    /// Time of day, "HH:MM", 24-hour.
    pub start: String,
    pub end: String,
    pub color: ColorClass,
    #[serde(default)]
    pub recurrence: Recurrence,
}

/// Fields the user supplies when creating an event; the id is minted here.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub start_date: NaiveDate,
    pub start: String,
    pub end: String,
    pub color: ColorClass,
    pub recurrence: Recurrence,
}

pub fn create_event(events: &mut Vec<Event>, draft: EventDraft) -> Result<String, StoreError> {
    let id = Uuid::new_v4().to_string();
    events.push(Event {
        id: id.clone(),
        title: draft.title,
        start_date: draft.start_date,
        start: draft.start,
        end: draft.end,
        color: draft.color,
        recurrence: draft.recurrence,
    });
    store::save_events(&store::get_db_location(), events)?;
    Ok(id)
}

/// Replaces the event with the same id in place, or appends when the id is
/// new. Collection order is otherwise preserved.
pub fn upsert_event(events: &mut Vec<Event>, event: Event) -> Result<(), StoreError> {
    match events.iter_mut().find(|e| e.id == event.id) {
        Some(existing) => *existing = event,
        None => events.push(event),
    }
    store::save_events(&store::get_db_location(), events)
}

/// Removing an unknown id is a no-op, not an error.
pub fn delete_event(events: &mut Vec<Event>, id: &str) -> Result<(), StoreError> {
    events.retain(|e| e.id != id);
    store::save_events(&store::get_db_location(), events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn with_temp_db(f: impl FnOnce()) {
        let _guard = ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();
        let temp_dir = env::temp_dir().join(format!("daygrid_test_{}", Uuid::new_v4()));
        unsafe {
            env::set_var("DB_LOCATION", &temp_dir);
        }
        f();
    }

    fn sample(id: &str, title: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            start: "09:00".to_string(),
            end: "10:00".to_string(),
            color: ColorClass::Blue,
            recurrence: Recurrence::None,
        }
    }

    #[test]
    fn recurrence_serializes_with_type_tag() {
        let weekly = Recurrence::Weekly { days: vec![1, 3, 5] };
        let json = serde_json::to_string(&weekly).unwrap();
        assert_eq!(json, r#"{"type":"weekly","days":[1,3,5]}"#);

        let none: Recurrence = serde_json::from_str(r#"{"type":"none"}"#).unwrap();
        assert_eq!(none, Recurrence::None);
    }

    #[test]
    fn event_round_trips_with_css_style_color_tags() {
        let event = sample("abc", "Standup");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""color":"event-blue""#));
        assert!(json.contains(r#""start_date":"2026-03-02""#));
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "abc");
        assert_eq!(back.color, ColorClass::Blue);
    }

    #[test]
    fn missing_recurrence_defaults_to_none() {
        let json = r#"{"id":"x","title":"t","start_date":"2026-03-02",
            "start":"09:00","end":"10:00","color":"event-red"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.recurrence, Recurrence::None);
    }

    #[test]
    fn upsert_replaces_in_place_and_appends_new() {
        with_temp_db(|| {
            let mut events = vec![sample("a", "first"), sample("b", "second")];
            let mut replacement = sample("a", "renamed");
            replacement.start = "11:00".to_string();
            upsert_event(&mut events, replacement).unwrap();
            assert_eq!(events.len(), 2);
            assert_eq!(events[0].title, "renamed");
            assert_eq!(events[0].start, "11:00");

            upsert_event(&mut events, sample("c", "third")).unwrap();
            assert_eq!(events.len(), 3);
            assert_eq!(events[2].id, "c");
        });
    }

    #[test]
    fn delete_is_idempotent() {
        with_temp_db(|| {
            let mut events = vec![sample("a", "first")];
            delete_event(&mut events, "missing").unwrap();
            assert_eq!(events.len(), 1);
            delete_event(&mut events, "a").unwrap();
            delete_event(&mut events, "a").unwrap();
            assert!(events.is_empty());
        });
    }
}
