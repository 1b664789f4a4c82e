use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use inquire::{Select, Text};

use crate::config::ViewConfig;
use crate::models::event::{self, ColorClass, Event, EventDraft, Recurrence};
use crate::models::time::{snap_to_quarter, to_minutes, to_time_str};
use crate::tasks::watch_loop;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the day view once.
    Show {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Create an event from arguments.
    Add {
        title: String,
        date: NaiveDate,
        start: String,
        end: String,
        #[arg(long, value_parser = parse_color, default_value = "blue")]
        color: ColorClass,
        /// none, daily, or weekly (weekly needs --days).
        #[arg(long, default_value = "none")]
        recur: String,
        /// Weekday indices, 0 = Sunday .. 6 = Saturday.
        #[arg(long, value_delimiter = ',')]
        days: Vec<u8>,
    },
    /// Create an event through interactive prompts.
    AddPrompt {},
    /// Update fields of a stored event.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long, value_parser = parse_color)]
        color: Option<ColorClass>,
    },
    /// Remove a stored event.
    Delete { id: String },
    /// List stored events.
    List,
    /// Live view: the now marker and countdown keep refreshing.
    Watch {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn parse_color(value: &str) -> Result<ColorClass, String> {
    ColorClass::ALL
        .into_iter()
        .find(|color| color.label() == value)
        .ok_or_else(|| {
            format!("unknown color {value}, expected one of blue/orange/red/green/yellow/purple")
        })
}

fn build_recurrence(recur: &str, days: Vec<u8>) -> Result<Recurrence, String> {
    match recur {
        "none" => Ok(Recurrence::None),
        "daily" => Ok(Recurrence::Daily),
        "weekly" => {
            if days.is_empty() {
                return Err("weekly recurrence needs --days, e.g. --days 1,3,5".to_string());
            }
            if let Some(bad) = days.iter().find(|&&d| d > 6) {
                return Err(format!("weekday index {bad} out of range 0..=6"));
            }
            Ok(Recurrence::Weekly { days })
        }
        other => Err(format!("unknown recurrence {other}, expected none/daily/weekly")),
    }
}

fn validate_times(start: &str, end: &str) -> Result<(), String> {
    to_minutes(start).map_err(|e| e.to_string())?;
    to_minutes(end).map_err(|e| e.to_string())?;
    Ok(())
}

pub async fn cli(events: &mut Vec<Event>, view: &ViewConfig) {
    // Fine to panic here
    let cli = Cli::parse();
    let now = Local::now();
    match cli.command {
        Commands::Show { date } => {
            let displayed = date.unwrap_or(now.date_naive());
            match watch_loop::render_tick(now, displayed, events, view) {
                Ok(body) => println!("{body}"),
                Err(e) => println!("Failed to render day view: {e}"),
            }
        }
        Commands::Add {
            title,
            date,
            start,
            end,
            color,
            recur,
            days,
        } => {
            let draft = match build_add_draft(title, date, start, end, color, recur, days) {
                Ok(draft) => draft,
                Err(e) => {
                    println!("Failed to create event: {e}");
                    return;
                }
            };
            match event::create_event(events, draft) {
                Ok(id) => println!("Created event {id}"),
                Err(e) => println!("Failed to create event: {e}"),
            }
        }
        Commands::AddPrompt {} => match create_event_from_prompt(events, now.date_naive()) {
            Ok(id) => println!("Created event {id}"),
            Err(e) => println!("Failed to create event from prompt: {e}"),
        },
        Commands::Edit {
            id,
            title,
            date,
            start,
            end,
            color,
        } => {
            let Some(existing) = events.iter().find(|e| e.id == id).cloned() else {
                println!("No event with id {id}; nothing to update.");
                return;
            };
            let updated = Event {
                title: title.unwrap_or(existing.title.clone()),
                start_date: date.unwrap_or(existing.start_date),
                start: start.unwrap_or(existing.start.clone()),
                end: end.unwrap_or(existing.end.clone()),
                color: color.unwrap_or(existing.color),
                ..existing
            };
            if let Err(e) = validate_times(&updated.start, &updated.end) {
                println!("Failed to update event: {e}");
                return;
            }
            match event::upsert_event(events, updated) {
                Ok(()) => println!("Updated event {id}"),
                Err(e) => println!("Failed to update event: {e}"),
            }
        }
        Commands::Delete { id } => match event::delete_event(events, &id) {
            Ok(()) => println!("Deleted event {id} (no-op if it did not exist)"),
            Err(e) => println!("Failed to delete event: {e}"),
        },
        Commands::List => {
            if events.is_empty() {
                println!("No stored events.");
            }
            for ev in events.iter() {
                println!(
                    "{}  {}  {}-{}  from {}  {:?}  {}",
                    ev.id,
                    ev.title,
                    ev.start,
                    ev.end,
                    ev.start_date,
                    ev.recurrence,
                    ev.color.label()
                );
            }
        }
        Commands::Watch { date } => {
            let displayed = date.unwrap_or(now.date_naive());
            watch_loop::run_watch_loop(displayed, *view).await;
        }
    }
}

fn build_add_draft(
    title: String,
    date: NaiveDate,
    start: String,
    end: String,
    color: ColorClass,
    recur: String,
    days: Vec<u8>,
) -> Result<EventDraft, String> {
    validate_times(&start, &end)?;
    Ok(EventDraft {
        title,
        start_date: date,
        start,
        end,
        color,
        recurrence: build_recurrence(&recur, days)?,
    })
}

fn quantize_start(raw: &str) -> Result<u32, crate::models::time::TimeError> {
    Ok(snap_to_quarter(to_minutes(raw)?))
}

fn create_event_from_prompt(
    events: &mut Vec<Event>,
    today: NaiveDate,
) -> Result<String, Box<dyn std::error::Error>> {
    let title = Text::new("Event title").prompt()?;
    let date_text = Text::new("Date (YYYY-MM-DD)")
        .with_default(&today.to_string())
        .prompt()?;
    let start_date: NaiveDate = date_text.parse()?;

    let raw_start = Text::new("Start time (HH:MM)").prompt()?;
    // Starts land on the quarter-hour grid, like clicks on the old timeline,
    // and the suggested end is the half-hour slot that click used to give.
    let start_minutes = quantize_start(&raw_start)?;
    let start = to_time_str(start_minutes);
    let suggested_end = to_time_str(start_minutes + 30);
    let end = Text::new("End time (HH:MM)")
        .with_default(&suggested_end)
        .prompt()?;
    to_minutes(&end)?;

    let color_labels: Vec<&str> = ColorClass::ALL.iter().map(|c| c.label()).collect();
    let color = parse_color(Select::new("Color", color_labels).prompt()?)?;

    let recur = Select::new("Repeats", vec!["none", "daily", "weekly"]).prompt()?;
    let days = if recur == "weekly" {
        let raw = Text::new("Weekdays (0=Sun..6=Sat, comma separated)")
            .with_default("1,2,3,4,5")
            .prompt()?;
        raw.split(',')
            .map(|d| d.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()?
    } else {
        Vec::new()
    };
    let recurrence = build_recurrence(recur, days)?;

    let id = event::create_event(
        events,
        EventDraft {
            title,
            start_date,
            start,
            end,
            color,
            recurrence,
        },
    )?;
    Ok(id)
}
