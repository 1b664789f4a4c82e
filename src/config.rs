use std::collections::HashMap;
use std::fs;

#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(format!("Invalid config line {}: {}", idx + 1, line));
            };
            let key = key.trim();
            let mut value = value.trim().to_string();
            if (value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\''))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.to_string(), value);
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Geometry constants for the day view. The visible window is
/// `[start_hour * 60, end_hour * 60)` minutes.
#[derive(Debug, Clone, Copy)]
pub struct ViewConfig {
    pub start_hour: u32,
    pub end_hour: u32,
    pub pixels_per_minute: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            start_hour: 6,
            end_hour: 16,
            pixels_per_minute: 2,
        }
    }
}

impl ViewConfig {
    /// Reads START_HOUR / END_HOUR / PIXELS_PER_MINUTE overrides through the
    /// given property lookup, keeping defaults for anything absent or
    /// unparseable. An inverted window (END_HOUR at or before START_HOUR)
    /// falls back to the default hours so the view always has rows to draw.
    pub fn from_props(get_prop: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ViewConfig::default();
        let read = |key: &str, fallback: u32| {
            get_prop(key)
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(fallback)
        };
        let mut start_hour = read("START_HOUR", defaults.start_hour);
        let mut end_hour = read("END_HOUR", defaults.end_hour);
        if end_hour <= start_hour {
            start_hour = defaults.start_hour;
            end_hour = defaults.end_hour;
        }
        ViewConfig {
            start_hour,
            end_hour,
            pixels_per_minute: read("PIXELS_PER_MINUTE", defaults.pixels_per_minute),
        }
    }

    pub fn window_start(&self) -> u32 {
        self.start_hour * 60
    }

    pub fn window_end(&self) -> u32 {
        self.end_hour * 60
    }

    /// Vertical pixel position of a moment. May be negative or past the
    /// window height; clipping is the renderer's concern.
    pub fn top_of(&self, minutes: u32) -> f32 {
        (minutes as i64 - self.window_start() as i64) as f32 * self.pixels_per_minute as f32
    }
}
