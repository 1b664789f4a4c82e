use thiserror::Error;

pub const MINUTES_PER_DAY: u32 = 1440;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    #[error("invalid time string: {0}")]
    InvalidFormat(String),
}

/// Parses a 24-hour "HH:MM" string into minutes since midnight.
pub fn to_minutes(time: &str) -> Result<u32, TimeError> {
    let invalid = || TimeError::InvalidFormat(time.to_string());
    let Some((hours, minutes)) = time.split_once(':') else {
        return Err(invalid());
    };
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if hours >= 24 || minutes >= 60 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as zero-padded "HH:MM", wrapping past midnight.
pub fn to_time_str(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Rounds to the nearest quarter hour. Used when deriving a start time
/// from a grid position.
pub fn snap_to_quarter(minutes: u32) -> u32 {
    let snapped = ((minutes + 7) / 15) * 15;
    snapped % MINUTES_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_hh_mm() {
        assert_eq!(to_minutes("09:05"), Ok(545));
        assert_eq!(to_minutes("00:00"), Ok(0));
        assert_eq!(to_minutes("23:59"), Ok(1439));
        assert_eq!(to_time_str(545), "09:05");
        assert_eq!(to_time_str(0), "00:00");
    }

    #[test]
    fn formatting_wraps_past_midnight() {
        assert_eq!(to_time_str(1505), "01:05");
        assert_eq!(to_time_str(1440), "00:00");
    }

    #[test]
    fn rejects_malformed_times() {
        for bad in ["905", "9:5:0x", "ab:cd", "24:00", "12:60", "", ":30"] {
            assert_eq!(
                to_minutes(bad),
                Err(TimeError::InvalidFormat(bad.to_string())),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn snaps_to_quarter_hours() {
        assert_eq!(snap_to_quarter(0), 0);
        assert_eq!(snap_to_quarter(7), 0);
        assert_eq!(snap_to_quarter(8), 15);
        assert_eq!(snap_to_quarter(503), 510);
        assert_eq!(snap_to_quarter(1436), 0);
    }
}
