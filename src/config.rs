use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unrecognized battery display mode '{0}'")]
    BatteryMode(u8),
    #[error("Week start day '{0}' is outside 0..=6")]
    WeekStartDay(u8),
    #[error("Expected 7 day-of-week labels, got {0}")]
    DayOfWeekLabels(usize),
    #[error("Rotation angle {0} is not a multiple of 90 degrees")]
    RotationAngle(i32),
}

/// How the battery icon behaves.
///
/// Wire values: 0 never show, 1 always show, 2 show only when low.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatteryDisplayMode {
    Hidden,
    Always,
    WhenLow,
}

impl TryFrom<u8> for BatteryDisplayMode {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, ConfigError> {
        match value {
            0 => Ok(Self::Hidden),
            1 => Ok(Self::Always),
            2 => Ok(Self::WhenLow),
            other => Err(ConfigError::BatteryMode(other)),
        }
    }
}

/// Per-invocation display settings. All fields are required; the core
/// defines no defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub number_of_weeks: usize,
    pub max_events_per_day: usize,
    pub max_events_sidebar: usize,
    /// 0: never show / 1: always show / 2: show when battery is low.
    pub battery_display_mode: u8,
    /// Seven header labels, indexed Sunday = 0.
    pub day_of_week_text: Vec<String>,
    /// First column of the grid, 0 = Sunday.
    pub week_start_day: u8,
    pub is_24_hour: bool,
    pub battery_level: f32,
    pub today: NaiveDate,
    pub cal_start_date: NaiveDate,
}

impl DisplayConfig {
    /// Checks every field that would otherwise render a wrong header or icon.
    /// The display hangs on a wall, so a bad value is an error, not a guess.
    pub fn validate(&self) -> Result<BatteryDisplayMode, ConfigError> {
        if self.week_start_day > 6 {
            return Err(ConfigError::WeekStartDay(self.week_start_day));
        }
        if self.day_of_week_text.len() != 7 {
            return Err(ConfigError::DayOfWeekLabels(self.day_of_week_text.len()));
        }
        BatteryDisplayMode::try_from(self.battery_display_mode)
    }

    /// Number of day cells in the visible window.
    pub fn grid_len(&self) -> usize {
        self.number_of_weeks * 7
    }
}
