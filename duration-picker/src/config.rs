use std::time::Duration as StdDuration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::duration::MINUTES_PER_HOUR;

pub const DEFAULT_MAX_DAYS: u32 = 365;
pub const DEFAULT_MAX_HOURS: u32 = 24;
pub const DEFAULT_MINUTE_STEP: u32 = 15;
pub const DEFAULT_HOUR_STEP: u32 = 1;
pub const DEFAULT_DAY_STEP: u32 = 1;
pub const DEFAULT_ACCELERATED_STEP: u32 = 5;
pub const DEFAULT_REPEAT_INTERVAL: StdDuration = StdDuration::from_millis(250);
pub const DEFAULT_ACCELERATION_THRESHOLD: StdDuration = StdDuration::from_millis(500);
pub const DEFAULT_KEY_DEBOUNCE: StdDuration = StdDuration::from_millis(100);

/// Errors returned when a picker configuration cannot be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_days must be at least 1")]
    ZeroMaxDays,
    #[error("max_hours must be at least 1")]
    ZeroMaxHours,
    #[error("minute_step must be between 1 and 59, got {0}")]
    MinuteStepOutOfRange(u32),
    #[error("hour_step and day_step must be at least 1")]
    ZeroStep,
    #[error("accelerated_step must be between 1 and 59, got {0}")]
    AcceleratedStepOutOfRange(u32),
    #[error("repeat_interval must be greater than zero")]
    ZeroRepeatInterval,
    #[error("days label must not be empty")]
    EmptyDaysLabel,
}

/// Bounds, step sizes and press timings for one picker instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub max_days: u32,
    /// Hours per day before the hours field carries into days.
    pub max_hours: u32,
    /// Used when decrementing minutes at zero borrows an hour.
    pub minute_step: u32,
    pub hour_step: u32,
    pub day_step: u32,
    /// Minute step used once a hold has lasted longer than `acceleration_threshold`.
    pub accelerated_step: u32,
    #[serde(with = "millis")]
    pub repeat_interval: StdDuration,
    #[serde(with = "millis")]
    pub acceleration_threshold: StdDuration,
    #[serde(with = "millis")]
    pub key_debounce: StdDuration,
    pub days_label: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            max_days: DEFAULT_MAX_DAYS,
            max_hours: DEFAULT_MAX_HOURS,
            minute_step: DEFAULT_MINUTE_STEP,
            hour_step: DEFAULT_HOUR_STEP,
            day_step: DEFAULT_DAY_STEP,
            accelerated_step: DEFAULT_ACCELERATED_STEP,
            repeat_interval: DEFAULT_REPEAT_INTERVAL,
            acceleration_threshold: DEFAULT_ACCELERATION_THRESHOLD,
            key_debounce: DEFAULT_KEY_DEBOUNCE,
            days_label: "DAY(S)".to_string(),
        }
    }
}

impl PickerConfig {
    pub fn new(days_label: impl Into<String>) -> Self {
        Self {
            days_label: days_label.into(),
            ..Self::default()
        }
    }

    pub fn with_max_days(mut self, max_days: u32) -> Self {
        self.max_days = max_days;
        self
    }

    pub fn with_max_hours(mut self, max_hours: u32) -> Self {
        self.max_hours = max_hours;
        self
    }

    pub fn with_minute_step(mut self, minute_step: u32) -> Self {
        self.minute_step = minute_step;
        self
    }

    pub fn max_minutes(&self) -> u32 {
        MINUTES_PER_HOUR
    }

    /// Largest total the picker can hold: `max_days` days, nothing else.
    pub fn max_total_minutes(&self) -> u32 {
        crate::duration::to_total(self.max_days, 0, 0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_days == 0 {
            return Err(ConfigError::ZeroMaxDays);
        }
        if self.max_hours == 0 {
            return Err(ConfigError::ZeroMaxHours);
        }
        if self.minute_step == 0 || self.minute_step >= MINUTES_PER_HOUR {
            return Err(ConfigError::MinuteStepOutOfRange(self.minute_step));
        }
        if self.hour_step == 0 || self.day_step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.accelerated_step == 0 || self.accelerated_step >= MINUTES_PER_HOUR {
            return Err(ConfigError::AcceleratedStepOutOfRange(self.accelerated_step));
        }
        if self.repeat_interval.is_zero() {
            return Err(ConfigError::ZeroRepeatInterval);
        }
        if self.days_label.trim().is_empty() {
            return Err(ConfigError::EmptyDaysLabel);
        }
        Ok(())
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}
