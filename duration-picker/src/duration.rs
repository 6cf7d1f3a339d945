use std::fmt;

use serde::{Deserialize, Serialize};

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 1440;

/// An elapsed time split into the three fields shown by the picker.
///
/// The struct does not enforce the configured maxima on its own; the picker
/// keeps `hours` and `days` inside the configured bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
}

impl Duration {
    pub const ZERO: Duration = Duration {
        days: 0,
        hours: 0,
        minutes: 0,
    };

    pub fn new(days: u32, hours: u32, minutes: u32) -> Self {
        Self {
            days,
            hours,
            minutes,
        }
    }

    /// Decompose a total number of minutes into days, hours and minutes.
    pub fn from_total_minutes(total: u32) -> Self {
        let days = total / MINUTES_PER_DAY;
        let hours = (total - days * MINUTES_PER_DAY) / MINUTES_PER_HOUR;
        let minutes = total - days * MINUTES_PER_DAY - hours * MINUTES_PER_HOUR;
        Self {
            days,
            hours,
            minutes,
        }
    }

    /// Decompose a fractional minute count, as stored by hosts that keep
    /// decimals. The value is rounded to the nearest whole minute first so
    /// the minutes field can never come out as 60.
    pub fn from_fractional_minutes(total: f64) -> Self {
        if !total.is_finite() || total <= 0.0 {
            return Self::ZERO;
        }
        let rounded = total.round();
        if rounded >= u32::MAX as f64 {
            return Self::from_total_minutes(u32::MAX);
        }
        Self::from_total_minutes(rounded as u32)
    }

    pub fn total_minutes(&self) -> u32 {
        to_total(self.days, self.hours, self.minutes)
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0
    }

    pub fn as_time_duration(&self) -> time::Duration {
        time::Duration::minutes(self.total_minutes() as i64)
    }

    pub fn as_std_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.total_minutes() as u64 * 60)
    }
}

/// Sum the three fields back into minutes. Saturates instead of wrapping.
pub fn to_total(days: u32, hours: u32, minutes: u32) -> u32 {
    days.saturating_mul(MINUTES_PER_DAY)
        .saturating_add(hours.saturating_mul(MINUTES_PER_HOUR))
        .saturating_add(minutes)
}

impl From<u32> for Duration {
    fn from(total: u32) -> Self {
        Self::from_total_minutes(total)
    }
}

impl From<Duration> for time::Duration {
    fn from(value: Duration) -> Self {
        value.as_time_duration()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {:02}h {:02}m", self.days, self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_total_minutes() {
        assert_eq!(Duration::from_total_minutes(0), Duration::ZERO);
        assert_eq!(Duration::from_total_minutes(59), Duration::new(0, 0, 59));
        assert_eq!(Duration::from_total_minutes(60), Duration::new(0, 1, 0));
        assert_eq!(Duration::from_total_minutes(1439), Duration::new(0, 23, 59));
        assert_eq!(Duration::from_total_minutes(1440), Duration::new(1, 0, 0));
        assert_eq!(Duration::from_total_minutes(1565), Duration::new(1, 2, 5));
    }

    #[test]
    fn integer_totals_survive_a_round_trip() {
        let max_total = 365 * MINUTES_PER_DAY + 23 * MINUTES_PER_HOUR + 59;
        for total in (0..=max_total).step_by(7) {
            assert_eq!(Duration::from_total_minutes(total).total_minutes(), total);
        }
        assert_eq!(Duration::from_total_minutes(max_total).total_minutes(), max_total);
    }

    #[test]
    fn fractional_minutes_round_before_decomposing() {
        assert_eq!(Duration::from_fractional_minutes(59.6), Duration::new(0, 1, 0));
        assert_eq!(Duration::from_fractional_minutes(90.4), Duration::new(0, 1, 30));
        assert_eq!(Duration::from_fractional_minutes(1439.5), Duration::new(1, 0, 0));
    }

    #[test]
    fn fractional_minutes_reject_garbage() {
        assert_eq!(Duration::from_fractional_minutes(-3.0), Duration::ZERO);
        assert_eq!(Duration::from_fractional_minutes(f64::NAN), Duration::ZERO);
        assert_eq!(
            Duration::from_fractional_minutes(f64::INFINITY),
            Duration::ZERO
        );
    }

    #[test]
    fn to_total_saturates() {
        assert_eq!(to_total(u32::MAX, 0, 0), u32::MAX);
        assert_eq!(to_total(2, 3, 4), 2 * 1440 + 3 * 60 + 4);
    }

    #[test]
    fn converts_to_other_duration_types() {
        let d = Duration::new(1, 2, 3);
        assert_eq!(d.as_time_duration(), time::Duration::minutes(1563));
        assert_eq!(d.as_std_duration(), std::time::Duration::from_secs(1563 * 60));
    }

    #[test]
    fn display_pads_hours_and_minutes() {
        assert_eq!(Duration::new(3, 4, 5).to_string(), "3d 04h 05m");
    }

    #[test]
    fn serializes_as_field_object() {
        let json = serde_json::to_string(&Duration::new(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"days":1,"hours":2,"minutes":3}"#);
    }
}
