use std::time::Instant;

use crate::config::{ConfigError, PickerConfig};
use crate::duration::{Duration, MINUTES_PER_HOUR};
use crate::emitter::ChangeListener;
use crate::field::{Direction, Field, Spinner};
use crate::format::{format_field, parse_leading_number};
use crate::press::{PressController, PressEvent, PressState, PressStep};

/// The duration picker widget state.
///
/// Holds the three fields, applies carry and borrow rules, drives the
/// press-and-hold controller and reports every field write to the
/// [`ChangeListener`]. Writes are not batched: a carry from minutes into
/// hours reports twice, and the first report carries an intermediate total.
pub struct DurationPicker {
    config: PickerConfig,
    value: Duration,
    last_input: u32,
    press: PressController,
    listener: Box<dyn ChangeListener>,
}

impl std::fmt::Debug for DurationPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DurationPicker")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("last_input", &self.last_input)
            .field("press", &self.press)
            .finish_non_exhaustive()
    }
}

impl DurationPicker {
    pub fn new(
        config: PickerConfig,
        total_minutes: u32,
        listener: impl ChangeListener + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let value = clamp_total(&config, total_minutes);
        let press = PressController::new(&config);
        Ok(Self {
            config,
            value,
            last_input: total_minutes,
            press,
            listener: Box::new(listener),
        })
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn duration(&self) -> Duration {
        self.value
    }

    pub fn total_minutes(&self) -> u32 {
        self.value.total_minutes()
    }

    pub fn press_state(&self) -> &PressState {
        self.press.state()
    }

    /// When the host should call [`tick`](Self::tick) next, if a hold is active.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.press.next_deadline()
    }

    /// Apply a new value pushed by the host. Ignored when it equals the last
    /// value exchanged with the host, so a host echoing the picker's own
    /// report back is a no-op. Totals beyond `max_days` days are clamped.
    pub fn set_total_minutes(&mut self, total_minutes: u32) {
        if total_minutes == self.last_input {
            return;
        }
        self.last_input = total_minutes;

        let value = clamp_total(&self.config, total_minutes);
        tracing::debug!(total_minutes, %value, "host pushed new duration");
        self.set_days(value.days);
        self.set_hours(value.hours);
        self.set_minutes(value.minutes);
    }

    /// Display string for one field.
    pub fn display_text(&self, field: Field) -> String {
        format_field(field, &self.value)
    }

    /// Feed an input event through the press controller and apply the step
    /// it produces. Returns true when the event produced a step.
    pub fn handle(&mut self, event: PressEvent, now: Instant) -> bool {
        match self.press.handle(event, now) {
            Some(step) => {
                self.apply(step);
                true
            }
            None => false,
        }
    }

    pub fn press(&mut self, spinner: Spinner, now: Instant) -> bool {
        self.handle(PressEvent::PointerDown(spinner), now)
    }

    pub fn release(&mut self, now: Instant) {
        self.handle(PressEvent::PointerUp, now);
    }

    pub fn pointer_leave(&mut self, now: Instant) {
        self.handle(PressEvent::PointerLeave, now);
    }

    pub fn key_down(&mut self, spinner: Spinner, now: Instant) -> bool {
        self.handle(PressEvent::KeyDown(spinner), now)
    }

    pub fn key_up(&mut self, now: Instant) {
        self.handle(PressEvent::KeyUp, now);
    }

    /// End a keyboard hold after `timeout` without key events.
    pub fn expire_idle_keyboard(&mut self, now: Instant, timeout: std::time::Duration) {
        self.press.expire_idle_keyboard(now, timeout);
    }

    /// Drive the pointer repeat timer. Returns true when a repeat fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.press.tick(now) {
            Some(step) => {
                self.apply(step);
                true
            }
            None => false,
        }
    }

    /// Release any hold. Called automatically on drop.
    pub fn teardown(&mut self) {
        self.press.handle(PressEvent::Teardown, Instant::now());
    }

    /// Single step without a hold, as a plain click would produce.
    pub fn increment(&mut self, field: Field) {
        self.step_up(field, false);
    }

    pub fn decrement(&mut self, field: Field) {
        self.step_down(field, false);
    }

    fn apply(&mut self, step: PressStep) {
        match step.spinner.direction {
            Direction::Increment => self.step_up(step.spinner.field, step.accelerate),
            Direction::Decrement => self.step_down(step.spinner.field, step.accelerate),
        }
    }

    fn minute_step(&self, accelerate: bool) -> u32 {
        let fast = self.config.accelerated_step;
        if accelerate && self.value.minutes % fast == 0 {
            fast
        } else {
            1
        }
    }

    fn step_up(&mut self, field: Field, accelerate: bool) {
        let max_days = self.config.max_days;
        let max_hours = self.config.max_hours;
        let Duration {
            days,
            hours,
            minutes,
        } = self.value;

        match field {
            Field::Minutes => {
                if hours >= max_hours || days >= max_days {
                    return;
                }
                let step = self.minute_step(accelerate);
                if minutes + step < MINUTES_PER_HOUR {
                    self.set_minutes(minutes + step);
                } else {
                    self.set_minutes(0);
                    if hours + 1 < max_hours {
                        self.set_hours(hours + 1);
                    } else {
                        self.set_hours(0);
                        self.step_days_up(1);
                    }
                }
            }
            Field::Hours => {
                if days >= max_days {
                    return;
                }
                let step = self.config.hour_step;
                if hours + step < max_hours {
                    self.set_hours(hours + step);
                } else {
                    self.step_days_up(self.config.day_step);
                }
            }
            Field::Days => {
                if days < max_days {
                    self.step_days_up(self.config.day_step);
                }
            }
        }
    }

    /// Add days, clamped to the ceiling. Reaching the ceiling zeroes hours
    /// and minutes so the value reads as exactly `max_days` days.
    fn step_days_up(&mut self, step: u32) {
        let max_days = self.config.max_days;
        let days = self.value.days.saturating_add(step).min(max_days);
        self.set_days(days);
        if days == max_days {
            self.set_hours(0);
            self.set_minutes(0);
        }
    }

    fn step_down(&mut self, field: Field, accelerate: bool) {
        let Duration {
            days,
            hours,
            minutes,
        } = self.value;
        let hour_step = self.config.hour_step;
        let day_step = self.config.day_step;

        match field {
            Field::Minutes => {
                let step = self.minute_step(accelerate);
                if minutes > 0 {
                    self.set_minutes(minutes.saturating_sub(step));
                } else if hours > 0 {
                    self.set_minutes(MINUTES_PER_HOUR - self.config.minute_step);
                    self.set_hours(hours.saturating_sub(hour_step));
                } else if days > 0 {
                    self.set_minutes(MINUTES_PER_HOUR - step);
                    self.set_hours(self.config.max_hours - 1);
                    self.set_days(days.saturating_sub(day_step));
                }
            }
            Field::Hours => {
                if hours > 0 {
                    self.set_hours(hours.saturating_sub(hour_step));
                } else if days > 0 {
                    self.set_hours(self.config.max_hours - 1);
                    self.set_days(days.saturating_sub(day_step));
                }
            }
            Field::Days => {
                if days > 0 {
                    self.set_days(days.saturating_sub(day_step));
                }
            }
        }
    }

    /// Apply text typed into a field. Never fails: text that does not start
    /// with a digit reads as zero and values beyond the field's maximum are
    /// clamped. A field typed at its maximum zeroes the fields below it.
    pub fn type_text(&mut self, field: Field, text: &str) {
        let parsed = parse_leading_number(text);
        let max_days = self.config.max_days;
        let max_hours = self.config.max_hours;

        match field {
            Field::Days => {
                let days = parsed.min(max_days);
                self.set_days(days);
                if days == max_days {
                    self.set_hours(0);
                    self.set_minutes(0);
                }
            }
            Field::Hours => {
                let mut hours = parsed;
                if hours >= max_hours {
                    hours = max_hours;
                    self.set_minutes(0);
                }
                if self.value.days >= max_days {
                    hours = 0;
                }
                self.set_hours(hours);
            }
            Field::Minutes => {
                let mut minutes = parsed.min(MINUTES_PER_HOUR - 1);
                if self.value.hours >= max_hours || self.value.days >= max_days {
                    minutes = 0;
                }
                self.set_minutes(minutes);
            }
        }
    }

    fn set_days(&mut self, days: u32) {
        self.value.days = days;
        self.emit();
    }

    fn set_hours(&mut self, hours: u32) {
        self.value.hours = hours;
        self.emit();
    }

    fn set_minutes(&mut self, minutes: u32) {
        self.value.minutes = minutes;
        self.emit();
    }

    fn emit(&mut self) {
        let total = self.value.total_minutes();
        tracing::trace!(total, value = %self.value, "duration changed");
        self.last_input = total;
        self.listener.duration_changed(total);
    }
}

impl Drop for DurationPicker {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn clamp_total(config: &PickerConfig, total_minutes: u32) -> Duration {
    if total_minutes >= config.max_total_minutes() {
        Duration::new(config.max_days, 0, 0)
    } else {
        Duration::from_total_minutes(total_minutes)
    }
}
