use crate::config::TuiConfig;
use crate::ui::layout::PickerLayout;
use anyhow::Result;
use duration_picker::{
    ChangeListener, ConfigError, Duration, DurationPicker, Field, PressState, PressSource, Spinner,
};
use serde::Serialize;
use std::time::Instant;

mod navigation;
mod state;
pub use state::{Control, HostForm};

pub struct App {
    pub running: bool,
    pub picker: DurationPicker,
    pub host: HostForm,
    pub focused: Control,
    /// Spinner currently held with the mouse
    pub pointer_target: Option<Spinner>,
    pub status_message: Option<String>,

    // Last-rendered control positions (updated by renderer each frame)
    pub layout: PickerLayout,

    pub initial_minutes: u32,
    pub hours_label: String,
    pub minutes_label: String,
    /// Emulated key release for terminals without release events
    pub key_release_timeout: Option<std::time::Duration>,
}

/// What the host form ends up storing, printed on exit.
#[derive(Debug, Clone, Serialize)]
pub struct PickerResult {
    pub total_minutes: u32,
    pub duration: Duration,
}

impl App {
    pub fn new(cfg: &TuiConfig, listener: impl ChangeListener + 'static) -> Result<Self, ConfigError> {
        let picker = DurationPicker::new(cfg.picker.clone(), cfg.initial_minutes, listener)?;
        let host = HostForm::new(picker.total_minutes());
        Ok(Self {
            running: true,
            picker,
            host,
            focused: Control::ORDER[0],
            pointer_target: None,
            status_message: None,
            layout: PickerLayout::default(),
            initial_minutes: cfg.initial_minutes,
            hours_label: cfg.hours_label.clone(),
            minutes_label: cfg.minutes_label.clone(),
            key_release_timeout: cfg.key_release_timeout(),
        })
    }

    pub fn quit(&mut self) {
        self.picker.teardown();
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn label_for(&self, field: Field) -> &str {
        match field {
            Field::Days => &self.picker.config().days_label,
            Field::Hours => &self.hours_label,
            Field::Minutes => &self.minutes_label,
        }
    }

    /// A total reported by the picker reached the host form.
    pub fn receive_change(&mut self, total_minutes: u32) {
        tracing::debug!(total_minutes, "host form updated");
        self.host.receive(total_minutes);
    }

    /// Host pushes its initial value back into the picker.
    pub fn reset_to_initial(&mut self) {
        self.picker.set_total_minutes(self.initial_minutes);
        self.set_status(format!("Reset to {} minutes", self.initial_minutes));
    }

    /// Run the repeat timer and the key release emulation.
    pub fn tick(&mut self, now: Instant) {
        self.picker.tick(now);
        if let Some(timeout) = self.key_release_timeout {
            self.picker.expire_idle_keyboard(now, timeout);
        }
    }

    /// How long the event loop may wait for input before the next tick is due.
    pub fn poll_timeout(&self, now: Instant, idle: std::time::Duration) -> std::time::Duration {
        let mut timeout = idle;
        if let Some(deadline) = self.picker.next_deadline() {
            timeout = timeout.min(deadline.saturating_duration_since(now));
        }
        if let (Some(release), PressState::Holding(session)) =
            (self.key_release_timeout, self.picker.press_state())
        {
            if session.source() == PressSource::Keyboard {
                timeout = timeout.min(release);
            }
        }
        timeout
    }

    /// The spinner being held right now, for highlighting.
    pub fn held_spinner(&self) -> Option<Spinner> {
        match self.picker.press_state() {
            PressState::Holding(session) => Some(session.spinner()),
            PressState::Idle => None,
        }
    }

    // Pointer input

    pub fn pointer_down(&mut self, column: u16, row: u16, now: Instant) {
        match self.layout.hit(column, row) {
            Some(Control::Spinner(spinner)) => {
                self.focused = Control::Spinner(spinner);
                self.pointer_target = Some(spinner);
                self.picker.press(spinner, now);
            }
            Some(control @ Control::Field(_)) => self.focused = control,
            None => {}
        }
    }

    pub fn pointer_up(&mut self, now: Instant) {
        if self.pointer_target.take().is_some() {
            self.picker.release(now);
        }
    }

    /// Pointer moved while a button may be held; leaving the button ends the hold.
    pub fn pointer_moved(&mut self, column: u16, row: u16, now: Instant) {
        if let Some(spinner) = self.pointer_target {
            if self.layout.hit(column, row) != Some(Control::Spinner(spinner)) {
                self.pointer_target = None;
                self.picker.pointer_leave(now);
            }
        }
    }

    /// Wheel over a column steps that column once.
    pub fn scroll(&mut self, column: u16, row: u16, up: bool) {
        if let Some(control) = self.layout.hit(column, row) {
            let field = control.field();
            if up {
                self.picker.increment(field);
            } else {
                self.picker.decrement(field);
            }
        }
    }

    /// The terminal lost focus; nothing will report the release.
    pub fn release_all(&mut self, now: Instant) {
        self.pointer_up(now);
        self.picker.key_up(now);
    }

    // Keyboard input

    /// Space or Enter on the focused control.
    pub fn activate_focused(&mut self, now: Instant) {
        if let Control::Spinner(spinner) = self.focused {
            self.picker.key_down(spinner, now);
        }
    }

    /// `+`/`-` step the focused column without moving focus.
    pub fn step_focused(&mut self, increment: bool, now: Instant) {
        let field = self.focused.field();
        let spinner = if increment {
            Spinner::increment(field)
        } else {
            Spinner::decrement(field)
        };
        self.picker.key_down(spinner, now);
    }

    pub fn key_released(&mut self, now: Instant) {
        self.picker.key_up(now);
    }

    /// Append a digit to the focused column's text, as typing into the
    /// field would.
    pub fn type_digit(&mut self, digit: char) {
        let field = self.focused.field();
        self.focused = Control::Field(field);
        let mut text = self.picker.display_text(field);
        text.push(digit);
        self.picker.type_text(field, &text);
    }

    pub fn field_backspace(&mut self) {
        let field = self.focused.field();
        self.focused = Control::Field(field);
        let mut text = self.picker.display_text(field);
        text.pop();
        self.picker.type_text(field, &text);
    }

    pub fn clear_field(&mut self) {
        let field = self.focused.field();
        self.focused = Control::Field(field);
        self.picker.type_text(field, "");
    }

    pub fn result(&self) -> PickerResult {
        PickerResult {
            total_minutes: self.host.total_minutes,
            duration: self.host.duration(),
        }
    }

    /// Line printed after the terminal is restored.
    pub fn result_line(&self, json: bool) -> Result<String> {
        let result = self.result();
        if json {
            Ok(serde_json::to_string(&result)?)
        } else {
            Ok(format!(
                "{} minutes ({})",
                result.total_minutes, result.duration
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::PickerLayout;
    use duration_picker::Discard;
    use ratatui::layout::Rect;
    use std::time::Duration as StdDuration;

    pub(crate) fn test_app(initial_minutes: u32) -> App {
        let cfg = TuiConfig {
            initial_minutes,
            ..TuiConfig::default()
        };
        let mut app = App::new(&cfg, Discard).expect("default config is valid");
        app.layout = PickerLayout::compute(Rect::new(0, 0, 60, 10));
        app
    }

    fn ms(n: u64) -> StdDuration {
        StdDuration::from_millis(n)
    }

    fn center_of(app: &App, control: Control) -> (u16, u16) {
        let rect = app.layout.rect_of(control).expect("control is laid out");
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn typing_digits_builds_the_field_value() {
        let mut app = test_app(0);
        app.focused = Control::Field(Field::Hours);
        app.type_digit('1');
        app.type_digit('2');
        assert_eq!(app.picker.duration(), Duration::new(0, 12, 0));

        app.field_backspace();
        assert_eq!(app.picker.duration(), Duration::new(0, 1, 0));

        app.clear_field();
        assert_eq!(app.picker.duration(), Duration::ZERO);
    }

    #[test]
    fn typing_on_a_spinner_moves_focus_to_its_field() {
        let mut app = test_app(0);
        app.focused = Control::Spinner(Spinner::increment(Field::Minutes));
        app.type_digit('7');
        assert_eq!(app.focused, Control::Field(Field::Minutes));
        assert_eq!(app.picker.duration().minutes, 7);
    }

    #[test]
    fn mouse_hold_repeats_until_release() {
        let mut app = test_app(0);
        let t0 = Instant::now();
        let up = Control::Spinner(Spinner::increment(Field::Hours));
        let (x, y) = center_of(&app, up);

        app.pointer_down(x, y, t0);
        assert_eq!(app.focused, up);
        assert_eq!(app.picker.duration().hours, 1);

        app.tick(t0 + ms(250));
        assert_eq!(app.picker.duration().hours, 2);

        app.pointer_up(t0 + ms(300));
        app.tick(t0 + ms(500));
        assert_eq!(app.picker.duration().hours, 2);
        assert_eq!(app.pointer_target, None);
    }

    #[test]
    fn dragging_off_the_button_ends_the_hold() {
        let mut app = test_app(0);
        let t0 = Instant::now();
        let up = Control::Spinner(Spinner::increment(Field::Days));
        let (x, y) = center_of(&app, up);

        app.pointer_down(x, y, t0);
        app.pointer_moved(x, y, t0 + ms(50));
        assert!(app.held_spinner().is_some());

        let (fx, fy) = center_of(&app, Control::Field(Field::Days));
        app.pointer_moved(fx, fy, t0 + ms(100));
        assert!(app.held_spinner().is_none());
        app.tick(t0 + ms(250));
        assert_eq!(app.picker.duration().days, 1);
    }

    #[test]
    fn clicking_a_field_focuses_it() {
        let mut app = test_app(0);
        let (x, y) = center_of(&app, Control::Field(Field::Minutes));
        app.pointer_down(x, y, Instant::now());
        assert_eq!(app.focused, Control::Field(Field::Minutes));
        assert!(app.held_spinner().is_none());
    }

    #[test]
    fn keyboard_activation_on_spinner() {
        let mut app = test_app(0);
        let t0 = Instant::now();
        app.focused = Control::Spinner(Spinner::increment(Field::Minutes));
        app.activate_focused(t0);
        app.activate_focused(t0 + ms(20));
        assert_eq!(app.picker.duration().minutes, 1);

        app.key_released(t0 + ms(30));
        assert!(app.held_spinner().is_none());
    }

    #[test]
    fn key_release_is_emulated_after_silence() {
        let mut app = test_app(0);
        let t0 = Instant::now();
        app.focused = Control::Spinner(Spinner::increment(Field::Minutes));
        app.activate_focused(t0);

        app.tick(t0 + ms(300));
        assert!(app.held_spinner().is_some());
        app.tick(t0 + ms(600));
        assert!(app.held_spinner().is_none());
    }

    #[test]
    fn poll_timeout_tracks_repeat_deadline() {
        let mut app = test_app(0);
        let t0 = Instant::now();
        assert_eq!(app.poll_timeout(t0, ms(100)), ms(100));

        app.picker.press(Spinner::increment(Field::Minutes), t0);
        assert_eq!(app.poll_timeout(t0 + ms(200), ms(100)), ms(50));
        assert_eq!(app.poll_timeout(t0 + ms(300), ms(100)), StdDuration::ZERO);
    }

    #[test]
    fn reset_pushes_initial_value() {
        let mut app = test_app(90);
        app.picker.increment(Field::Days);
        app.reset_to_initial();
        assert_eq!(app.picker.duration(), Duration::new(0, 1, 30));
    }

    #[test]
    fn result_line_formats() {
        let mut app = test_app(0);
        app.receive_change(1565);
        assert_eq!(app.result_line(false).unwrap(), "1565 minutes (1d 02h 05m)");
        assert_eq!(
            app.result_line(true).unwrap(),
            r#"{"total_minutes":1565,"duration":{"days":1,"hours":2,"minutes":5}}"#
        );
    }
}
