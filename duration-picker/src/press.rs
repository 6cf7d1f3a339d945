//! Press-and-hold handling for the spinner buttons.
//!
//! Pointer holds and keyboard holds repeat differently. A pointer hold owns
//! a repeat deadline that the host drives through [`PressController::tick`].
//! A keyboard hold relies on the terminal's native key repeat and is
//! throttled by [`KeyDebounce`]. Both share one [`RepeatSession`] so the
//! minute step can accelerate once a hold has lasted long enough.

use std::time::{Duration, Instant};

use crate::config::PickerConfig;
use crate::field::Spinner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressSource {
    Pointer,
    Keyboard,
}

/// Input events that drive the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressEvent {
    PointerDown(Spinner),
    PointerUp,
    PointerLeave,
    KeyDown(Spinner),
    KeyUp,
    Teardown,
}

/// A step the picker has to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressStep {
    pub spinner: Spinner,
    /// The hold has outlasted the acceleration threshold.
    pub accelerate: bool,
}

/// An in-progress hold. Dropping it cancels any pending repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatSession {
    spinner: Spinner,
    source: PressSource,
    started_at: Instant,
    last_input_at: Instant,
    next_repeat: Option<Instant>,
}

impl RepeatSession {
    fn pointer(spinner: Spinner, now: Instant, interval: Duration) -> Self {
        Self {
            spinner,
            source: PressSource::Pointer,
            started_at: now,
            last_input_at: now,
            next_repeat: Some(now + interval),
        }
    }

    fn keyboard(spinner: Spinner, now: Instant) -> Self {
        Self {
            spinner,
            source: PressSource::Keyboard,
            started_at: now,
            last_input_at: now,
            next_repeat: None,
        }
    }

    pub fn spinner(&self) -> Spinner {
        self.spinner
    }

    pub fn source(&self) -> PressSource {
        self.source
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn next_repeat(&self) -> Option<Instant> {
        self.next_repeat
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PressState {
    #[default]
    Idle,
    Holding(RepeatSession),
}

/// Swallows keyboard steps that arrive within `window` of the last one.
#[derive(Debug, Clone)]
pub struct KeyDebounce {
    window: Duration,
    blocked_until: Option<Instant>,
}

impl KeyDebounce {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            blocked_until: None,
        }
    }

    /// Returns true when a step may fire now, and starts a new window if so.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        if let Some(until) = self.blocked_until {
            if now < until {
                return false;
            }
        }
        self.blocked_until = Some(now + self.window);
        true
    }

    pub fn is_blocked(&self, now: Instant) -> bool {
        self.blocked_until.is_some_and(|until| now < until)
    }
}

#[derive(Debug, Clone)]
pub struct PressController {
    state: PressState,
    debounce: KeyDebounce,
    repeat_interval: Duration,
    acceleration_threshold: Duration,
}

impl PressController {
    pub fn new(config: &PickerConfig) -> Self {
        Self {
            state: PressState::Idle,
            debounce: KeyDebounce::new(config.key_debounce),
            repeat_interval: config.repeat_interval,
            acceleration_threshold: config.acceleration_threshold,
        }
    }

    pub fn state(&self) -> &PressState {
        &self.state
    }

    pub fn is_holding(&self) -> bool {
        matches!(self.state, PressState::Holding(_))
    }

    pub fn session(&self) -> Option<&RepeatSession> {
        match &self.state {
            PressState::Holding(session) => Some(session),
            PressState::Idle => None,
        }
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.session().and_then(RepeatSession::next_repeat)
    }

    /// Apply an input event and return the step it triggers immediately, if any.
    pub fn handle(&mut self, event: PressEvent, now: Instant) -> Option<PressStep> {
        match event {
            PressEvent::PointerDown(spinner) => {
                self.release("superseded");
                tracing::debug!(spinner = %spinner.label(), "pointer hold started");
                self.state = PressState::Holding(RepeatSession::pointer(
                    spinner,
                    now,
                    self.repeat_interval,
                ));
                Some(PressStep {
                    spinner,
                    accelerate: false,
                })
            }
            PressEvent::PointerUp | PressEvent::PointerLeave => {
                if self.holding_from(PressSource::Pointer) {
                    self.release(if event == PressEvent::PointerUp {
                        "pointer up"
                    } else {
                        "pointer left control"
                    });
                }
                None
            }
            PressEvent::KeyDown(spinner) => self.key_down(spinner, now),
            PressEvent::KeyUp => {
                if self.holding_from(PressSource::Keyboard) {
                    self.release("key up");
                }
                None
            }
            PressEvent::Teardown => {
                self.release("teardown");
                None
            }
        }
    }

    fn key_down(&mut self, spinner: Spinner, now: Instant) -> Option<PressStep> {
        if !self.debounce.try_fire(now) {
            tracing::trace!(spinner = %spinner.label(), "key repeat debounced");
            return None;
        }

        let continuing = match &mut self.state {
            PressState::Holding(session)
                if session.source == PressSource::Keyboard && session.spinner == spinner =>
            {
                session.last_input_at = now;
                true
            }
            _ => false,
        };

        if !continuing {
            self.release("superseded");
            tracing::debug!(spinner = %spinner.label(), "keyboard hold started");
            self.state = PressState::Holding(RepeatSession::keyboard(spinner, now));
        }

        Some(PressStep {
            spinner,
            accelerate: self.accelerating(now),
        })
    }

    /// Fire the pointer repeat if it is due.
    ///
    /// At most one step fires per call. Repeats missed while the host was
    /// busy are dropped rather than replayed in a burst.
    pub fn tick(&mut self, now: Instant) -> Option<PressStep> {
        let accelerate = self.accelerating(now);
        let interval = self.repeat_interval;

        let PressState::Holding(session) = &mut self.state else {
            return None;
        };
        let due = session.next_repeat?;
        if now < due {
            return None;
        }

        let mut next = due + interval;
        if next <= now {
            next = now + interval;
        }
        session.next_repeat = Some(next);

        Some(PressStep {
            spinner: session.spinner,
            accelerate,
        })
    }

    /// End a keyboard hold when no key event arrived for `timeout`.
    ///
    /// For terminals that never report key releases.
    pub fn expire_idle_keyboard(&mut self, now: Instant, timeout: Duration) {
        let expired = matches!(
            &self.state,
            PressState::Holding(session)
                if session.source == PressSource::Keyboard
                    && now.saturating_duration_since(session.last_input_at) >= timeout
        );
        if expired {
            self.release("keyboard idle");
        }
    }

    /// Whether the current hold has lasted past the acceleration threshold.
    pub fn accelerating(&self, now: Instant) -> bool {
        self.session().is_some_and(|session| {
            now.saturating_duration_since(session.started_at) > self.acceleration_threshold
        })
    }

    fn holding_from(&self, source: PressSource) -> bool {
        self.session().is_some_and(|session| session.source == source)
    }

    fn release(&mut self, reason: &'static str) {
        if let PressState::Holding(session) = std::mem::take(&mut self.state) {
            tracing::debug!(
                spinner = %session.spinner.label(),
                reason,
                "hold released"
            );
        }
    }
}
