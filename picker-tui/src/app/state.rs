use duration_picker::{Direction, Duration, Field, Spinner};
use std::collections::VecDeque;

const RECENT_UPDATES: usize = 6;

/// A focusable element of the picker: a spinner button or a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Spinner(Spinner),
    Field(Field),
}

impl Control {
    /// Tab order: column by column, top to bottom.
    pub const ORDER: [Control; 9] = [
        Control::Spinner(Spinner {
            field: Field::Days,
            direction: Direction::Increment,
        }),
        Control::Field(Field::Days),
        Control::Spinner(Spinner {
            field: Field::Days,
            direction: Direction::Decrement,
        }),
        Control::Spinner(Spinner {
            field: Field::Hours,
            direction: Direction::Increment,
        }),
        Control::Field(Field::Hours),
        Control::Spinner(Spinner {
            field: Field::Hours,
            direction: Direction::Decrement,
        }),
        Control::Spinner(Spinner {
            field: Field::Minutes,
            direction: Direction::Increment,
        }),
        Control::Field(Field::Minutes),
        Control::Spinner(Spinner {
            field: Field::Minutes,
            direction: Direction::Decrement,
        }),
    ];

    pub fn field(&self) -> Field {
        match self {
            Control::Spinner(spinner) => spinner.field,
            Control::Field(field) => *field,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Control::Spinner(spinner) => spinner.label(),
            Control::Field(field) => format!("{} field", field),
        }
    }
}

/// Stand-in for the form that owns the picker: it only stores the latest
/// total the picker reported.
#[derive(Debug, Clone, Default)]
pub struct HostForm {
    pub total_minutes: u32,
    pub updates: u64,
    pub recent: VecDeque<u32>,
}

impl HostForm {
    pub fn new(total_minutes: u32) -> Self {
        Self {
            total_minutes,
            ..Self::default()
        }
    }

    pub fn receive(&mut self, total_minutes: u32) {
        self.total_minutes = total_minutes;
        self.updates += 1;
        if self.recent.len() == RECENT_UPDATES {
            self.recent.pop_front();
        }
        self.recent.push_back(total_minutes);
    }

    pub fn duration(&self) -> Duration {
        Duration::from_total_minutes(self.total_minutes)
    }
}
