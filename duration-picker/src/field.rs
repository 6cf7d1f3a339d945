use std::fmt;

/// One of the three numeric fields of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Days,
    Hours,
    Minutes,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Days, Field::Hours, Field::Minutes];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Days => "Days",
            Field::Hours => "Hours",
            Field::Minutes => "Minutes",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Increment,
    Decrement,
}

impl Direction {
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Increment => "Increment",
            Direction::Decrement => "Decrement",
        }
    }
}

/// A spinner button: which field it changes and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spinner {
    pub field: Field,
    pub direction: Direction,
}

impl Spinner {
    pub fn new(field: Field, direction: Direction) -> Self {
        Self { field, direction }
    }

    pub fn increment(field: Field) -> Self {
        Self::new(field, Direction::Increment)
    }

    pub fn decrement(field: Field) -> Self {
        Self::new(field, Direction::Decrement)
    }

    /// Accessible label, e.g. "Increment Days".
    pub fn label(&self) -> String {
        format!("{} {}", self.direction.name(), self.field.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_labels() {
        assert_eq!(Spinner::increment(Field::Days).label(), "Increment Days");
        assert_eq!(Spinner::decrement(Field::Minutes).label(), "Decrement Minutes");
    }
}
