use super::utils::centered_rect;
use crate::app::Control;
use duration_picker::{Direction as StepDirection, Field, Spinner};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

pub const COLUMN_WIDTH: u16 = 9;
pub const SEPARATOR_WIDTH: u16 = 3;
pub const PICKER_WIDTH: u16 = 3 * COLUMN_WIDTH + 2 * SEPARATOR_WIDTH;
pub const PICKER_HEIGHT: u16 = 6;

/// Cells of one days/hours/minutes column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    pub increment: Rect,
    pub input: Rect,
    pub decrement: Rect,
    pub label: Rect,
}

/// Where each control of the picker was drawn, used for mouse hit-testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerLayout {
    pub area: Rect,
    pub columns: [ColumnLayout; 3],
    pub separators: [Rect; 2],
}

fn column_index(field: Field) -> usize {
    match field {
        Field::Days => 0,
        Field::Hours => 1,
        Field::Minutes => 2,
    }
}

impl PickerLayout {
    /// Lay the picker out centered in `area`.
    pub fn compute(area: Rect) -> Self {
        let area = centered_rect(PICKER_WIDTH, PICKER_HEIGHT, area);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(COLUMN_WIDTH),    // Days
                Constraint::Length(SEPARATOR_WIDTH), // ":"
                Constraint::Length(COLUMN_WIDTH),    // Hours
                Constraint::Length(SEPARATOR_WIDTH), // ":"
                Constraint::Length(COLUMN_WIDTH),    // Minutes
            ])
            .split(area);

        let column = |rect: Rect| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // ▲
                    Constraint::Length(3), // Input box
                    Constraint::Length(1), // ▼
                    Constraint::Length(1), // Label
                ])
                .split(rect);
            ColumnLayout {
                increment: rows[0],
                input: rows[1],
                decrement: rows[2],
                label: rows[3],
            }
        };

        Self {
            area,
            columns: [column(cols[0]), column(cols[2]), column(cols[4])],
            separators: [cols[1], cols[3]],
        }
    }

    pub fn column(&self, field: Field) -> &ColumnLayout {
        &self.columns[column_index(field)]
    }

    pub fn rect_of(&self, control: Control) -> Option<Rect> {
        let column = self.column(control.field());
        let rect = match control {
            Control::Spinner(Spinner {
                direction: StepDirection::Increment,
                ..
            }) => column.increment,
            Control::Spinner(Spinner {
                direction: StepDirection::Decrement,
                ..
            }) => column.decrement,
            Control::Field(_) => column.input,
        };
        (!rect.is_empty()).then_some(rect)
    }

    /// Control under the given terminal cell, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        Control::ORDER.into_iter().find(|control| {
            self.rect_of(*control)
                .is_some_and(|rect| rect.contains(position))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_is_centered() {
        let layout = PickerLayout::compute(Rect::new(0, 0, 60, 10));
        assert_eq!(layout.area, Rect::new(13, 2, PICKER_WIDTH, PICKER_HEIGHT));
        assert_eq!(layout.column(Field::Days).increment, Rect::new(13, 2, 9, 1));
        assert_eq!(layout.column(Field::Hours).input, Rect::new(25, 3, 9, 3));
        assert_eq!(layout.column(Field::Minutes).decrement, Rect::new(37, 6, 9, 1));
        assert_eq!(layout.separators[0], Rect::new(22, 2, 3, 6));
    }

    #[test]
    fn hit_finds_controls() {
        let layout = PickerLayout::compute(Rect::new(0, 0, 60, 10));
        assert_eq!(
            layout.hit(15, 2),
            Some(Control::Spinner(Spinner::increment(Field::Days)))
        );
        assert_eq!(layout.hit(30, 4), Some(Control::Field(Field::Hours)));
        assert_eq!(
            layout.hit(40, 6),
            Some(Control::Spinner(Spinner::decrement(Field::Minutes)))
        );
    }

    #[test]
    fn hit_misses_separators_labels_and_outside() {
        let layout = PickerLayout::compute(Rect::new(0, 0, 60, 10));
        assert_eq!(layout.hit(23, 4), None);
        assert_eq!(layout.hit(15, 7), None);
        assert_eq!(layout.hit(0, 0), None);
    }

    #[test]
    fn default_layout_hits_nothing() {
        let layout = PickerLayout::default();
        assert_eq!(layout.hit(0, 0), None);
        assert_eq!(layout.rect_of(Control::Field(Field::Days)), None);
    }
}
