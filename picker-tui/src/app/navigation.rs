use super::*;

const ROWS: usize = 3;
const COLUMNS: usize = 3;

impl App {
    fn focus_index(&self) -> usize {
        Control::ORDER
            .iter()
            .position(|c| *c == self.focused)
            .unwrap_or(0)
    }

    fn set_focus(&mut self, index: usize) {
        let next = Control::ORDER[index];
        if next != self.focused {
            // Focus moving away is as good as a release for keyboard holds
            self.picker.key_up(Instant::now());
            self.focused = next;
            self.clear_status();
        }
    }

    pub fn focus_next(&mut self) {
        let idx = (self.focus_index() + 1) % Control::ORDER.len();
        self.set_focus(idx);
    }

    pub fn focus_previous(&mut self) {
        let len = Control::ORDER.len();
        let idx = (self.focus_index() + len - 1) % len;
        self.set_focus(idx);
    }

    pub fn focus_left(&mut self) {
        let idx = self.focus_index();
        if idx / ROWS > 0 {
            self.set_focus(idx - ROWS);
        }
    }

    pub fn focus_right(&mut self) {
        let idx = self.focus_index();
        if idx / ROWS + 1 < COLUMNS {
            self.set_focus(idx + ROWS);
        }
    }

    pub fn focus_up(&mut self) {
        let idx = self.focus_index();
        if idx % ROWS > 0 {
            self.set_focus(idx - 1);
        }
    }

    pub fn focus_down(&mut self) {
        let idx = self.focus_index();
        if idx % ROWS + 1 < ROWS {
            self.set_focus(idx + 1);
        }
    }
}
