use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::change_queue::ChangeRx;
use super::input::{handle_key, handle_mouse};

/// Upper bound on how long to block waiting for input while nothing is held.
const IDLE_POLL: Duration = Duration::from_millis(100);

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    changes: &mut ChangeRx,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Wake up in time for the next repeat
        let timeout = app.poll_timeout(Instant::now(), IDLE_POLL);
        if event::poll(timeout)? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) => handle_key(key, app, now),
                Event::Mouse(mouse) => handle_mouse(mouse, app, now),
                // Releases that happen outside the terminal never reach us
                Event::FocusLost => app.release_all(now),
                _ => {}
            }
        }

        app.tick(Instant::now());
        drain_changes(app, changes);

        if !app.running {
            break;
        }
    }

    app.picker.teardown();
    drain_changes(app, changes);
    Ok(())
}

/// Deliver every total the picker reported to the host form.
pub fn drain_changes(app: &mut App, changes: &mut ChangeRx) {
    while let Ok(total_minutes) = changes.try_recv() {
        app.receive_change(total_minutes);
    }
}
