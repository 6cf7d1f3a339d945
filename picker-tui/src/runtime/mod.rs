mod change_queue;
mod event_loop;
mod input;

pub use change_queue::channel;
pub use event_loop::{drain_changes, run_app};
