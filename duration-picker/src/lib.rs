mod config;
mod duration;
mod emitter;
mod field;
mod format;
mod picker;
pub mod press;

pub use config::*;
pub use duration::*;
pub use emitter::*;
pub use field::*;
pub use format::*;
pub use picker::*;
pub use press::{PressEvent, PressSource, PressState, RepeatSession};
