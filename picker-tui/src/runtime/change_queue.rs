use duration_picker::ChannelListener;
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub type ChangeRx = UnboundedReceiver<u32>;

/// Listener handed to the picker, and the receiving end the event loop drains.
pub fn channel() -> (ChannelListener, ChangeRx) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelListener(tx), rx)
}
