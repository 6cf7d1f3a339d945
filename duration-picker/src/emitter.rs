use tokio::sync::mpsc::UnboundedSender;

/// Receives the recomputed total, in minutes, after every field write.
pub trait ChangeListener {
    fn duration_changed(&mut self, total_minutes: u32);
}

impl<F> ChangeListener for F
where
    F: FnMut(u32),
{
    fn duration_changed(&mut self, total_minutes: u32) {
        self(total_minutes)
    }
}

/// Forwards totals into a channel drained by the host's event loop.
#[derive(Debug, Clone)]
pub struct ChannelListener(pub UnboundedSender<u32>);

impl ChangeListener for ChannelListener {
    fn duration_changed(&mut self, total_minutes: u32) {
        if self.0.send(total_minutes).is_err() {
            tracing::warn!(total_minutes, "change receiver dropped");
        }
    }
}

/// Listener for pickers that nobody observes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl ChangeListener for Discard {
    fn duration_changed(&mut self, _total_minutes: u32) {}
}
