use super::message::Message;
use tokio::sync::mpsc;
use tracing::warn;

/// Receives the result of a session
pub trait CompletionSink: Send + Sync {
    /// Called exactly once with the full transcript when the last answer is in
    fn on_complete(&self, transcript: Vec<Message>);

    /// Called when the candidate leaves before completion
    fn on_back(&self) {}
}

/// How a session ended
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Completed(Vec<Message>),
    Exited,
}

/// Sink that forwards outcomes over a channel
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<SessionOutcome>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SessionOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn forward(&self, outcome: SessionOutcome) {
        if self.tx.send(outcome).is_err() {
            warn!("Session outcome dropped: receiver closed");
        }
    }
}

impl CompletionSink for ChannelSink {
    fn on_complete(&self, transcript: Vec<Message>) {
        self.forward(SessionOutcome::Completed(transcript));
    }

    fn on_back(&self) {
        self.forward(SessionOutcome::Exited);
    }
}
