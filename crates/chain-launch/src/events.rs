use std::fmt;
use tokio::sync::mpsc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStatus {
    Ongoing,
    Done,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStatus::Ongoing => f.write_str("ongoing"),
            EventStatus::Done => f.write_str("done"),
        }
    }
}

/// A human-readable progress notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub status: EventStatus,
    pub message: String,
}

impl Event {
    pub fn new(status: EventStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn ongoing(message: impl Into<String>) -> Self {
        Self::new(EventStatus::Ongoing, message)
    }

    pub fn done(message: impl Into<String>) -> Self {
        Self::new(EventStatus::Done, message)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}

/// Receives progress notifications. Fire-and-forget: no acknowledgment.
pub trait EventSink: Send + Sync {
    fn send(&self, event: Event);
}

/// Writes events to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn send(&self, event: Event) {
        info!(status = %event.status, "{}", event.message);
    }
}

/// Forwards events to an unbounded channel, e.g. for a progress UI.
#[derive(Debug, Clone)]
pub struct ChannelEventSink {
    tx: mpsc::UnboundedSender<Event>,
}

impl ChannelEventSink {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelEventSink {
    fn send(&self, event: Event) {
        // Nobody listening is fine.
        let _ = self.tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_sink_preserves_order() {
        let (sink, mut rx) = ChannelEventSink::channel();
        sink.send(Event::ongoing("first"));
        sink.send(Event::done("second"));

        assert_eq!(rx.try_recv().unwrap(), Event::ongoing("first"));
        assert_eq!(rx.try_recv().unwrap(), Event::done("second"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_sink_ignores_dropped_receiver() {
        let (sink, rx) = ChannelEventSink::channel();
        drop(rx);
        sink.send(Event::ongoing("nobody hears this"));
    }

    #[test]
    fn test_event_display() {
        assert_eq!(
            Event::ongoing("Publishing the network").to_string(),
            "[ongoing] Publishing the network"
        );
    }
}
