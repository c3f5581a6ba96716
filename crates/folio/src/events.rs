//! # Input Event Channel
//!
//! Hands backdrop input from a producer thread to the frame loop.
//!
//! ```text
//! ┌─────────────┐      ┌─────────────┐      ┌─────────────┐
//! │  Producer   │─────>│   Bounded   │─────>│ Frame loop  │
//! │  (pointer)  │      │   channel   │      │ (backdrop)  │
//! └─────────────┘      └─────────────┘      └─────────────┘
//! ```
//!
//! The backdrop itself never crosses a thread; only events do.

use crossbeam_channel::{bounded, Receiver, RecvError, Sender};
use folio_shared::InputEvent;

/// Bounded event channel.
pub struct EventBus {
    sender: Sender<InputEvent>,
    receiver: Receiver<InputEvent>,
}

impl EventBus {
    /// Creates a channel holding at most `capacity` events in flight.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Splits the bus into its two ends.
    #[must_use]
    pub fn split(self) -> (EventSender, EventReceiver) {
        (
            EventSender {
                sender: self.sender,
            },
            EventReceiver {
                receiver: self.receiver,
            },
        )
    }
}

/// Producer end.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<InputEvent>,
}

impl EventSender {
    /// Sends, waiting for room. Returns `false` once the receiver is gone.
    #[inline]
    pub fn send_blocking(&self, event: InputEvent) -> bool {
        self.sender.send(event).is_ok()
    }
}

/// Consumer end.
pub struct EventReceiver {
    receiver: Receiver<InputEvent>,
}

impl EventReceiver {
    /// Waits for the next event. `None` once every sender is dropped and the
    /// channel is empty.
    pub fn recv(&self) -> Option<InputEvent> {
        match self.receiver.recv() {
            Ok(event) => Some(event),
            Err(RecvError) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_send_receive_in_order() {
        let (sender, receiver) = EventBus::new(8).split();
        for i in 0..3 {
            assert!(sender.send_blocking(InputEvent::Frame {
                at_ms: f64::from(i) * 16.0
            }));
        }
        drop(sender);

        let mut times = Vec::new();
        while let Some(event) = receiver.recv() {
            times.push(event.at_ms());
        }
        assert_eq!(times, [0.0, 16.0, 32.0]);
    }

    #[test]
    fn test_blocking_send_waits_for_room() {
        let (sender, receiver) = EventBus::new(1).split();
        let producer = thread::spawn(move || {
            (0..10).all(|i| sender.send_blocking(InputEvent::Frame { at_ms: f64::from(i) }))
        });

        let mut received = 0;
        while receiver.recv().is_some() {
            received += 1;
        }
        assert!(producer.join().unwrap());
        assert_eq!(received, 10);
    }

    #[test]
    fn test_send_fails_once_receiver_is_gone() {
        let (sender, receiver) = EventBus::new(4).split();
        drop(receiver);
        assert!(!sender.send_blocking(InputEvent::Frame { at_ms: 1.0 }));
    }

    #[test]
    fn test_recv_ends_when_senders_drop() {
        let (sender, receiver) = EventBus::new(4).split();
        assert!(sender.send_blocking(InputEvent::Frame { at_ms: 1.0 }));
        drop(sender);

        assert_eq!(receiver.recv(), Some(InputEvent::Frame { at_ms: 1.0 }));
        assert_eq!(receiver.recv(), None);
    }
}
