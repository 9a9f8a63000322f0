//! Typed event channel for editor notifications.
//!
//! Popup visibility, breakpoint switches, and document replacement used to
//! be ambient concerns; here they are explicit messages on a bus owned by
//! the editor session. Subscribers register per topic and read from their
//! own queue; there is no global singleton.

use crate::breakpoint::Breakpoint;
use crate::element::ElementId;
use std::sync::mpsc::{Receiver, Sender, channel};

/// Subscription topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Popup open/close notifications.
    Popup,
    /// Active-breakpoint switches.
    Breakpoint,
    /// Whole-tree replacements (sync, insert, remove).
    Document,
}

/// Events published by the editor session.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    PopupOpened { id: ElementId },
    PopupClosed { id: ElementId },
    BreakpointChanged { from: Breakpoint, to: Breakpoint },
    ElementSynced { id: ElementId },
    DocumentReplaced,
}

impl EditorEvent {
    /// The topic this event publishes under.
    pub fn topic(&self) -> Topic {
        match self {
            EditorEvent::PopupOpened { .. } | EditorEvent::PopupClosed { .. } => Topic::Popup,
            EditorEvent::BreakpointChanged { .. } => Topic::Breakpoint,
            EditorEvent::ElementSynced { .. } | EditorEvent::DocumentReplaced => Topic::Document,
        }
    }
}

/// Identifier handed out by [`EventBus::subscribe`]; pass it back to
/// [`EventBus::unsubscribe`] to stop receiving.
pub type SubscriptionId = u64;

/// A subscriber's end of the channel.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    receiver: Receiver<EditorEvent>,
}

impl Subscription {
    /// The id to unsubscribe with.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Take the next pending event, if any.
    pub fn try_recv(&self) -> Option<EditorEvent> {
        self.receiver.try_recv().ok()
    }

    /// Drain all pending events.
    pub fn drain(&self) -> Vec<EditorEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

struct Subscriber {
    id: SubscriptionId,
    topic: Topic,
    sender: Sender<EditorEvent>,
}

/// Topic-keyed fan-out bus, owned by the editor session.
#[derive(Default)]
pub struct EventBus {
    next_id: SubscriptionId,
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber for a topic.
    pub fn subscribe(&mut self, topic: Topic) -> Subscription {
        let (sender, receiver) = channel();
        self.next_id += 1;
        let id = self.next_id;
        self.subscribers.push(Subscriber { id, topic, sender });
        Subscription { id, receiver }
    }

    /// Remove a subscriber.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|subscriber| subscriber.id != id);
    }

    /// Deliver an event to every live subscriber of its topic.
    ///
    /// Subscribers whose receiving end was dropped are pruned here instead of
    /// erroring. Returns the number of deliveries.
    pub fn publish(&mut self, event: &EditorEvent) -> usize {
        let topic = event.topic();
        let mut delivered = 0;
        self.subscribers.retain(|subscriber| {
            if subscriber.topic != topic {
                return true;
            }
            match subscriber.sender.send(event.clone()) {
                Ok(()) => {
                    delivered += 1;
                    true
                }
                Err(_) => false,
            }
        });
        delivered
    }

    /// Number of live subscriptions (all topics).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_publish_reaches_topic_subscribers_only() {
        let mut bus = EventBus::new();
        let popup_sub = bus.subscribe(Topic::Popup);
        let doc_sub = bus.subscribe(Topic::Document);

        let id = Uuid::new_v4();
        let delivered = bus.publish(&EditorEvent::PopupOpened { id });
        assert_eq!(delivered, 1);
        assert_eq!(popup_sub.try_recv(), Some(EditorEvent::PopupOpened { id }));
        assert_eq!(doc_sub.try_recv(), None);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut bus = EventBus::new();
        let sub = bus.subscribe(Topic::Breakpoint);
        bus.unsubscribe(sub.id());

        let delivered = bus.publish(&EditorEvent::BreakpointChanged {
            from: Breakpoint::Desktop,
            to: Breakpoint::Mobile,
        });
        assert_eq!(delivered, 0);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_dropped_receiver_pruned_on_publish() {
        let mut bus = EventBus::new();
        let sub = bus.subscribe(Topic::Document);
        drop(sub);
        assert_eq!(bus.subscriber_count(), 1);

        bus.publish(&EditorEvent::DocumentReplaced);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_drain_preserves_order() {
        let mut bus = EventBus::new();
        let sub = bus.subscribe(Topic::Popup);
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        bus.publish(&EditorEvent::PopupOpened { id: a });
        bus.publish(&EditorEvent::PopupClosed { id: a });
        bus.publish(&EditorEvent::PopupOpened { id: b });

        let events = sub.drain();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], EditorEvent::PopupOpened { id: a });
        assert_eq!(events[2], EditorEvent::PopupOpened { id: b });
    }
}
