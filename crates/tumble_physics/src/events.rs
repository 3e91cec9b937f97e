//! Collision events and per-body collision handlers

use crate::body::BodyHandle;
use rapier3d::prelude as rapier;
use std::collections::HashMap;

/// A newly started contact between two bodies, produced during a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// First body
    pub body_a: BodyHandle,
    /// Second body
    pub body_b: BodyHandle,
    /// Contact point in world space
    pub contact_point: [f32; 3],
    /// Contact normal (pointing from body A to body B)
    pub normal: [f32; 3],
    /// Relative approach speed of the two bodies at the contact point,
    /// projected on the normal, before the contact was resolved
    pub impact_velocity: f32,
}

impl CollisionEvent {
    /// The body on the other side of the contact
    pub fn other(&self, body: BodyHandle) -> Option<BodyHandle> {
        if body == self.body_a {
            Some(self.body_b)
        } else if body == self.body_b {
            Some(self.body_a)
        } else {
            None
        }
    }

    /// Check if a body participates in this contact
    pub fn involves(&self, body: BodyHandle) -> bool {
        self.body_a == body || self.body_b == body
    }
}

/// Handler invoked synchronously for each collision of the body it is registered on
pub trait CollisionHandler: Send {
    /// Called once per new contact involving the body
    fn on_collision(&mut self, event: &CollisionEvent);
}

impl<F> CollisionHandler for F
where
    F: FnMut(&CollisionEvent) + Send,
{
    fn on_collision(&mut self, event: &CollisionEvent) {
        self(event)
    }
}

/// Token returned when a handler is registered; used to unregister it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerToken(pub u64);

struct HandlerSlot {
    token: HandlerToken,
    handler: Box<dyn CollisionHandler>,
}

/// Handlers keyed by body identity
#[derive(Default)]
pub(crate) struct HandlerTable {
    by_body: HashMap<BodyHandle, Vec<HandlerSlot>>,
    owners: HashMap<HandlerToken, BodyHandle>,
    next_token: u64,
}

impl HandlerTable {
    pub(crate) fn insert(&mut self, body: BodyHandle, handler: Box<dyn CollisionHandler>) -> HandlerToken {
        self.next_token += 1;
        let token = HandlerToken(self.next_token);
        self.by_body
            .entry(body)
            .or_default()
            .push(HandlerSlot { token, handler });
        self.owners.insert(token, body);
        token
    }

    pub(crate) fn remove(&mut self, token: HandlerToken) -> bool {
        let Some(body) = self.owners.remove(&token) else {
            return false;
        };
        if let Some(slots) = self.by_body.get_mut(&body) {
            slots.retain(|slot| slot.token != token);
            if slots.is_empty() {
                self.by_body.remove(&body);
            }
        }
        true
    }

    /// Drop every handler of a body; returns how many were removed
    pub(crate) fn remove_body(&mut self, body: BodyHandle) -> usize {
        match self.by_body.remove(&body) {
            Some(slots) => {
                for slot in &slots {
                    self.owners.remove(&slot.token);
                }
                slots.len()
            }
            None => 0,
        }
    }

    pub(crate) fn count(&self, body: BodyHandle) -> usize {
        self.by_body.get(&body).map_or(0, Vec::len)
    }

    pub(crate) fn total(&self) -> usize {
        self.owners.len()
    }

    /// Deliver to the handlers of body A, then body B
    pub(crate) fn dispatch(&mut self, event: &CollisionEvent) {
        for body in [event.body_a, event.body_b] {
            if let Some(slots) = self.by_body.get_mut(&body) {
                for slot in slots.iter_mut() {
                    slot.handler.on_collision(event);
                }
            }
        }
    }
}

/// Channel-based event collector for Rapier
pub(crate) struct ChannelEventCollector {
    pub(crate) collision_events: crossbeam_channel::Sender<rapier::CollisionEvent>,
}

impl rapier::EventHandler for ChannelEventCollector {
    fn handle_collision_event(
        &self,
        _bodies: &rapier::RigidBodySet,
        _colliders: &rapier::ColliderSet,
        event: rapier::CollisionEvent,
        _contact_pair: Option<&rapier::ContactPair>,
    ) {
        let _ = self.collision_events.send(event);
    }

    fn handle_contact_force_event(
        &self,
        _dt: f32,
        _bodies: &rapier::RigidBodySet,
        _colliders: &rapier::ColliderSet,
        _contact_pair: &rapier::ContactPair,
        _total_force_magnitude: f32,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn event(a: BodyHandle, b: BodyHandle) -> CollisionEvent {
        CollisionEvent {
            body_a: a,
            body_b: b,
            contact_point: [0.0; 3],
            normal: [0.0, 1.0, 0.0],
            impact_velocity: 2.0,
        }
    }

    fn body(index: u32) -> BodyHandle {
        BodyHandle::from_raw(rapier::RigidBodyHandle::from_raw_parts(index, 0))
    }

    #[test]
    fn test_dispatch_reaches_both_bodies() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut table = HandlerTable::default();
        for b in [body(1), body(2)] {
            let hits = hits.clone();
            table.insert(b, Box::new(move |_: &CollisionEvent| {
                hits.fetch_add(1, Ordering::SeqCst);
            }));
        }

        table.dispatch(&event(body(1), body(2)));
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        table.dispatch(&event(body(1), body(3)));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_remove_by_token_is_idempotent() {
        let mut table = HandlerTable::default();
        let token = table.insert(body(1), Box::new(|_: &CollisionEvent| {}));
        let other = table.insert(body(1), Box::new(|_: &CollisionEvent| {}));
        assert_ne!(token, other);
        assert_eq!(table.count(body(1)), 2);

        assert!(table.remove(token));
        assert!(!table.remove(token));
        assert_eq!(table.count(body(1)), 1);

        assert_eq!(table.remove_body(body(1)), 1);
        assert!(!table.remove(other));
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_other_body() {
        let e = event(body(1), body(2));
        assert_eq!(e.other(body(1)), Some(body(2)));
        assert_eq!(e.other(body(2)), Some(body(1)));
        assert_eq!(e.other(body(3)), None);
        assert!(e.involves(body(2)));
    }
}
