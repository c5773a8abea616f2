//! Shape event listeners
//!
//! Listeners subscribe to a [`ShapeEvent`] and are called synchronously, in
//! registration order, each time the shape emits that event.

use std::fmt;

use slotmap::{new_key_type, SlotMap};

use crate::HyperShape;

new_key_type! {
    /// Key to a registered listener
    ///
    /// Generational, so a key kept after `off` never removes a listener that
    /// later reuses the same slot.
    pub struct ListenerKey;
}

/// Events a [`HyperShape`] can emit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeEvent {
    /// Fired after every successful `rotate`, once the derived vertices are up to date
    Rotate,
}

/// Receiver of shape events
///
/// Implemented for any `FnMut(&HyperShape) + Send` closure.
pub trait ShapeListener: Send {
    /// Called with the shape that emitted `event`
    fn on_event(&mut self, event: ShapeEvent, shape: &HyperShape);
}

impl<F> ShapeListener for F
where
    F: FnMut(&HyperShape) + Send,
{
    fn on_event(&mut self, _event: ShapeEvent, shape: &HyperShape) {
        self(shape)
    }
}

struct Registration {
    event: ShapeEvent,
    listener: Box<dyn ShapeListener>,
}

/// Ordered set of listeners owned by a shape
#[derive(Default)]
pub struct ShapeListeners {
    slots: SlotMap<ListenerKey, Registration>,
    /// Registration order; slot iteration order is not stable after removals
    order: Vec<ListenerKey>,
}

impl ShapeListeners {
    /// Create an empty listener set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `event`
    pub fn insert(&mut self, event: ShapeEvent, listener: Box<dyn ShapeListener>) -> ListenerKey {
        let key = self.slots.insert(Registration { event, listener });
        self.order.push(key);
        key
    }

    /// Unregister a listener. Returns false if the key was already removed.
    pub fn remove(&mut self, key: ListenerKey) -> bool {
        if self.slots.remove(key).is_none() {
            return false;
        }
        self.order.retain(|&k| k != key);
        true
    }

    /// Number of registered listeners
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no listeners are registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of listeners registered for `event`
    pub fn count_for(&self, event: ShapeEvent) -> usize {
        self.slots.values().filter(|r| r.event == event).count()
    }

    /// Call every listener registered for `event`, oldest first
    pub(crate) fn notify(&mut self, event: ShapeEvent, shape: &HyperShape) {
        for key in &self.order {
            if let Some(registration) = self.slots.get_mut(*key) {
                if registration.event == event {
                    registration.listener.on_event(event, shape);
                }
            }
        }
    }
}

impl fmt::Debug for ShapeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeListeners")
            .field("count", &self.len())
            .finish()
    }
}
