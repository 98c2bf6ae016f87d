//! Occupancy sensor — edge-triggered presence detection.
//!
//! The sensor only reacts to transitions: setting the flag to its current
//! value does nothing. On a transition it notifies its listeners and
//! returns the edge to the owner, which handles its own response directly
//! (the owner is not in the listener list).

use crate::observer::{Listeners, SubscriptionId};

/// A presence transition reported by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyEvent {
    Entered,
    Left,
}

/// Notified on occupancy transitions.
pub trait OccupancyListener {
    fn patient_entered(&mut self);
    fn patient_left(&mut self);
}

#[derive(Debug, Default)]
pub struct OccupancySensor {
    occupied: bool,
    listeners: Listeners<dyn OccupancyListener>,
}

impl OccupancySensor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the presence flag. On a transition, listeners are notified
    /// in registration order and the edge is returned; otherwise `None`.
    pub fn set_occupied(&mut self, occupied: bool) -> Option<OccupancyEvent> {
        if self.occupied == occupied {
            return None;
        }
        self.occupied = occupied;
        if occupied {
            self.listeners.notify(|l| l.patient_entered());
            Some(OccupancyEvent::Entered)
        } else {
            self.listeners.notify(|l| l.patient_left());
            Some(OccupancyEvent::Left)
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn subscribe(&mut self, listener: Box<dyn OccupancyListener>) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Log(Rc<RefCell<Vec<&'static str>>>);

    impl OccupancyListener for Log {
        fn patient_entered(&mut self) {
            self.0.borrow_mut().push("entered");
        }
        fn patient_left(&mut self) {
            self.0.borrow_mut().push("left");
        }
    }

    #[test]
    fn test_edges_only() {
        let mut sensor = OccupancySensor::new();
        assert_eq!(sensor.set_occupied(false), None);
        assert_eq!(sensor.set_occupied(true), Some(OccupancyEvent::Entered));
        assert_eq!(sensor.set_occupied(true), None);
        assert_eq!(sensor.set_occupied(false), Some(OccupancyEvent::Left));
        assert!(!sensor.is_occupied());
    }

    #[test]
    fn test_listeners_see_transitions() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut sensor = OccupancySensor::new();
        sensor.subscribe(Box::new(Log(events.clone())));

        sensor.set_occupied(true);
        sensor.set_occupied(true); // no edge, no event
        sensor.set_occupied(false);
        assert_eq!(*events.borrow(), vec!["entered", "left"]);
    }
}
