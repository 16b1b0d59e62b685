//! Multi-subscriber signal.
//!
//! An [`Event`] is an ordered list of slots. Signalling it calls every slot
//! synchronously with `(subject, sender)` in the order the slots were added.
//! The first slot that fails stops the dispatch and its error is returned
//! unchanged.

use crate::error::{EngineError, EngineResult};

/// Subscriber callback attached to an [`Event`].
pub type Slot<T> = Box<dyn Fn(&T, &T) -> EngineResult<()>>;

pub struct Event<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Default for Event<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> std::fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("slots", &self.slots.len())
            .finish()
    }
}

impl<T> Event<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slot. Slots fire in insertion order.
    pub fn add_slot<F>(&mut self, slot: F)
    where
        F: Fn(&T, &T) -> EngineResult<()> + 'static,
    {
        self.slots.push(Box::new(slot));
    }

    /// Remove the slot at `index`, shifting later slots down.
    pub fn remove_slot(&mut self, index: usize) -> EngineResult<()> {
        if index >= self.slots.len() {
            return Err(EngineError::not_found(format!(
                "slot index {} (event has {} slots)",
                index,
                self.slots.len()
            )));
        }
        self.slots.remove(index);
        Ok(())
    }

    pub fn clear_slots(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Invoke every slot with `(subject, sender)`.
    pub fn signal(&self, subject: &T, sender: &T) -> EngineResult<()> {
        for slot in &self.slots {
            slot(subject, sender)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_slots_fire_in_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut event: Event<&str> = Event::new();
        for id in 1..=3 {
            let log = Rc::clone(&log);
            event.add_slot(move |this, sender| {
                log.borrow_mut().push(format!("{}:{}->{}", id, sender, this));
                Ok(())
            });
        }
        event.signal(&"a", &"b").unwrap();
        assert_eq!(*log.borrow(), vec!["1:b->a", "2:b->a", "3:b->a"]);
    }

    #[test]
    fn test_remove_slot_out_of_range() {
        let mut event: Event<u32> = Event::new();
        event.add_slot(|_, _| Ok(()));
        assert!(matches!(event.remove_slot(1), Err(EngineError::NotFound(_))));
        assert!(event.remove_slot(0).is_ok());
        assert!(event.is_empty());
    }

    #[test]
    fn test_remove_slot_shifts_remaining() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut event: Event<u32> = Event::new();
        for id in 0..3 {
            let log = Rc::clone(&log);
            event.add_slot(move |_, _| {
                log.borrow_mut().push(id);
                Ok(())
            });
        }
        event.remove_slot(1).unwrap();
        event.signal(&0, &0).unwrap();
        assert_eq!(*log.borrow(), vec![0, 2]);
    }

    #[test]
    fn test_failing_slot_aborts_dispatch() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut event: Event<u32> = Event::new();
        let first = Rc::clone(&log);
        event.add_slot(move |_, _| {
            first.borrow_mut().push("first");
            Ok(())
        });
        event.add_slot(|_, _| Err(EngineError::collaborator("boom")));
        let third = Rc::clone(&log);
        event.add_slot(move |_, _| {
            third.borrow_mut().push("third");
            Ok(())
        });

        let err = event.signal(&1, &2).unwrap_err();
        assert_eq!(err, EngineError::CollaboratorFailure("boom".into()));
        assert_eq!(*log.borrow(), vec!["first"]);
    }
}
