//! Multicast notification hook.
//!
//! This module provides the publish/subscribe primitive used for all event
//! propagation in the crate:
//! - Handlers fire synchronously, in registration order
//! - Deregistration is by `HandlerId` (returned from `subscribe`)
//! - Removing an unknown handler is an error, never silently ignored

use std::fmt;

mod error;

pub use error::HookError;

// ============================================================================
// HandlerId
// ============================================================================

/// Identifies a subscribed handler so it can later be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// EventHook
// ============================================================================

/// An ordered list of callbacks invoked synchronously on `fire`.
///
/// The hook itself is stateless multicast: it keeps no memory of past
/// firings, and firing with zero handlers is a no-op.
pub struct EventHook<T> {
    handlers: Vec<(HandlerId, Box<dyn FnMut(&T)>)>,
    next_id: u64,
}

impl<T> EventHook<T> {
    /// Creates a hook with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a handler and returns the id needed to remove it.
    pub fn subscribe<F>(&mut self, handler: F) -> HandlerId
    where
        F: FnMut(&T) + 'static,
    {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Removes a previously registered handler.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::HandlerNotFound`] if no handler with the given
    /// id is registered, including when it was already removed.
    pub fn unsubscribe(&mut self, id: HandlerId) -> Result<(), HookError> {
        let position = self
            .handlers
            .iter()
            .position(|(handler_id, _)| *handler_id == id)
            .ok_or(HookError::HandlerNotFound(id))?;
        self.handlers.remove(position);
        Ok(())
    }

    /// Invokes every registered handler with the payload, in registration
    /// order. A hook with no handlers does nothing.
    pub fn fire(&mut self, payload: &T) {
        for (_, handler) in &mut self.handlers {
            handler(payload);
        }
    }

    /// Removes all handlers. Safe to call with none registered.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Returns the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T> Default for EventHook<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventHook<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHook")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, Rc<RefCell<Vec<u32>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (log.clone(), log)
    }

    #[test]
    fn test_fire_with_no_handlers_is_noop() {
        let mut hook: EventHook<u32> = EventHook::new();
        hook.fire(&42);
        assert!(hook.is_empty());
    }

    #[test]
    fn test_fire_passes_payload() {
        let (log, handle) = recorder();
        let mut hook = EventHook::new();
        hook.subscribe(move |value: &u32| handle.borrow_mut().push(*value));

        hook.fire(&7);
        hook.fire(&9);

        assert_eq!(*log.borrow(), vec![7, 9]);
    }

    #[test]
    fn test_handlers_fire_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut hook: EventHook<()> = EventHook::new();
        for tag in 1..=3u32 {
            let handle = log.clone();
            hook.subscribe(move |_| handle.borrow_mut().push(tag));
        }

        hook.fire(&());

        assert_eq!(*log.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_unsubscribe_removes_only_target() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut hook: EventHook<()> = EventHook::new();
        let first = log.clone();
        hook.subscribe(move |_| first.borrow_mut().push(1));
        let second = log.clone();
        let id = hook.subscribe(move |_| second.borrow_mut().push(2));
        let third = log.clone();
        hook.subscribe(move |_| third.borrow_mut().push(3));

        hook.unsubscribe(id).unwrap();
        hook.fire(&());

        assert_eq!(*log.borrow(), vec![1, 3]);
    }

    #[test]
    fn test_unsubscribe_unknown_handler_fails() {
        let mut hook: EventHook<()> = EventHook::new();
        let id = hook.subscribe(|_| {});

        hook.unsubscribe(id).unwrap();
        let result = hook.unsubscribe(id);

        assert_eq!(result, Err(HookError::HandlerNotFound(id)));
    }

    #[test]
    fn test_unsubscribe_foreign_id_fails() {
        let mut hook: EventHook<u32> = EventHook::new();
        let mut probe: EventHook<u32> = EventHook::new();
        let id = probe.subscribe(|_| {});

        assert!(hook.unsubscribe(id).is_err());
    }

    #[test]
    fn test_clear_removes_all_handlers() {
        let (log, handle) = recorder();
        let mut hook = EventHook::new();
        hook.subscribe(move |value: &u32| handle.borrow_mut().push(*value));

        hook.clear();
        hook.fire(&1);

        assert!(log.borrow().is_empty());
        assert!(hook.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut hook: EventHook<()> = EventHook::new();
        hook.clear();
        hook.clear();
        assert!(hook.is_empty());
    }

    #[test]
    fn test_ids_stay_unique_after_removal() {
        let mut hook: EventHook<()> = EventHook::new();
        let first = hook.subscribe(|_| {});
        hook.unsubscribe(first).unwrap();
        let second = hook.subscribe(|_| {});

        assert_ne!(first, second);
    }

    #[test]
    fn test_len_tracks_subscriptions() {
        let mut hook: EventHook<()> = EventHook::new();
        assert_eq!(hook.len(), 0);

        let id = hook.subscribe(|_| {});
        hook.subscribe(|_| {});
        assert_eq!(hook.len(), 2);

        hook.unsubscribe(id).unwrap();
        assert_eq!(hook.len(), 1);
    }

    #[test]
    fn test_debug_shows_handler_count() {
        let mut hook: EventHook<()> = EventHook::new();
        hook.subscribe(|_| {});
        let rendered = format!("{:?}", hook);
        assert!(rendered.contains("handlers: 1"));
    }

    #[test]
    fn test_handler_id_display() {
        let mut hook: EventHook<()> = EventHook::new();
        let id = hook.subscribe(|_| {});
        assert_eq!(format!("{}", id), "#0");
    }
}
