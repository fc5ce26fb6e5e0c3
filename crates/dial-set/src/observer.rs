//! Subscriber registry for change notifications.

use std::fmt;

use dial_core::{ParameterVersion, SubscriptionId};

type Callback = Box<dyn FnMut(ParameterVersion)>;

/// Ordered list of change callbacks.
///
/// Notification order is registration order. IDs are never reused
/// within one registry.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl ObserverRegistry {
    pub(crate) fn subscribe(
        &mut self,
        callback: impl FnMut(ParameterVersion) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, version: ParameterVersion) {
        for (_, callback) in &mut self.entries {
            callback(version);
        }
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("subscribers", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::default();
        for tag in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            registry.subscribe(move |v| log.borrow_mut().push((tag, v.0)));
        }
        registry.notify(ParameterVersion(1));
        assert_eq!(
            *log.borrow(),
            vec![("first", 1), ("second", 1), ("third", 1)]
        );
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let hits = Rc::new(RefCell::new(0));
        let mut registry = ObserverRegistry::default();
        let h = Rc::clone(&hits);
        let id = registry.subscribe(move |_| *h.borrow_mut() += 1);
        registry.notify(ParameterVersion(1));
        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        registry.notify(ParameterVersion(2));
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut registry = ObserverRegistry::default();
        let a = registry.subscribe(|_| {});
        registry.unsubscribe(a);
        let b = registry.subscribe(|_| {});
        assert_ne!(a, b);
    }
}
