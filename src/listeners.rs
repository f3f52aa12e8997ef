//! Observer list for bounty list replacements
//!
//! Callbacks are delivered synchronously, on the caller's thread, in
//! registration order. Each call runs inside its own error boundary: a
//! returned error or a panic is logged and the next listener still runs.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::types::BountyList;

/// Callback invoked with a snapshot of the newly installed list.
pub type Listener = Arc<dyn Fn(&BountyList) -> anyhow::Result<()> + Send + Sync>;

/// Wrap a closure as a [`Listener`].
pub fn listener<F>(f: F) -> Listener
where
    F: Fn(&BountyList) -> anyhow::Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

fn same_listener(a: &Listener, b: &Listener) -> bool {
    // Compare data pointers only; vtable pointers for the same closure can differ
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

#[derive(Default)]
pub struct ListenerSet {
    listeners: Mutex<Vec<Listener>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the listener was already registered.
    pub fn register(&self, callback: Listener) -> bool {
        let mut listeners = self.listeners.lock();
        if listeners.iter().any(|l| same_listener(l, &callback)) {
            return false;
        }
        listeners.push(callback);
        true
    }

    /// Returns false if the listener was not registered.
    pub fn unregister(&self, callback: &Listener) -> bool {
        let mut listeners = self.listeners.lock();
        match listeners.iter().position(|l| same_listener(l, callback)) {
            Some(idx) => {
                listeners.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }

    /// Notify every listener registered at the time of the call.
    ///
    /// The lock is not held while callbacks run, so a callback may register
    /// or unregister listeners; such changes apply from the next notification.
    /// Returns the number of listeners that failed.
    pub fn notify(&self, snapshot: &BountyList) -> usize {
        let listeners: Vec<Listener> = self.listeners.lock().clone();
        let mut failures = 0;

        for (idx, callback) in listeners.iter().enumerate() {
            match catch_unwind(AssertUnwindSafe(|| callback(snapshot))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    failures += 1;
                    warn!("Bounty listener {} failed: {:#}", idx, e);
                }
                Err(_) => {
                    failures += 1;
                    warn!("Bounty listener {} panicked", idx);
                }
            }
        }

        debug!(
            "Notified {} bounty listeners ({} failed)",
            listeners.len(),
            failures
        );
        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(counter: &Arc<AtomicUsize>) -> Listener {
        let counter = counter.clone();
        listener(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    #[test]
    fn test_register_is_idempotent() {
        let set = ListenerSet::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let l = counting(&hits);

        assert!(set.register(l.clone()));
        assert!(!set.register(l.clone()));
        assert_eq!(set.len(), 1);

        set.notify(&BountyList::new());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unregister_unknown_is_noop() {
        let set = ListenerSet::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let registered = counting(&hits);
        let stranger = counting(&hits);

        set.register(registered.clone());
        assert!(!set.unregister(&stranger));
        assert_eq!(set.len(), 1);
        assert!(set.unregister(&registered));
        assert!(set.is_empty());
    }

    #[test]
    fn test_failures_do_not_stop_delivery() {
        let set = ListenerSet::new();
        let hits = Arc::new(AtomicUsize::new(0));

        set.register(listener(|_| anyhow::bail!("observer gone")));
        set.register(listener(|_| panic!("observer exploded")));
        set.register(counting(&hits));

        let failures = set.notify(&BountyList::new());
        assert_eq!(failures, 2);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_delivery_in_registration_order() {
        let set = ListenerSet::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for id in 0..3 {
            let order = order.clone();
            set.register(listener(move |_| {
                order.lock().push(id);
                Ok(())
            }));
        }

        set.notify(&BountyList::new());
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }
}
