//! Blood Token bounty registry
//!
//! Holds the single current bounty list for the process. The embedding
//! application constructs one registry at start-up and shares it (usually
//! behind an `Arc`) with whatever needs to read the list or hear about
//! replacements.

use parking_lot::{ReentrantMutex, RwLock};
use tracing::info;

use crate::error::BountyResult;
use crate::listeners::{Listener, ListenerSet};
use crate::text::{format_bounty_targets, parse_bounty_list};
use crate::types::BountyList;

pub const DEFAULT_HANDLE: &str = "Thunderlake";
pub const DEFAULT_REQUIREMENT: &str = "Must kill with knife";

/// The list a fresh registry starts with.
pub fn default_targets() -> BountyList {
    let mut list = BountyList::new();
    list.insert(DEFAULT_HANDLE, Some(DEFAULT_REQUIREMENT.to_string()));
    list
}

pub struct BountyRegistry {
    targets: RwLock<BountyList>,
    listeners: ListenerSet,
    // Serializes replace + notify across threads; reentrant so a listener may call `set`
    replace_lock: ReentrantMutex<()>,
}

impl Default for BountyRegistry {
    fn default() -> Self {
        Self::with_targets(default_targets())
    }
}

impl BountyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_targets(targets: BountyList) -> Self {
        Self {
            targets: RwLock::new(targets),
            listeners: ListenerSet::new(),
            replace_lock: ReentrantMutex::new(()),
        }
    }

    /// Independent copy of the active list.
    pub fn get(&self) -> BountyList {
        self.targets.read().clone()
    }

    /// Register a callback for list replacements. Registering the same
    /// callback twice has no effect.
    pub fn register_listener(&self, callback: Listener) {
        self.listeners.register(callback);
    }

    /// Remove a previously registered callback, if present.
    pub fn unregister_listener(&self, callback: &Listener) {
        self.listeners.unregister(callback);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Replace the active list and notify listeners.
    ///
    /// Listener failures are logged and skipped; this never fails. Listeners
    /// run on the calling thread before this returns. A listener that calls
    /// `set` again triggers a nested round of notifications, after which the
    /// nested list is the active one.
    pub fn set(&self, new_targets: BountyList) {
        let _guard = self.replace_lock.lock();

        let snapshot = {
            let mut targets = self.targets.write();
            *targets = new_targets;
            targets.clone()
        };

        info!("Blood Token list replaced ({} targets)", snapshot.len());
        self.listeners.notify(&snapshot);
    }

    /// Parse user-provided bounty text. See [`parse_bounty_list`].
    pub fn parse(raw_text: &str) -> BountyResult<BountyList> {
        parse_bounty_list(raw_text)
    }

    /// Render `targets`, or the active list when `None`.
    pub fn format(&self, targets: Option<&BountyList>) -> String {
        match targets {
            Some(targets) => format_bounty_targets(targets),
            None => format_bounty_targets(&self.targets.read()),
        }
    }
}
