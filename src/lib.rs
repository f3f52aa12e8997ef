//! Blood Token - shared bounty list for the Kill Tracker
//!
//! The Blood Token list names the players worth hunting and, optionally,
//! how each kill has to be made. One [`BountyRegistry`] holds the active
//! list for the whole process; panels and other observers register a
//! listener and are called back synchronously whenever the list is replaced.
//!
//! # Text format
//!
//! ```text
//! Thunderlake | Must kill with knife
//! PlayerName2
//! ```
//!
//! One entry per line, `|` separates handle and requirement, blank lines
//! are ignored.
//!
//! # Example
//!
//! ```
//! use blood_token::{listener, BountyRegistry};
//!
//! let registry = BountyRegistry::new();
//! registry.register_listener(listener(|targets| {
//!     println!("{} targets", targets.len());
//!     Ok(())
//! }));
//!
//! let targets = BountyRegistry::parse("Alice | headshot only\nBob").unwrap();
//! registry.set(targets);
//! assert_eq!(registry.format(None), "Alice | headshot only\nBob");
//! ```

pub mod config;
pub mod error;
pub mod listeners;
pub mod registry;
pub mod storage;
pub mod text;
pub mod types;

pub use config::Config;
pub use error::{BountyError, BountyResult};
pub use listeners::{listener, Listener, ListenerSet};
pub use registry::{default_targets, BountyRegistry};
pub use storage::{persist_listener, BountyRevision, BountyStorage};
pub use text::{format_bounty_targets, parse_bounty_list, BLOOD_TOKEN_TEMPLATE, SEPARATOR};
pub use types::{BountyEntry, BountyList};
