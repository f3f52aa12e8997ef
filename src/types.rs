//! Bounty list data model

use serde::{Deserialize, Serialize};

/// A single Blood Token target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BountyEntry {
    /// Player handle, unique within a list
    pub handle: String,
    /// Kill condition; `None` means any kill counts
    pub requirement: Option<String>,
}

impl BountyEntry {
    pub fn new(handle: impl Into<String>, requirement: Option<String>) -> Self {
        Self {
            handle: handle.into(),
            requirement,
        }
    }
}

/// Handle → requirement mapping that keeps insertion order.
///
/// Inserting a handle that is already present overwrites its requirement
/// and leaves the entry where it was first inserted. Equality compares
/// entries in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BountyList {
    entries: Vec<BountyEntry>,
}

impl BountyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the previous requirement when the handle
    /// was already present.
    pub fn insert(
        &mut self,
        handle: impl Into<String>,
        requirement: Option<String>,
    ) -> Option<Option<String>> {
        let handle = handle.into();
        match self.entries.iter_mut().find(|e| e.handle == handle) {
            Some(existing) => Some(std::mem::replace(&mut existing.requirement, requirement)),
            None => {
                self.entries.push(BountyEntry::new(handle, requirement));
                None
            }
        }
    }

    /// Outer `None` when the handle is absent, inner `None` when it has no requirement.
    pub fn get(&self, handle: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|e| e.handle == handle)
            .map(|e| e.requirement.as_deref())
    }

    pub fn contains(&self, handle: &str) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    pub fn remove(&mut self, handle: &str) -> Option<BountyEntry> {
        let idx = self.entries.iter().position(|e| e.handle == handle)?;
        Some(self.entries.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &BountyEntry> {
        self.entries.iter()
    }

    pub fn handles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.handle.as_str())
    }
}

impl<H: Into<String>> FromIterator<(H, Option<String>)> for BountyList {
    fn from_iter<I: IntoIterator<Item = (H, Option<String>)>>(iter: I) -> Self {
        let mut list = BountyList::new();
        for (handle, requirement) in iter {
            list.insert(handle, requirement);
        }
        list
    }
}

impl FromIterator<BountyEntry> for BountyList {
    fn from_iter<I: IntoIterator<Item = BountyEntry>>(iter: I) -> Self {
        iter.into_iter().map(|e| (e.handle, e.requirement)).collect()
    }
}

impl IntoIterator for BountyList {
    type Item = BountyEntry;
    type IntoIter = std::vec::IntoIter<BountyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a BountyList {
    type Item = &'a BountyEntry;
    type IntoIter = std::slice::Iter<'a, BountyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut list = BountyList::new();
        list.insert("A", None);
        list.insert("B", Some("knife".into()));
        let previous = list.insert("A", Some("railgun".into()));

        assert_eq!(previous, Some(None));
        assert_eq!(list.len(), 2);
        assert_eq!(list.handles().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(list.get("A"), Some(Some("railgun")));
        assert_eq!(list.get("C"), None);
    }

    #[test]
    fn test_remove() {
        let mut list: BountyList = vec![("A", None), ("B", Some("x".to_string()))]
            .into_iter()
            .collect();

        let removed = list.remove("A").unwrap();
        assert_eq!(removed.handle, "A");
        assert!(!list.contains("A"));
        assert!(list.remove("A").is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_serializes_as_entry_array() {
        let list: BountyList = vec![("Alice", Some("headshot only".to_string())), ("Bob", None)]
            .into_iter()
            .collect();

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"handle": "Alice", "requirement": "headshot only"},
                {"handle": "Bob", "requirement": null}
            ])
        );

        let back: BountyList = serde_json::from_value(json).unwrap();
        assert_eq!(back, list);
    }
}
