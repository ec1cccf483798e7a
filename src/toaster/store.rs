// SPDX-License-Identifier: MPL-2.0
//! Toast collection ownership.
//!
//! The [`Store`] is the only place the toast collection is mutated. Every
//! mutation publishes a complete new snapshot through a `watch` channel, so
//! observers always see either the state before or the state after a change.
//! The [`Provider`] owns the store and hands out accessors; once it is dropped
//! the scope is over.

use super::accessors::{ClearToast, CreateToast};
use super::entry::{Toast, ToastId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Immutable view of the collection, oldest entry first.
pub type Snapshot = Arc<[Toast]>;

/// Owns the ordered toast collection.
#[derive(Debug)]
pub struct Store {
    entries: watch::Sender<Snapshot>,
    revision: AtomicU64,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        let (entries, _) = watch::channel(Snapshot::from(Vec::new()));
        Self {
            entries,
            revision: AtomicU64::new(0),
        }
    }

    /// Appends a toast to the end of the collection.
    ///
    /// A toast whose id is already present is ignored, which keeps ids unique
    /// even if the same entry is appended twice.
    pub fn append(&self, entry: Toast) {
        let id = entry.id();
        let appended = self.entries.send_if_modified(|current| {
            if current.iter().any(|toast| toast.id() == id) {
                return false;
            }
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(entry);
            *current = next.into();
            true
        });

        if appended {
            self.bump();
            tracing::debug!(?id, "toast appended");
        } else {
            tracing::debug!(?id, "ignored append of an id already present");
        }
    }

    /// Removes the toast with the given id.
    ///
    /// Returns `true` if the toast was found and removed. Removing an absent
    /// id changes nothing and notifies no one.
    pub fn remove(&self, id: ToastId) -> bool {
        let removed = self.entries.send_if_modified(|current| {
            let Some(pos) = current.iter().position(|toast| toast.id() == id) else {
                return false;
            };
            let next: Vec<Toast> = current
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != pos)
                .map(|(_, toast)| toast.clone())
                .collect();
            *current = next.into();
            true
        });

        if removed {
            self.bump();
            tracing::debug!(?id, "toast removed");
        } else {
            tracing::trace!(?id, "stale toast removal ignored");
        }
        removed
    }

    /// Removes every toast. Returns how many were removed.
    pub fn clear(&self) -> usize {
        let mut count = 0;
        self.entries.send_if_modified(|current| {
            count = current.len();
            if count == 0 {
                return false;
            }
            *current = Snapshot::from(Vec::new());
            true
        });

        if count > 0 {
            self.bump();
            tracing::debug!(count, "all toasts dismissed");
        }
        count
    }

    /// Returns the current snapshot of the collection.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.entries.borrow().clone()
    }

    /// Returns a receiver that is notified on every applied mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.entries.subscribe()
    }

    /// Number of mutations applied so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn bump(&self) {
        self.revision.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Establishes the scope in which toast accessors are valid.
///
/// Accessors only hold weak references, so dropping the provider ends the
/// scope for every handle it gave out.
#[derive(Debug, Default)]
pub struct Provider {
    store: Arc<Store>,
}

impl Provider {
    /// Creates a provider with an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle that creates toasts.
    #[must_use]
    pub fn create_toast(&self) -> CreateToast {
        CreateToast::new(Arc::downgrade(&self.store))
    }

    /// Returns a handle that clears toasts by id.
    #[must_use]
    pub fn clear_toast(&self) -> ClearToast {
        ClearToast::new(Arc::downgrade(&self.store))
    }

    /// Dismisses every toast at once.
    pub fn dismiss_all(&self) -> usize {
        self.store.clear()
    }

    /// Returns the current collection, oldest first.
    #[must_use]
    pub fn toasts(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// Returns the underlying store for read access and subscriptions.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(snapshot: &Snapshot) -> Vec<&str> {
        snapshot.iter().map(Toast::message).collect()
    }

    #[test]
    fn new_store_is_empty() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn append_keeps_insertion_order() {
        let store = Store::new();
        store.append(Toast::new("A"));
        store.append(Toast::new("B"));
        store.append(Toast::new("C"));

        assert_eq!(messages(&store.snapshot()), vec!["A", "B", "C"]);
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn append_accepts_empty_and_duplicate_messages() {
        let store = Store::new();
        store.append(Toast::new(""));
        store.append(Toast::new("same"));
        store.append(Toast::new("same"));

        assert_eq!(store.len(), 3);
    }

    #[test]
    fn append_ignores_an_id_already_present() {
        let store = Store::new();
        let toast = Toast::new("once");
        store.append(toast.clone());
        store.append(toast);

        assert_eq!(store.len(), 1);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn remove_deletes_only_the_matching_entry() {
        let store = Store::new();
        let a = Toast::new("A");
        let a_id = a.id();
        store.append(a);
        store.append(Toast::new("B"));

        assert!(store.remove(a_id));
        assert_eq!(messages(&store.snapshot()), vec!["B"]);
    }

    #[test]
    fn remove_absent_id_is_a_noop() {
        let store = Store::new();
        store.append(Toast::new("A"));
        store.append(Toast::new("B"));
        let before = store.snapshot();
        let revision = store.revision();

        assert!(!store.remove(ToastId::new()));
        assert_eq!(store.snapshot(), before);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn clear_removes_all() {
        let store = Store::new();
        for i in 0..5 {
            store.append(Toast::new(format!("test-{i}")));
        }

        assert_eq!(store.clear(), 5);
        assert!(store.is_empty());
        assert_eq!(store.clear(), 0);
        assert_eq!(store.revision(), 6);
    }

    #[test]
    fn old_snapshots_are_not_affected_by_later_mutations() {
        let store = Store::new();
        store.append(Toast::new("A"));
        let before = store.snapshot();

        store.append(Toast::new("B"));
        store.clear();

        assert_eq!(messages(&before), vec!["A"]);
    }

    #[test]
    fn subscribers_are_notified_of_mutations() {
        let store = Store::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.append(Toast::new("A"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);

        store.remove(ToastId::new());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn provider_dismiss_all_empties_the_collection() {
        let provider = Provider::new();
        provider.create_toast().create("A");
        provider.create_toast().create("B");

        assert_eq!(provider.dismiss_all(), 2);
        assert!(provider.toasts().is_empty());
    }
}
