// SPDX-License-Identifier: MPL-2.0
//! Create/clear handles that reach the store without owning it.

use super::entry::{Toast, ToastId};
use super::store::Store;
use std::fmt;
use std::sync::{Arc, Weak};

/// Upgrades an accessor's store reference.
///
/// # Panics
///
/// Panics if the owning [`Provider`](super::Provider) has been dropped: the
/// accessor is being used outside the scope it was obtained from.
#[track_caller]
fn in_scope(store: &Weak<Store>, accessor: &str) -> Arc<Store> {
    match store.upgrade() {
        Some(store) => store,
        None => panic!("{accessor} used outside of its toast provider scope"),
    }
}

/// Appends new toasts to the provider's collection.
#[derive(Clone)]
pub struct CreateToast {
    store: Weak<Store>,
}

impl CreateToast {
    pub(super) fn new(store: Weak<Store>) -> Self {
        Self { store }
    }

    /// Creates a toast showing `message`.
    ///
    /// Every call allocates a fresh identifier.
    ///
    /// # Panics
    ///
    /// Panics if the provider this handle came from no longer exists.
    #[track_caller]
    pub fn create(&self, message: impl Into<String>) {
        let toast = Toast::new(message);
        tracing::debug!(id = ?toast.id(), "creating toast");
        in_scope(&self.store, "CreateToast").append(toast);
    }
}

impl fmt::Debug for CreateToast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateToast")
            .field("in_scope", &(self.store.strong_count() > 0))
            .finish()
    }
}

/// Removes toasts from the provider's collection by id.
#[derive(Clone)]
pub struct ClearToast {
    store: Weak<Store>,
}

impl ClearToast {
    pub(super) fn new(store: Weak<Store>) -> Self {
        Self { store }
    }

    /// Clears the toast with `id`. Clearing an id that is already gone does
    /// nothing.
    ///
    /// # Panics
    ///
    /// Panics if the provider this handle came from no longer exists.
    #[track_caller]
    pub fn clear(&self, id: ToastId) {
        in_scope(&self.store, "ClearToast").remove(id);
    }
}

impl fmt::Debug for ClearToast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClearToast")
            .field("in_scope", &(self.store.strong_count() > 0))
            .finish()
    }
}
