// SPDX-License-Identifier: MPL-2.0
//! Toast entries and their identities.

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a toast.
///
/// Identifiers come from a process-wide counter, so two toasts never share
/// one, even across providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// A single toast in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    message: String,
}

impl Toast {
    /// Creates a toast with a freshly allocated identifier.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
