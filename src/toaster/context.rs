// SPDX-License-Identifier: MPL-2.0
//! What a toast's content can see of its own toast.

use super::entry::Toast;
use super::stack::Message;

/// Message and close action for the content of exactly one toast.
///
/// Content receives this instead of the toast, its id, or the store. A
/// detached context (outside any toast) reads an empty message and closes
/// nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToastContext<'a> {
    toast: Option<&'a Toast>,
}

impl<'a> ToastContext<'a> {
    pub(super) fn for_toast(toast: &'a Toast) -> Self {
        Self { toast: Some(toast) }
    }

    /// A context that belongs to no toast.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// The toast's message, or `""` when detached.
    #[must_use]
    pub fn message(&self) -> &'a str {
        self.toast.map_or("", Toast::message)
    }

    /// The message that closes this toast; a no-op when detached.
    #[must_use]
    pub fn close(&self) -> Message {
        Message::Close(self.toast.map(Toast::id))
    }
}
