// SPDX-License-Identifier: MPL-2.0
//! Toast notification lifecycle.
//!
//! Toasts are short messages that appear in a stack, fade out, and remove
//! themselves once their fade has finished. Any component holding an accessor
//! can raise or clear one without a reference to the collection itself.
//!
//! # Components
//!
//! - [`store`]: the [`Store`] owning the collection and the [`Provider`] scope
//! - [`accessors`]: [`CreateToast`] and [`ClearToast`] handles
//! - [`effect`]: the [`Decay`] curve and the [`Surface`] that reports completions
//! - [`lifecycle`]: one [`Controller`] per mounted toast
//! - [`stack`]: the [`Toaster`] that mounts controllers and renders the stack
//! - [`context`]: what a toast's content sees of its toast
//!
//! # Usage
//!
//! ```ignore
//! use iced_toaster::toaster::{Provider, ToastDuration, Toaster};
//!
//! let provider = Provider::new();
//! let mut toaster = Toaster::new(&provider, ToastDuration::default());
//!
//! // Anywhere below the provider
//! let create = provider.create_toast();
//! create.create("Image saved");
//!
//! // In update and view
//! toaster.sync(Instant::now())?;
//! let overlay = toaster
//!     .view(|toast| text(toast.message()).into())
//!     .map(Message::Toaster);
//! ```

pub mod accessors;
pub mod context;
mod duration;
pub mod effect;
mod entry;
pub mod lifecycle;
pub mod stack;
pub mod store;

pub use accessors::{ClearToast, CreateToast};
pub use context::ToastContext;
pub use duration::ToastDuration;
pub use effect::{Decay, Surface};
pub use entry::{Toast, ToastId};
pub use lifecycle::{Controller, Phase};
pub use stack::{Message, Toaster};
pub use store::{Provider, Snapshot, Store};
