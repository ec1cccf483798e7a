// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` is a toast notification stack for the Iced GUI framework.
//!
//! Toasts are raised through accessor handles from anywhere below a
//! [`toaster::Provider`], fade out over a configurable duration, and remove
//! themselves once the fade completes.

pub mod app;
pub mod config;
pub mod error;
pub mod toaster;
pub mod ui;
