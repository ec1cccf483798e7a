// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.

use std::time::Duration;

// ==========================================================================
// Toast Duration Defaults
// ==========================================================================

/// Default time from a toast appearing to finishing its decay (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5_000;

/// Duration the demo shell's settings start with when `duration_ms` is unset
/// (in milliseconds).
pub const DEFAULT_SETTINGS_DURATION_MS: u64 = 6_000;

/// Minimum toast duration (in milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = 100;

/// Maximum toast duration (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval between animation frames while toasts are on screen (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const _: () = {
    assert!(MIN_TOAST_DURATION_MS <= DEFAULT_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(MIN_TOAST_DURATION_MS <= DEFAULT_SETTINGS_DURATION_MS);
    assert!(DEFAULT_SETTINGS_DURATION_MS <= MAX_TOAST_DURATION_MS);
};
