// SPDX-License-Identifier: MPL-2.0
//! Toast display duration domain type.
//!
//! This module provides a type-safe wrapper for the time a toast takes from
//! appearing to finishing its decay, in milliseconds.

use crate::config::{DEFAULT_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS, MIN_TOAST_DURATION_MS};
use std::time::Duration;

/// Toast decay duration in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (100 ms – 60 s).
///
/// # Example
///
/// ```
/// use iced_toaster::toaster::ToastDuration;
///
/// let duration = ToastDuration::new(6_000);
/// assert_eq!(duration.value(), 6_000);
///
/// // Values outside range are clamped
/// let too_long = ToastDuration::new(600_000);
/// assert_eq!(too_long.value(), 60_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDuration(u64);

impl ToastDuration {
    /// Creates a new duration, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(DEFAULT_TOAST_DURATION_MS)
    }
}

impl From<Duration> for ToastDuration {
    fn from(duration: Duration) -> Self {
        Self::new(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(ToastDuration::new(0).value(), MIN_TOAST_DURATION_MS);
        assert_eq!(ToastDuration::new(u64::MAX).value(), MAX_TOAST_DURATION_MS);
    }

    #[test]
    fn default_is_five_seconds() {
        assert_eq!(
            ToastDuration::default().as_duration(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn from_duration_converts_to_millis() {
        let duration = ToastDuration::from(Duration::from_secs(6));
        assert_eq!(duration.value(), 6_000);
    }
}
