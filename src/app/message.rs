// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and startup flags for the demo shell.

use crate::toaster;
use crate::ui::add_toast;

/// Messages handled by [`App::update`](super::App::update).
#[derive(Debug, Clone)]
pub enum Message {
    /// Events from the "add toast" control.
    AddToast(add_toast::Message),
    /// Frames and close actions for the toast stack.
    Toaster(toaster::Message),
    /// Remove every toast at once.
    DismissAll,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Toast duration in milliseconds. Overrides `settings.toml`.
    pub duration_ms: Option<u64>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOASTER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
