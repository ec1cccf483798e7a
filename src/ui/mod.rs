// SPDX-License-Identifier: MPL-2.0
//! Widgets and design tokens for the demo shell and the toast stack.

pub mod add_toast;
pub mod design_tokens;
pub mod headline;
