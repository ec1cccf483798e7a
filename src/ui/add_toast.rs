// SPDX-License-Identifier: MPL-2.0
//! Button that raises a timestamped toast.

use crate::toaster::CreateToast;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, text};
use iced::Element;

#[derive(Debug, Clone)]
pub enum Message {
    Pressed,
}

/// Holds only a create accessor; it never sees the toast collection.
#[derive(Debug, Clone)]
pub struct AddToast {
    create: CreateToast,
}

impl AddToast {
    #[must_use]
    pub fn new(create: CreateToast) -> Self {
        Self { create }
    }

    pub fn update(&self, message: Message) {
        match message {
            Message::Pressed => {
                self.create
                    .create(format!("toast {}", chrono::Utc::now().timestamp_millis()));
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        button(text("add toast").size(typography::TITLE_LG))
            .on_press(Message::Pressed)
            .padding(spacing::MD)
            .into()
    }
}
