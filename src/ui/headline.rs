// SPDX-License-Identifier: MPL-2.0
//! Toast body: the message as a headline that closes its toast when clicked.

use crate::toaster::{Message, ToastContext};
use crate::ui::design_tokens::typography;
use iced::widget::{mouse_area, text};
use iced::Element;

pub fn view(toast: ToastContext<'_>) -> Element<'_, Message> {
    mouse_area(text(toast.message()).size(typography::TITLE_LG))
        .on_press(toast.close())
        .into()
}
