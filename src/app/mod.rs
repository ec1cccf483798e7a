// SPDX-License-Identifier: MPL-2.0
//! Demo shell mounting a toast provider.
//!
//! The `App` owns the [`Provider`] scope, hands a create accessor to the
//! "add toast" control, and renders the [`Toaster`] with a clickable headline
//! as each toast's content.

mod message;
pub mod paths;

pub use message::{Flags, Message};

use crate::config;
use crate::error::Result;
use crate::toaster::{Provider, ToastDuration, Toaster};
use crate::ui::add_toast::AddToast;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::headline;
use iced::widget::{button, column, row, text};
use iced::{Element, Subscription, Task};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

/// Root state of the demo application.
pub struct App {
    provider: Provider,
    toaster: Toaster,
    add_toast: AddToast,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.provider.toasts().len())
            .field("duration", &self.toaster.duration())
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot function; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window_size(iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT))
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the shell from CLI flags and the persisted configuration.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);

        let (config, warning) = config::load();
        if let Some(warning) = warning {
            tracing::warn!(%warning, "falling back to default settings");
        }

        let duration = flags
            .duration_ms
            .map(ToastDuration::new)
            .unwrap_or_else(|| config.toaster.duration());
        tracing::info!(duration_ms = duration.value(), "toaster ready");

        (Self::with_duration(duration), Task::none())
    }

    /// Builds the shell with an explicit toast duration.
    #[must_use]
    pub fn with_duration(duration: ToastDuration) -> Self {
        let provider = Provider::new();
        let toaster = Toaster::new(&provider, duration);
        let add_toast = AddToast::new(provider.create_toast());
        Self {
            provider,
            toaster,
            add_toast,
        }
    }

    pub fn title(&self) -> String {
        String::from("Iced Toaster")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddToast(message) => self.add_toast.update(message),
            Message::Toaster(message) => report(self.toaster.update(message)),
            Message::DismissAll => {
                self.provider.dismiss_all();
            }
        }

        // Mount toasts created by this message right away instead of on the
        // next frame tick.
        report(self.toaster.sync(Instant::now()));
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let controls = row![
            self.add_toast.view().map(Message::AddToast),
            button(text("dismiss all").size(typography::BODY))
                .on_press(Message::DismissAll)
                .padding(spacing::SM),
        ]
        .spacing(spacing::MD);

        let toasts = self.toaster.view(headline::view).map(Message::Toaster);

        column![controls, toasts]
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.toaster.subscription().map(Message::Toaster)
    }

    /// The provider scope owned by this shell.
    #[must_use]
    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    #[must_use]
    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }
}

fn report(result: Result<()>) {
    if let Err(err) = result {
        tracing::error!(%err, "toast lifecycle could not start");
    }
}
