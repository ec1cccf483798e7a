// SPDX-License-Identifier: MPL-2.0
//! The rendered toast stack.
//!
//! [`Toaster`] follows the provider's collection, keeps one lifecycle
//! [`Controller`] mounted per toast, and renders the stack newest first.

use super::context::ToastContext;
use super::duration::ToastDuration;
use super::effect::{Decay, Surface};
use super::entry::{Toast, ToastId};
use super::lifecycle::{Controller, Phase};
use super::store::{Provider, Snapshot};
use super::ClearToast;
use crate::config::FRAME_INTERVAL;
use crate::error::Result;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing};
use iced::widget::{container, keyed_column, text, Container};
use iced::{alignment, time, Color, Element, Length, Subscription, Theme};
use std::collections::{HashMap, HashSet};
use std::time::Instant;
use tokio::sync::watch;

/// Messages for the toast stack.
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation frame; advances every decay effect.
    Tick(Instant),
    /// Close a toast. `None` closes nothing.
    Close(Option<ToastId>),
}

/// Renders the provider's toasts and drives their lifecycles.
#[derive(Debug)]
pub struct Toaster {
    entries: watch::Receiver<Snapshot>,
    /// Last collection state this stack reconciled with.
    snapshot: Snapshot,
    controllers: HashMap<ToastId, Controller>,
    surface: Surface,
    clear: ClearToast,
    duration: ToastDuration,
    now: Instant,
}

impl Toaster {
    /// Creates a stack following `provider`'s collection.
    #[must_use]
    pub fn new(provider: &Provider, duration: ToastDuration) -> Self {
        let entries = provider.store().subscribe();
        Self {
            entries,
            snapshot: Snapshot::from(Vec::new()),
            controllers: HashMap::new(),
            surface: Surface::new(),
            clear: provider.clear_toast(),
            duration,
            now: Instant::now(),
        }
    }

    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }

    /// Sets the duration for toasts mounted from now on. Toasts already
    /// decaying keep their own timing.
    pub fn set_duration(&mut self, duration: ToastDuration) {
        self.duration = duration;
    }

    /// The surface hosting this stack's decay effects.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Reconciles mounted controllers with the latest collection.
    ///
    /// Controllers of toasts that left the collection are unmounted; new
    /// toasts get a controller started at `now`.
    ///
    /// # Errors
    ///
    /// Returns the first mount failure. A toast that fails to mount is
    /// cleared from the collection; the other toasts are still mounted.
    pub fn sync(&mut self, now: Instant) -> Result<()> {
        self.now = self.now.max(now);
        let snapshot = self.entries.borrow_and_update().clone();
        let live: HashSet<ToastId> = snapshot.iter().map(Toast::id).collect();

        self.controllers.retain(|id, _| live.contains(id));

        let mut outcome = Ok(());
        for toast in snapshot.iter() {
            let id = toast.id();
            if self.controllers.contains_key(&id) {
                continue;
            }
            match Controller::mount(
                id,
                self.duration.as_duration(),
                self.now,
                &self.surface,
                self.clear.clone(),
            ) {
                Ok(controller) => {
                    self.controllers.insert(id, controller);
                }
                Err(err) => {
                    tracing::warn!(?id, %err, "toast could not mount, clearing it");
                    self.clear.clear(id);
                    if outcome.is_ok() {
                        outcome = Err(err);
                    }
                }
            }
        }

        self.snapshot = if outcome.is_ok() {
            snapshot
        } else {
            self.entries.borrow_and_update().clone()
        };
        outcome
    }

    /// Handles a stack message.
    ///
    /// # Errors
    ///
    /// Propagates mount failures from [`Toaster::sync`].
    pub fn update(&mut self, message: Message) -> Result<()> {
        match message {
            Message::Tick(now) => {
                let mounted = self.sync(now);
                for completion in self.surface.advance(self.now) {
                    if let Some(controller) = self.controllers.get_mut(&completion.tag) {
                        if controller.owns(&completion) {
                            controller.on_decay_complete();
                        }
                    }
                }
                let settled = self.sync(self.now);
                mounted.and(settled)
            }
            Message::Close(Some(id)) => {
                self.clear.clear(id);
                self.sync(self.now)
            }
            Message::Close(None) => Ok(()),
        }
    }

    /// Whether any toast is pending or on screen.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.controllers.is_empty() || !self.entries.borrow().is_empty()
    }

    /// Frame ticks while [`Toaster::is_animating`].
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            time::every(FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Rendered toasts, newest first.
    pub fn stack(&self) -> impl Iterator<Item = &Toast> + '_ {
        self.snapshot
            .iter()
            .rev()
            .filter(|toast| self.controllers.contains_key(&toast.id()))
    }

    /// Content contexts of the rendered toasts, newest first.
    pub fn contexts(&self) -> impl Iterator<Item = ToastContext<'_>> + '_ {
        self.stack().map(ToastContext::for_toast)
    }

    /// Lifecycle phase of a mounted toast.
    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<Phase> {
        self.controllers
            .get(&id)
            .map(|controller| controller.phase(self.now))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Renders the stack, building each toast's body with `content`.
    pub fn view<'a, F>(&'a self, content: F) -> Element<'a, Message>
    where
        F: Fn(ToastContext<'a>) -> Element<'a, Message>,
    {
        let cards: Vec<(ToastId, Element<'a, Message>)> = self
            .stack()
            .filter_map(|toast| {
                let controller = self.controllers.get(&toast.id())?;
                let body = content(ToastContext::for_toast(toast));
                Some((toast.id(), card(controller.decay(), self.now, body)))
            })
            .collect();

        if cards.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        Container::new(keyed_column(cards).spacing(spacing::XS))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .padding(spacing::MD)
            .into()
    }
}

/// Wraps a toast body in a card faded and collapsed by its decay.
fn card<'a>(decay: Decay, now: Instant, body: Element<'a, Message>) -> Element<'a, Message> {
    let opacity = decay.opacity(now);

    Container::new(body)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .max_height(sizing::TOAST_MAX_HEIGHT * decay.height_factor(now))
        .padding(spacing::SM)
        .clip(true)
        .style(move |theme: &Theme| toast_container_style(theme, opacity))
        .into()
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, opacity: f32) -> container::Style {
    let palette = theme.extended_palette();
    let fade = |color: Color| Color {
        a: color.a * opacity,
        ..color
    };

    container::Style {
        background: Some(iced::Background::Color(fade(palette.background.base.color))),
        border: iced::Border {
            color: fade(palette.primary.base.color),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: fade(shadow::MD.color),
            ..shadow::MD
        },
        text_color: Some(fade(theme.palette().text)),
        ..Default::default()
    }
}
