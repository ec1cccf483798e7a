// SPDX-License-Identifier: MPL-2.0
//! Per-toast lifecycle: mount, decay, removal.

use super::accessors::ClearToast;
use super::effect::{Completion, Decay, Registration, Surface};
use super::entry::ToastId;
use crate::error::Result;
use std::time::{Duration, Instant};

/// Where a mounted toast is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Shown at full strength.
    Visible,
    /// Fading out.
    Decaying,
    /// Decay finished and removal was requested. Terminal.
    Removed,
}

/// Drives one toast from mount to removal.
///
/// The completion observer lives in `registration`; dropping the controller
/// (unmounting it) drops the registration and with it the observer.
#[derive(Debug)]
pub struct Controller {
    id: ToastId,
    decay: Decay,
    registration: Option<Registration>,
    clear: ClearToast,
    removed: bool,
}

impl Controller {
    /// Mounts a controller for `id`, starting its decay at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SurfaceUnavailable`](crate::error::Error::SurfaceUnavailable)
    /// if the surface can no longer host effects. The controller is not
    /// created in that case.
    pub fn mount(
        id: ToastId,
        duration: Duration,
        now: Instant,
        surface: &Surface,
        clear: ClearToast,
    ) -> Result<Self> {
        let decay = Decay::start(now, duration);
        let registration = surface.activate(id, decay)?;
        tracing::debug!(?id, ?duration, "toast mounted");

        Ok(Self {
            id,
            decay,
            registration: Some(registration),
            clear,
            removed: false,
        })
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn decay(&self) -> Decay {
        self.decay
    }

    /// Whether `completion` belongs to this controller's activation.
    #[must_use]
    pub fn owns(&self, completion: &Completion) -> bool {
        completion.tag == self.id
            && self
                .registration
                .as_ref()
                .is_some_and(|registration| registration.key() == completion.key)
    }

    #[must_use]
    pub fn phase(&self, now: Instant) -> Phase {
        if self.removed {
            Phase::Removed
        } else if self.decay.is_fading(now) {
            Phase::Decaying
        } else {
            Phase::Visible
        }
    }

    /// Handles the decay-finished signal.
    ///
    /// The first call clears the toast; later calls do nothing.
    pub fn on_decay_complete(&mut self) {
        if self.removed {
            return;
        }
        self.removed = true;
        self.registration = None;
        tracing::debug!(id = ?self.id, "toast decay complete");
        self.clear.clear(self.id);
    }
}
