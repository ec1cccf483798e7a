// SPDX-License-Identifier: MPL-2.0
//! The decay effect and the surface that hosts it.
//!
//! A [`Decay`] is a pure curve over time: the toast holds at full opacity for
//! most of its life, then eases out both opacity and height. The [`Surface`]
//! runs activations of that curve and reports each one's completion exactly
//! once through [`Surface::advance`].
//!
//! Registering interest in a completion and starting the effect are a single
//! step ([`Surface::activate`]), so there is no window in which an effect can
//! finish unobserved. The returned [`Registration`] deregisters on drop.

use super::entry::ToastId;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

/// Fraction of the duration spent at full opacity before fading starts.
pub const HOLD_FRACTION: f32 = 0.8;

/// A time-bounded fade-and-collapse curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decay {
    started_at: Instant,
    duration: Duration,
}

impl Decay {
    /// Starts a decay at `now` lasting `duration`.
    #[must_use]
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started_at: now,
            duration,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether the curve is still in its fading tail.
    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        self.progress(now) > HOLD_FRACTION
    }

    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    /// Opacity in `0.0..=1.0`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        if progress <= HOLD_FRACTION {
            return 1.0;
        }
        let t = (progress - HOLD_FRACTION) / (1.0 - HOLD_FRACTION);
        1.0 - ease_out(t)
    }

    /// Height multiplier; follows the same curve as opacity.
    #[must_use]
    pub fn height_factor(&self, now: Instant) -> f32 {
        self.opacity(now)
    }
}

// Quadratic ease-out.
fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv
}

/// Key of one activation on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverKey(u64);

/// A finished activation, reported once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub key: ObserverKey,
    pub tag: ToastId,
}

#[derive(Debug)]
struct Activation {
    tag: ToastId,
    decay: Decay,
}

#[derive(Debug)]
struct SurfaceState {
    attached: bool,
    next_key: u64,
    activations: HashMap<ObserverKey, Activation>,
    /// Activations cut short by a detach, reported on the next advance.
    interrupted: Vec<Completion>,
}

/// Host for running decay effects.
#[derive(Debug)]
pub struct Surface {
    state: Rc<RefCell<SurfaceState>>,
}

impl Surface {
    /// Creates an attached surface with no activations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(SurfaceState {
                attached: true,
                next_key: 0,
                activations: HashMap::new(),
                interrupted: Vec::new(),
            })),
        }
    }

    /// Starts `decay` and registers a single completion observer tagged with
    /// `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SurfaceUnavailable`] once the surface is detached.
    pub fn activate(&self, tag: ToastId, decay: Decay) -> Result<Registration> {
        let mut state = self.state.borrow_mut();
        if !state.attached {
            return Err(Error::SurfaceUnavailable);
        }

        let key = ObserverKey(state.next_key);
        state.next_key += 1;
        state.activations.insert(key, Activation { tag, decay });

        Ok(Registration {
            key,
            surface: Rc::downgrade(&self.state),
        })
    }

    /// Retires every activation whose decay has finished by `now`, plus any
    /// interrupted by [`Surface::detach`], and returns their completions.
    /// Each activation completes exactly once.
    pub fn advance(&self, now: Instant) -> Vec<Completion> {
        let mut state = self.state.borrow_mut();
        let interrupted = std::mem::take(&mut state.interrupted);
        let finished: Vec<ObserverKey> = state
            .activations
            .iter()
            .filter(|(_, activation)| activation.decay.is_complete(now))
            .map(|(key, _)| *key)
            .collect();

        let mut completions: Vec<Completion> = finished
            .into_iter()
            .filter_map(|key| {
                state
                    .activations
                    .remove(&key)
                    .map(|activation| Completion {
                        key,
                        tag: activation.tag,
                    })
            })
            .collect();
        completions.extend(interrupted);
        completions.sort_by_key(|completion| completion.key.0);
        completions
    }

    /// Detaches the surface from its host.
    ///
    /// Further activations fail. Pending activations stop decaying and
    /// complete on the next [`Surface::advance`], whatever its `now`.
    pub fn detach(&self) {
        let mut state = self.state.borrow_mut();
        state.attached = false;
        let mut cut: Vec<Completion> = state
            .activations
            .drain()
            .map(|(key, activation)| Completion {
                key,
                tag: activation.tag,
            })
            .collect();
        state.interrupted.append(&mut cut);
        tracing::debug!(pending = state.interrupted.len(), "decay surface detached");
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.state.borrow().attached
    }

    /// Number of registered, not yet completed observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        let state = self.state.borrow();
        state.activations.len() + state.interrupted.len()
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

/// Interest in one activation's completion. Dropping it deregisters.
#[derive(Debug)]
pub struct Registration {
    key: ObserverKey,
    surface: Weak<RefCell<SurfaceState>>,
}

impl Registration {
    #[must_use]
    pub fn key(&self) -> ObserverKey {
        self.key
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(state) = self.surface.upgrade() {
            let mut state = state.borrow_mut();
            state.activations.remove(&self.key);
            state.interrupted.retain(|completion| completion.key != self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn decay_holds_full_opacity_until_hold_fraction() {
        let t0 = Instant::now();
        let decay = Decay::start(t0, Duration::from_secs(10));

        assert_eq!(decay.opacity(t0), 1.0);
        assert_eq!(decay.opacity(t0 + Duration::from_secs(8)), 1.0);
        assert!(!decay.is_fading(t0 + Duration::from_secs(8)));
        assert!(decay.is_fading(t0 + Duration::from_secs(9)));
    }

    #[test]
    fn decay_fades_to_zero_at_the_end() {
        let t0 = Instant::now();
        let decay = Decay::start(t0, Duration::from_secs(10));

        let mid_fade = decay.opacity(t0 + Duration::from_secs(9));
        assert!(mid_fade > 0.0 && mid_fade < 1.0);
        assert_eq!(decay.opacity(t0 + Duration::from_secs(10)), 0.0);
        assert_eq!(decay.height_factor(t0 + Duration::from_secs(12)), 0.0);
    }

    #[test]
    fn decay_is_complete_at_or_after_duration() {
        let t0 = Instant::now();
        let decay = Decay::start(t0, SECOND);

        assert!(!decay.is_complete(t0 + Duration::from_millis(999)));
        assert!(decay.is_complete(t0 + SECOND));
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let t0 = Instant::now();
        let decay = Decay::start(t0, Duration::ZERO);
        assert!(decay.is_complete(t0));
        assert_eq!(decay.progress(t0), 1.0);
    }

    #[test]
    fn advance_reports_each_completion_once() {
        let surface = Surface::new();
        let t0 = Instant::now();
        let tag = ToastId::new();
        let registration = surface
            .activate(tag, Decay::start(t0, SECOND))
            .expect("surface is attached");

        assert!(surface.advance(t0).is_empty());

        let completions = surface.advance(t0 + SECOND);
        assert_eq!(
            completions,
            vec![Completion {
                key: registration.key(),
                tag
            }]
        );
        assert!(surface.advance(t0 + SECOND * 2).is_empty());
        assert_eq!(surface.observer_count(), 0);
    }

    #[test]
    fn dropping_registration_deregisters_the_observer() {
        let surface = Surface::new();
        let t0 = Instant::now();
        let registration = surface
            .activate(ToastId::new(), Decay::start(t0, SECOND))
            .expect("surface is attached");
        assert_eq!(surface.observer_count(), 1);

        drop(registration);
        assert_eq!(surface.observer_count(), 0);
        assert!(surface.advance(t0 + SECOND).is_empty());
    }

    #[test]
    fn dropping_registration_after_completion_is_harmless() {
        let surface = Surface::new();
        let t0 = Instant::now();
        let registration = surface
            .activate(ToastId::new(), Decay::start(t0, SECOND))
            .expect("surface is attached");

        assert_eq!(surface.advance(t0 + SECOND).len(), 1);
        drop(registration);
        assert_eq!(surface.observer_count(), 0);
    }

    #[test]
    fn detached_surface_rejects_activation() {
        let surface = Surface::new();
        surface.detach();

        let result = surface.activate(ToastId::new(), Decay::start(Instant::now(), SECOND));
        assert!(matches!(result, Err(Error::SurfaceUnavailable)));
        assert!(!surface.is_attached());
    }

    #[test]
    fn detach_completes_pending_activations_once() {
        let surface = Surface::new();
        let t0 = Instant::now();
        let tag = ToastId::new();
        let registration = surface
            .activate(tag, Decay::start(t0, SECOND * 10))
            .expect("surface is attached");

        surface.detach();
        assert_eq!(surface.observer_count(), 1);

        let completions = surface.advance(t0);
        assert_eq!(
            completions,
            vec![Completion {
                key: registration.key(),
                tag
            }]
        );
        assert!(surface.advance(t0 + SECOND * 20).is_empty());
        assert_eq!(surface.observer_count(), 0);
    }

    #[test]
    fn unmount_after_detach_drops_the_interrupted_completion() {
        let surface = Surface::new();
        let t0 = Instant::now();
        let registration = surface
            .activate(ToastId::new(), Decay::start(t0, SECOND))
            .expect("surface is attached");

        surface.detach();
        drop(registration);

        assert_eq!(surface.observer_count(), 0);
        assert!(surface.advance(t0 + SECOND).is_empty());
    }

    #[test]
    fn registration_outliving_surface_drops_cleanly() {
        let surface = Surface::new();
        let registration = surface
            .activate(ToastId::new(), Decay::start(Instant::now(), SECOND))
            .expect("surface is attached");
        drop(surface);
        drop(registration);
    }

    #[test]
    fn completions_are_reported_in_activation_order() {
        let surface = Surface::new();
        let t0 = Instant::now();
        let first = ToastId::new();
        let second = ToastId::new();
        let _a = surface.activate(first, Decay::start(t0, SECOND)).unwrap();
        let _b = surface.activate(second, Decay::start(t0, SECOND)).unwrap();

        let tags: Vec<ToastId> = surface
            .advance(t0 + SECOND)
            .into_iter()
            .map(|completion| completion.tag)
            .collect();
        assert_eq!(tags, vec![first, second]);
    }
}
