//! Fade-cut navigation for Lumen Kit
//!
//! This module provides the screen router that hides a content swap behind an
//! opaque veil:
//! - Fade the veil in over `fade_duration`
//! - Swap the active screen instantly while the veil is fully opaque
//! - Fade the veil back out over `fade_duration`
//!
//! The two timed waits run on a spawned Tokio task owned by the router. The
//! router keeps at most one such task, cancels it on teardown, and re-checks a
//! generation counter under its state lock before every deferred mutation, so
//! a cancelled task can never touch state again.
//!
//! Hosts observe the router explicitly: poll [`FadeCutRouter::snapshot`],
//! watch [`FadeCutRouter::subscribe`], or listen to
//! [`FadeCutRouter::subscribe_events`].

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::animation::{Easing, VeilAnimation};
use crate::theme::{default_veil_color, Color};
use crate::tokens::{duration, duration_of};

/// Veil opacity at which the screen swap is hidden
pub const OPAQUE: f32 = 1.0;

/// Veil opacity at rest
pub const CLEAR: f32 = 0.0;

/// Longest fade a loaded config may ask for
pub const MAX_FADE_DURATION: Duration = Duration::from_secs(60);

/// Stand-in deadline for waits too long to represent as an instant
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// `from + wait`, saturating instead of overflowing
fn deadline_after(from: Instant, wait: Duration) -> Instant {
    from.checked_add(wait)
        .or_else(|| from.checked_add(FAR_FUTURE))
        .unwrap_or(from)
}

// =============================================================================
// Errors
// =============================================================================

/// Router construction errors
#[derive(Debug, Error)]
pub enum RouterError {
    /// No Tokio runtime to drive transitions on
    #[error("Fade-cut router requires a Tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

/// Result type for router operations
pub type Result<T> = std::result::Result<T, RouterError>;

// =============================================================================
// Screens and Phases
// =============================================================================

/// Screens a fade-cut router switches between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// The screen shown first
    #[default]
    Root,
    /// The screen presented over the root
    Overlay,
}

impl Screen {
    /// Get all screens
    pub fn all() -> [Screen; 2] {
        [Screen::Root, Screen::Overlay]
    }

    /// Stable name of the screen
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Root => "root",
            Screen::Overlay => "overlay",
        }
    }

    /// The other screen
    pub fn toggled(&self) -> Screen {
        match self {
            Screen::Root => Screen::Overlay,
            Screen::Overlay => Screen::Root,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything usable as a screen tag
pub trait ScreenId: Clone + Eq + fmt::Debug + Send + Sync + 'static {}

impl<T> ScreenId for T where T: Clone + Eq + fmt::Debug + Send + Sync + 'static {}

/// Phase of a fade-cut transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitionPhase {
    /// No transition in flight
    #[default]
    Idle,
    /// Veil ramping up to opaque
    FadingOut,
    /// Content being replaced behind the opaque veil
    Swapping,
    /// Veil ramping back down to clear
    FadingIn,
}

// =============================================================================
// Configuration
// =============================================================================

/// Fade-cut transition configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FadeCutConfig {
    /// Duration of each fade phase, in seconds when serialized
    #[serde(with = "duration_secs", default = "default_fade_duration")]
    pub fade_duration: Duration,
    /// Color of the veil masking the swap
    #[serde(default = "default_veil_color")]
    pub veil_color: Color,
    /// Easing of both fade phases
    #[serde(default)]
    pub easing: Easing,
}

fn default_fade_duration() -> Duration {
    duration_of(duration::FADE_CUT)
}

impl Default for FadeCutConfig {
    fn default() -> Self {
        Self {
            fade_duration: default_fade_duration(),
            veil_color: default_veil_color(),
            easing: Easing::default(),
        }
    }
}

impl FadeCutConfig {
    /// Set the duration of each fade phase
    pub fn fade_duration(mut self, fade_duration: Duration) -> Self {
        self.fade_duration = fade_duration;
        self
    }

    /// Set the veil color
    pub fn veil_color(mut self, color: impl Into<Color>) -> Self {
        self.veil_color = color.into();
        self
    }

    /// Set the easing of both fade phases
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Wall time of a full transition (fade out plus fade in)
    pub fn total_duration(&self) -> Duration {
        self.fade_duration.saturating_mul(2)
    }
}

mod duration_secs {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<Ser>(value: &Duration, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, De>(deserializer: De) -> Result<Duration, De::Error>
    where
        De: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            de::Error::custom(format!(
                "invalid fade duration {}: expected a finite, non-negative number of seconds",
                secs
            ))
        })
    }
}

// =============================================================================
// Observation
// =============================================================================

/// Point-in-time view of the router state
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionSnapshot<S> {
    /// Screen currently shown
    pub active_screen: S,
    /// Current phase
    pub phase: TransitionPhase,
    /// Veil opacity the current ramp is heading towards
    pub veil_target: f32,
    /// Whether a transition task is pending
    pub is_transitioning: bool,
}

/// Events broadcast as a transition progresses
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionEvent<S> {
    /// Fade-out began
    Started {
        /// Screen being left
        from: S,
        /// Screen being entered
        to: S,
    },
    /// Active screen replaced behind the veil
    Swapped {
        /// New active screen
        to: S,
        /// Presented veil opacity at the instant of the swap
        veil_opacity: f32,
    },
    /// Fade-in finished and the router is idle again
    Completed {
        /// Screen now shown
        screen: S,
    },
    /// A pending transition was cancelled before finishing
    Cancelled {
        /// Screen shown when the cancellation happened
        screen: S,
    },
}

// =============================================================================
// Router State
// =============================================================================

/// The single in-flight transition task
#[derive(Debug)]
struct PendingTransition {
    generation: u64,
    handle: JoinHandle<()>,
}

impl PendingTransition {
    fn cancel(self) {
        tracing::trace!(generation = self.generation, "Aborting transition task");
        self.handle.abort();
    }
}

#[derive(Debug)]
struct RouterState<S> {
    active_screen: S,
    phase: TransitionPhase,
    veil: VeilAnimation,
    pending: Option<PendingTransition>,
    generation: u64,
    torn_down: bool,
}

impl<S: ScreenId> RouterState<S> {
    fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether a deferred step from `generation` may still mutate state
    fn is_current(&self, generation: u64) -> bool {
        self.generation == generation && self.is_transitioning()
    }

    fn snapshot(&self) -> TransitionSnapshot<S> {
        TransitionSnapshot {
            active_screen: self.active_screen.clone(),
            phase: self.phase,
            veil_target: self.veil.target(),
            is_transitioning: self.is_transitioning(),
        }
    }
}

struct Shared<S> {
    config: FadeCutConfig,
    runtime: Handle,
    state: Mutex<RouterState<S>>,
    snapshot_tx: watch::Sender<TransitionSnapshot<S>>,
    events_tx: broadcast::Sender<TransitionEvent<S>>,
}

impl<S: ScreenId> Shared<S> {
    fn publish(&self, state: &RouterState<S>) {
        self.snapshot_tx.send_replace(state.snapshot());
    }

    fn emit(&self, event: TransitionEvent<S>) {
        // No subscribers is fine
        let _ = self.events_tx.send(event);
    }

    fn request(self: &Arc<Self>, to: S) -> bool {
        let mut state = self.state.lock();

        if state.torn_down {
            tracing::debug!(target_screen = ?to, "Router torn down, ignoring request");
            return false;
        }
        if state.is_transitioning() {
            tracing::debug!(target_screen = ?to, "Transition already in flight, ignoring request");
            return false;
        }
        if state.active_screen == to {
            tracing::debug!(target_screen = ?to, "Already on requested screen, ignoring request");
            return false;
        }

        let fade = self.config.fade_duration;
        state.generation += 1;
        let generation = state.generation;
        let from = state.active_screen.clone();

        state.phase = TransitionPhase::FadingOut;
        state.veil.retarget(OPAQUE, fade, self.config.easing);

        let swap_at = deadline_after(Instant::now(), fade);
        let task = drive_transition(Arc::downgrade(self), generation, to.clone(), swap_at);
        let handle = self.runtime.spawn(task);

        debug_assert!(state.pending.is_none());
        state.pending = Some(PendingTransition { generation, handle });

        tracing::debug!(?from, ?to, generation, "Fade-cut transition started");
        self.publish(&state);
        self.emit(TransitionEvent::Started { from, to });
        true
    }

    /// Replace the active screen; returns false if the transition is stale
    fn swap(&self, generation: u64, to: &S) -> bool {
        let mut state = self.state.lock();
        if !state.is_current(generation) {
            return false;
        }

        state.phase = TransitionPhase::Swapping;
        let veil_opacity = state.veil.value();
        debug_assert_eq!(state.veil.target(), OPAQUE);
        state.active_screen = to.clone();

        state.phase = TransitionPhase::FadingIn;
        state
            .veil
            .retarget(CLEAR, self.config.fade_duration, self.config.easing);

        tracing::debug!(?to, generation, veil_opacity, "Screen swapped behind veil");
        self.publish(&state);
        self.emit(TransitionEvent::Swapped {
            to: to.clone(),
            veil_opacity,
        });
        true
    }

    fn complete(&self, generation: u64) {
        let mut state = self.state.lock();
        if !state.is_current(generation) {
            return;
        }

        // Dropping our own handle detaches it; the task is about to return
        state.pending = None;
        state.phase = TransitionPhase::Idle;

        tracing::debug!(screen = ?state.active_screen, generation, "Fade-cut transition completed");
        self.publish(&state);
        self.emit(TransitionEvent::Completed {
            screen: state.active_screen.clone(),
        });
    }

    /// Cancel and refuse every later request
    fn teardown(&self) {
        self.state.lock().torn_down = true;
        self.cancel_all();
    }

    fn cancel_all(&self) -> bool {
        let mut state = self.state.lock();
        state.generation += 1;

        let Some(pending) = state.pending.take() else {
            return false;
        };
        pending.cancel();
        state.phase = TransitionPhase::Idle;
        state.veil.freeze();

        tracing::debug!(screen = ?state.active_screen, "Fade-cut transition cancelled");
        self.publish(&state);
        self.emit(TransitionEvent::Cancelled {
            screen: state.active_screen.clone(),
        });
        true
    }
}

/// Fade out, swap, fade in
///
/// Holds the router weakly so an aborted task that has not been polled yet
/// never keeps a dropped router reachable.
async fn drive_transition<S: ScreenId>(
    shared: Weak<Shared<S>>,
    generation: u64,
    to: S,
    swap_at: Instant,
) {
    tokio::time::sleep_until(swap_at).await;
    let settle_at = {
        let Some(shared) = shared.upgrade() else {
            return;
        };
        if !shared.swap(generation, &to) {
            return;
        }
        deadline_after(Instant::now(), shared.config.fade_duration)
    };

    tokio::time::sleep_until(settle_at).await;
    if let Some(shared) = shared.upgrade() {
        shared.complete(generation);
    }
}

// =============================================================================
// Router
// =============================================================================

/// Screen router that swaps content behind an opaque veil
///
/// # Example
///
/// ```rust
/// use app_ui::navigation::{FadeCutConfig, FadeCutRouter, Screen};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let router = FadeCutRouter::new(FadeCutConfig::default()).unwrap();
///
///     assert!(router.request_transition(Screen::Overlay));
///     // A second request while busy is ignored
///     assert!(!router.request_transition(Screen::Overlay));
///
///     router.cancel_all();
///     assert!(!router.is_transitioning());
/// }
/// ```
pub struct FadeCutRouter<S: ScreenId = Screen> {
    shared: Arc<Shared<S>>,
}

impl FadeCutRouter<Screen> {
    /// Create a router starting on [`Screen::Root`]
    ///
    /// Must be called from within a Tokio runtime; transitions are driven on it.
    pub fn new(config: FadeCutConfig) -> Result<Self> {
        Self::with_initial_screen(config, Screen::Root)
    }
}

impl<S: ScreenId> FadeCutRouter<S> {
    /// Create a router starting on `initial`
    pub fn with_initial_screen(config: FadeCutConfig, initial: S) -> Result<Self> {
        let runtime = Handle::try_current()?;

        let state = RouterState {
            active_screen: initial,
            phase: TransitionPhase::Idle,
            veil: VeilAnimation::settled(CLEAR),
            pending: None,
            generation: 0,
            torn_down: false,
        };
        let (snapshot_tx, _) = watch::channel(state.snapshot());
        let (events_tx, _) = broadcast::channel(16);

        Ok(Self {
            shared: Arc::new(Shared {
                config,
                runtime,
                state: Mutex::new(state),
                snapshot_tx,
                events_tx,
            }),
        })
    }

    /// Router configuration
    pub fn config(&self) -> &FadeCutConfig {
        &self.shared.config
    }

    /// Start a transition to `to`
    ///
    /// Returns `false` without changing anything when a transition is already
    /// in flight or `to` is the active screen.
    pub fn request_transition(&self, to: S) -> bool {
        self.shared.request(to)
    }

    /// Cancel the in-flight transition, if any
    ///
    /// The veil stops where it is and the active screen is left as is. Returns
    /// whether a transition was cancelled.
    pub fn cancel_all(&self) -> bool {
        self.shared.cancel_all()
    }

    /// Screen currently shown
    pub fn active_screen(&self) -> S {
        self.shared.state.lock().active_screen.clone()
    }

    /// Current transition phase
    pub fn phase(&self) -> TransitionPhase {
        self.shared.state.lock().phase
    }

    /// Whether a transition is in flight
    pub fn is_transitioning(&self) -> bool {
        self.shared.state.lock().is_transitioning()
    }

    /// Presented veil opacity right now
    pub fn veil_opacity(&self) -> f32 {
        self.shared.state.lock().veil.value()
    }

    /// Veil opacity the current ramp is heading towards
    pub fn veil_target(&self) -> f32 {
        self.shared.state.lock().veil.target()
    }

    /// Current state
    pub fn snapshot(&self) -> TransitionSnapshot<S> {
        self.shared.state.lock().snapshot()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<TransitionSnapshot<S>> {
        self.shared.snapshot_tx.subscribe()
    }

    /// Subscribe to transition events
    pub fn subscribe_events(&self) -> broadcast::Receiver<TransitionEvent<S>> {
        self.shared.events_tx.subscribe()
    }

    /// Navigation callback handed to screen builders
    pub fn navigator(&self) -> Navigator<S> {
        Navigator {
            shared: Arc::downgrade(&self.shared),
        }
    }
}

impl<S: ScreenId> fmt::Debug for FadeCutRouter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FadeCutRouter")
            .field("config", &self.shared.config)
            .field("state", &self.snapshot())
            .finish()
    }
}

impl<S: ScreenId> Drop for FadeCutRouter<S> {
    fn drop(&mut self) {
        self.shared.teardown();
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// Cloneable `navigate(to)` callback
///
/// Holds only a weak reference, so screens keeping a navigator do not keep the
/// router alive. Navigating after the router is gone does nothing.
pub struct Navigator<S: ScreenId = Screen> {
    shared: Weak<Shared<S>>,
}

impl<S: ScreenId> Navigator<S> {
    /// Request a transition to `to`; returns whether it started
    pub fn navigate(&self, to: S) -> bool {
        match self.shared.upgrade() {
            Some(shared) => shared.request(to),
            None => {
                tracing::trace!(target_screen = ?to, "Navigator outlived its router");
                false
            }
        }
    }

    /// Whether the router behind this navigator still exists
    pub fn is_attached(&self) -> bool {
        self.shared.strong_count() > 0
    }
}

impl<S: ScreenId> Clone for Navigator<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<S: ScreenId> fmt::Debug for Navigator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("attached", &self.is_attached())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
