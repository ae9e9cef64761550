//! Fade-cut screen host
//!
//! [`FadeCutView`] pairs a [`FadeCutRouter`] with one builder per screen. On
//! every render it builds the active screen and layers the veil on top; the
//! host decides how the resulting [`Composite`] is drawn.

use std::fmt;

use crate::navigation::{FadeCutConfig, FadeCutRouter, Navigator, Result, Screen, ScreenId};
use crate::theme::Color;
use crate::tokens::z_index;

/// Builds the content of a screen, given the callback to navigate away
pub type ScreenBuilder<S, V> = Box<dyn Fn(Navigator<S>) -> V + Send + Sync>;

/// The veil drawn above the active screen
#[derive(Debug, Clone, PartialEq)]
pub struct VeilLayer {
    /// Veil color
    pub color: Color,
    /// Presented opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Layer the veil is drawn on
    pub z_index: i32,
}

impl VeilLayer {
    /// Whether the veil hides everything beneath it
    pub fn is_opaque(&self) -> bool {
        self.opacity >= 1.0
    }

    /// Whether the veil can be skipped when drawing
    pub fn is_clear(&self) -> bool {
        self.opacity <= 0.0
    }
}

/// Active screen content beneath the veil
#[derive(Debug, Clone, PartialEq)]
pub struct Composite<S, V> {
    /// Which screen was built
    pub screen: S,
    /// Built screen content
    pub content: V,
    /// Veil above the content
    pub veil: VeilLayer,
}

/// Router plus the builders for each of its screens
pub struct FadeCutView<S: ScreenId, V> {
    router: FadeCutRouter<S>,
    builders: Vec<(S, ScreenBuilder<S, V>)>,
}

impl<V> FadeCutView<Screen, V> {
    /// Two-screen view with a root and an overlay builder
    pub fn new<R, O>(config: FadeCutConfig, root: R, overlay: O) -> Result<Self>
    where
        R: Fn(Navigator<Screen>) -> V + Send + Sync + 'static,
        O: Fn(Navigator<Screen>) -> V + Send + Sync + 'static,
    {
        let router = FadeCutRouter::new(config)?;
        Ok(Self::with_router(router)
            .screen(Screen::Root, root)
            .screen(Screen::Overlay, overlay))
    }
}

impl<S: ScreenId, V> FadeCutView<S, V> {
    /// View over an existing router with no builders yet
    pub fn with_router(router: FadeCutRouter<S>) -> Self {
        Self {
            router,
            builders: Vec::new(),
        }
    }

    /// Register the builder for `screen`, replacing any previous one
    pub fn screen<F>(mut self, screen: S, builder: F) -> Self
    where
        F: Fn(Navigator<S>) -> V + Send + Sync + 'static,
    {
        self.builders.retain(|(existing, _)| *existing != screen);
        self.builders.push((screen, Box::new(builder)));
        self
    }

    /// The router driving this view
    pub fn router(&self) -> &FadeCutRouter<S> {
        &self.router
    }

    /// Navigation callback, the same one passed to every builder
    pub fn navigator(&self) -> Navigator<S> {
        self.router.navigator()
    }

    /// Build the active screen and the veil above it
    ///
    /// Returns `None` when no builder is registered for the active screen.
    pub fn render(&self) -> Option<Composite<S, V>> {
        let screen = self.router.active_screen();
        let Some((_, builder)) = self.builders.iter().find(|(s, _)| *s == screen) else {
            tracing::warn!(?screen, "No builder registered for active screen");
            return None;
        };

        Some(Composite {
            content: builder(self.router.navigator()),
            veil: VeilLayer {
                color: self.router.config().veil_color.clone(),
                opacity: self.router.veil_opacity(),
                z_index: z_index::VEIL,
            },
            screen,
        })
    }

    /// Tear the view down, cancelling any transition in flight
    ///
    /// Navigators handed out by the view stop working afterwards.
    pub fn teardown(self) {
        self.router.cancel_all();
    }
}

impl<S: ScreenId, V> fmt::Debug for FadeCutView<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let screens: Vec<&S> = self.builders.iter().map(|(s, _)| s).collect();
        f.debug_struct("FadeCutView")
            .field("router", &self.router)
            .field("screens", &screens)
            .finish()
    }
}
