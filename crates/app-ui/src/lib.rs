//! User interface components for Lumen Kit
//!
//! This crate provides the presentational layer: design tokens, colors,
//! component models, and the fade-cut screen router.
//!
//! # Fade-Cut Navigation
//!
//! Switching between visually unrelated screens (an onboarding step and a
//! full scene, say) is done by fading an opaque veil in, swapping the content
//! instantly while it is hidden, and fading the veil back out. See
//! [`navigation`] for the router and [`screens`] for the host view.
//!
//! # Modules
//!
//! - [`animation`] - Easing curves and the veil opacity ramp
//! - [`components`] - Cards, captions, press gesture, backdrop picker
//! - [`config`] - JSON configuration for the whole kit
//! - [`logging`] - Optional `tracing` subscriber setup
//! - [`navigation`] - Fade-cut router and navigator
//! - [`screens`] - Screen builders composed under the veil
//! - [`theme`] - Colors
//! - [`tokens`] - Design tokens (spacing, durations, layers)
//!
//! # Example
//!
//! ```rust
//! use app_ui::{FadeCutConfig, FadeCutView, Screen};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let view = FadeCutView::new(
//!         FadeCutConfig::default(),
//!         |_navigate| "onboarding",
//!         |_navigate| "scene",
//!     )
//!     .unwrap();
//!
//!     let frame = view.render().unwrap();
//!     assert_eq!(frame.screen, Screen::Root);
//!     assert_eq!(frame.content, "onboarding");
//!
//!     view.navigator().navigate(Screen::Overlay);
//!     view.teardown();
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation;
pub mod components;
pub mod config;
pub mod logging;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use animation::{Easing, VeilAnimation};

pub use components::{Backdrop, BackdropPicker, CaptionStyle, Card, PressGesture, PressState};

pub use config::{ConfigError, DevConfig, UiConfig};

pub use navigation::{
    FadeCutConfig, FadeCutRouter, Navigator, RouterError, Screen, ScreenId, TransitionEvent,
    TransitionPhase, TransitionSnapshot,
};

pub use screens::{Composite, FadeCutView, ScreenBuilder, VeilLayer};

pub use theme::{parse_hex_color, Color};

pub use tokens::{duration, spacing, z_index};
