//! Lumen Kit
//!
//! Presentational building blocks for native UI hosts: a flow-wrapping layout
//! and a fade-cut screen router, plus the component models around them.
//!
//! - [`layout`] - Geometry and the flow packer (`app-layout`)
//! - [`ui`] - Tokens, components and fade-cut navigation (`app-ui`)

#![warn(missing_docs)]

pub use app_layout as layout;
pub use app_ui as ui;

pub use app_layout::{
    pack, FlowConfig, FlowLayoutCache, Measurable, PackedLayout, Point, Rect, Size,
};
pub use app_ui::{FadeCutConfig, FadeCutRouter, FadeCutView, Navigator, Screen, UiConfig};
