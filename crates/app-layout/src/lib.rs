//! Layout primitives for Lumen Kit
//!
//! This crate provides the geometric building blocks and the flow-wrapping
//! layout used by the UI layer. Everything here is a pure computation: hosts
//! measure their items, ask for a layout, and place rendered elements at the
//! returned positions.
//!
//! # Modules
//!
//! - [`geometry`] - Points, sizes and rectangles in logical pixels
//! - [`flow`] - The flow packer that wraps items into lines
//! - [`cache`] - Host-side cache that re-packs only when inputs change
//!
//! # Example
//!
//! ```rust
//! use app_layout::{pack, Point, Size};
//!
//! let items = [Size::new(100.0, 20.0), Size::new(250.0, 20.0)];
//! let layout = pack(&items, 300.0, 8.0);
//!
//! assert_eq!(layout.positions, vec![Point::new(0.0, 0.0), Point::new(0.0, 28.0)]);
//! assert_eq!(layout.total_size, Size::new(300.0, 48.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod flow;
pub mod geometry;

// Re-export commonly used types
pub use cache::FlowLayoutCache;
pub use flow::{pack, FlowConfig, Measurable, PackedLayout, DEFAULT_SPACING};
pub use geometry::{Point, Rect, Size};
