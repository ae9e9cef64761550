//! Flow-wrapping layout
//!
//! Items are placed left-to-right and wrap onto a new line when the next item
//! would not fit in the remaining width. The sweep is a single pass over the
//! items, never reorders them, and never fails.
//!
//! # Example
//!
//! ```rust
//! use app_layout::{FlowConfig, Point, Size};
//!
//! let config = FlowConfig::default();
//! let tags = [Size::new(60.0, 24.0), Size::new(80.0, 24.0), Size::new(90.0, 24.0)];
//! let layout = config.pack(&tags, 160.0);
//!
//! assert_eq!(layout.positions[1], Point::new(68.0, 0.0));
//! assert_eq!(layout.positions[2], Point::new(0.0, 32.0));
//! assert_eq!(layout.line_count(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::geometry::{Point, Rect, Size};

/// Default gap between items and between lines (8px)
pub const DEFAULT_SPACING: f32 = 8.0;

// =============================================================================
// Measurable Items
// =============================================================================

/// Anything that knows its intrinsic size before being placed
#[cfg_attr(test, mockall::automock)]
pub trait Measurable {
    /// The size this item wants to occupy
    fn measured_size(&self) -> Size;
}

impl Measurable for Size {
    fn measured_size(&self) -> Size {
        *self
    }
}

impl Measurable for (f32, f32) {
    fn measured_size(&self) -> Size {
        Size::new(self.0, self.1)
    }
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn measured_size(&self) -> Size {
        (**self).measured_size()
    }
}

impl<T: Measurable + ?Sized> Measurable for Box<T> {
    fn measured_size(&self) -> Size {
        (**self).measured_size()
    }
}

// =============================================================================
// Packed Layout
// =============================================================================

/// Result of packing a sequence of items
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PackedLayout {
    /// Top-left position of each item, in input order
    pub positions: Vec<Point>,
    /// Measured size of each item, in input order
    pub sizes: Vec<Size>,
    /// Index of the first item on each line
    pub line_starts: Vec<usize>,
    /// Bounding size: the usable line width by the bottom edge of the last line
    pub total_size: Size,
}

impl PackedLayout {
    /// Number of placed items
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no items were placed
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of lines the items were wrapped into
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Item index ranges for each line, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        let len = self.positions.len();
        self.line_starts.iter().enumerate().map(move |(i, &start)| {
            let end = self.line_starts.get(i + 1).copied().unwrap_or(len);
            start..end
        })
    }

    /// Frame of every item, in input order
    pub fn frames(&self) -> Vec<Rect> {
        self.positions
            .iter()
            .zip(&self.sizes)
            .map(|(&origin, &size)| Rect::new(origin, size))
            .collect()
    }

    /// Frame of a single item
    pub fn frame(&self, index: usize) -> Option<Rect> {
        let origin = *self.positions.get(index)?;
        let size = *self.sizes.get(index)?;
        Some(Rect::new(origin, size))
    }
}

// =============================================================================
// Packing
// =============================================================================

/// Pack items into lines no wider than `max_width`
///
/// An item starts a new line when it is not the first on its line and
/// `x + width + spacing` would exceed `max_width`. The first item on a line is
/// always accepted, so an item wider than `max_width` sits alone at `x = 0`
/// and overflows. A zero, negative or NaN `max_width` counts as zero usable
/// width, which puts every item on its own line. `total_size.width` reports
/// that clamped width rather than the raw argument, so a layout never claims
/// a negative or NaN extent.
///
/// Sizes are not validated: negative dimensions produce meaningless geometry
/// but never panic.
pub fn pack<I: Measurable>(items: &[I], max_width: f32, spacing: f32) -> PackedLayout {
    let max_width = max_width.max(0.0);

    let mut positions = Vec::with_capacity(items.len());
    let mut sizes = Vec::with_capacity(items.len());
    let mut line_starts = Vec::new();

    let mut x = 0.0_f32;
    let mut y = 0.0_f32;
    let mut line_height = 0.0_f32;

    for (index, item) in items.iter().enumerate() {
        let size = item.measured_size();

        if x > 0.0 && x + size.width + spacing > max_width {
            y += line_height + spacing;
            x = 0.0;
            line_height = 0.0;
            line_starts.push(index);
        } else if index == 0 {
            line_starts.push(0);
        }

        positions.push(Point::new(x, y));
        sizes.push(size);

        line_height = line_height.max(size.height);
        x += size.width + spacing;
    }

    let layout = PackedLayout {
        positions,
        sizes,
        line_starts,
        total_size: Size::new(max_width, y + line_height),
    };

    tracing::trace!(
        items = layout.len(),
        lines = layout.line_count(),
        height = layout.total_size.height,
        "Packed flow layout"
    );

    layout
}

/// Flow layout configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowConfig {
    /// Gap between items on a line and between lines
    #[serde(default = "default_spacing")]
    pub spacing: f32,
}

fn default_spacing() -> f32 {
    DEFAULT_SPACING
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
        }
    }
}

impl FlowConfig {
    /// Create a configuration with custom spacing
    pub fn new(spacing: f32) -> Self {
        Self { spacing }
    }

    /// Pack items using this configuration
    pub fn pack<I: Measurable>(&self, items: &[I], max_width: f32) -> PackedLayout {
        pack(items, max_width, self.spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(width: f32, height: f32) -> Size {
        Size::new(width, height)
    }

    #[test]
    fn test_empty_input() {
        let layout = pack::<Size>(&[], 300.0, 8.0);
        assert!(layout.positions.is_empty());
        assert_eq!(layout.total_size, Size::new(300.0, 0.0));
        assert_eq!(layout.line_count(), 0);
    }

    #[test]
    fn test_single_oversized_item() {
        let layout = pack(&[item(400.0, 50.0)], 300.0, 8.0);
        assert_eq!(layout.positions, vec![Point::new(0.0, 0.0)]);
        assert_eq!(layout.total_size.height, 50.0);
        assert_eq!(layout.total_size.width, 300.0);
    }

    #[test]
    fn test_wrap_trigger() {
        let layout = pack(&[item(100.0, 20.0), item(250.0, 20.0)], 300.0, 8.0);
        assert_eq!(
            layout.positions,
            vec![Point::new(0.0, 0.0), Point::new(0.0, 28.0)]
        );
        assert_eq!(layout.total_size, Size::new(300.0, 48.0));
        assert_eq!(layout.line_count(), 2);
    }

    #[test]
    fn test_items_share_a_line_when_they_fit() {
        let layout = pack(
            &[item(100.0, 20.0), item(100.0, 30.0), item(50.0, 10.0)],
            300.0,
            8.0,
        );
        assert_eq!(
            layout.positions,
            vec![
                Point::new(0.0, 0.0),
                Point::new(108.0, 0.0),
                Point::new(216.0, 0.0),
            ]
        );
        // Line height is the tallest item on the line
        assert_eq!(layout.total_size.height, 30.0);
        assert_eq!(layout.line_count(), 1);
    }

    #[test]
    fn test_exact_fit_still_wraps_because_of_spacing() {
        // 108 + 192 = 300 fits without spacing, but the spacing term pushes it over
        let layout = pack(&[item(100.0, 10.0), item(192.0, 10.0)], 300.0, 8.0);
        assert_eq!(layout.positions[1], Point::new(0.0, 18.0));

        let layout = pack(&[item(100.0, 10.0), item(184.0, 10.0)], 300.0, 8.0);
        assert_eq!(layout.positions[1], Point::new(108.0, 0.0));
    }

    #[test]
    fn test_line_height_resets_after_wrap() {
        let layout = pack(
            &[item(200.0, 60.0), item(200.0, 10.0), item(200.0, 20.0)],
            300.0,
            10.0,
        );
        assert_eq!(layout.positions[1], Point::new(0.0, 70.0));
        assert_eq!(layout.positions[2], Point::new(0.0, 90.0));
        assert_eq!(layout.total_size.height, 110.0);
    }

    #[test]
    fn test_zero_and_negative_width_wrap_every_item() {
        for max_width in [0.0, -50.0, f32::NAN] {
            let items = [item(10.0, 10.0), item(10.0, 10.0), item(10.0, 10.0)];
            let layout = pack(&items, max_width, 8.0);
            assert_eq!(
                layout.positions,
                vec![
                    Point::new(0.0, 0.0),
                    Point::new(0.0, 18.0),
                    Point::new(0.0, 36.0),
                ]
            );
            assert_eq!(layout.total_size, Size::new(0.0, 46.0));
        }
    }

    #[test]
    fn test_no_trailing_spacing() {
        let layout = pack(&[item(50.0, 10.0), item(50.0, 10.0)], 100.0, 8.0);
        // Two lines of 10 with a single gap between them
        assert_eq!(layout.total_size.height, 28.0);
    }

    #[test]
    fn test_negative_sizes_do_not_panic() {
        let layout = pack(
            &[item(-20.0, -5.0), item(30.0, 10.0), item(f32::NAN, 1.0)],
            100.0,
            8.0,
        );
        assert_eq!(layout.len(), 3);
    }

    #[test]
    fn test_lines_and_frames() {
        let layout = pack(
            &[item(100.0, 20.0), item(100.0, 20.0), item(250.0, 40.0), item(10.0, 5.0)],
            300.0,
            8.0,
        );
        let lines: Vec<_> = layout.lines().collect();
        assert_eq!(lines, vec![0..2, 2..4]);

        let frames = layout.frames();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[2], Rect::new(Point::new(0.0, 28.0), Size::new(250.0, 40.0)));
        assert_eq!(layout.frame(3), Some(frames[3]));
        assert_eq!(layout.frame(4), None);
    }

    #[test]
    fn test_each_item_measured_once() {
        let mut first = MockMeasurable::new();
        first
            .expect_measured_size()
            .times(1)
            .return_const(Size::new(120.0, 30.0));

        let mut second = MockMeasurable::new();
        second
            .expect_measured_size()
            .times(1)
            .return_const(Size::new(200.0, 40.0));

        let layout = pack(&[first, second], 300.0, 8.0);
        assert_eq!(layout.positions[1], Point::new(0.0, 38.0));
        assert_eq!(layout.total_size.height, 78.0);
    }

    #[test]
    fn test_tuple_and_boxed_items() {
        let tuples = [(40.0_f32, 10.0_f32), (40.0, 10.0)];
        let boxed: Vec<Box<dyn Measurable>> = vec![
            Box::new(Size::new(40.0, 10.0)),
            Box::new((40.0_f32, 10.0_f32)),
        ];

        assert_eq!(pack(&tuples, 100.0, 8.0), pack(&boxed, 100.0, 8.0));
    }

    #[test]
    fn test_flow_config_defaults() {
        let config = FlowConfig::default();
        assert_eq!(config.spacing, 8.0);

        let parsed: FlowConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, config);

        let parsed: FlowConfig = serde_json::from_str(r#"{"spacing": 12.0}"#).unwrap();
        assert_eq!(parsed.spacing, 12.0);
    }
}
