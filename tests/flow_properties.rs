//! Property-based invariant tests for the flow packer.
//!
//! 1. Items sharing a line never overlap horizontally.
//! 2. Output order follows input order, also for reversed input.
//! 3. Packing identical input twice yields identical layouts.
//! 4. Every item that does not start a line ends inside the line width.
//! 5. The total height is the bottom edge of the lowest item.
//! 6. Lines read left-to-right, top-to-bottom.

use lumen_kit::{pack, FlowLayoutCache, Point, Size};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn size_strategy() -> impl Strategy<Value = Size> {
    (1.0f32..400.0, 1.0f32..200.0).prop_map(|(w, h)| Size::new(w, h))
}

fn items_strategy() -> impl Strategy<Value = Vec<Size>> {
    prop::collection::vec(size_strategy(), 0..40)
}

fn width_strategy() -> impl Strategy<Value = f32> {
    0.0f32..800.0
}

fn spacing_strategy() -> impl Strategy<Value = f32> {
    0.0f32..24.0
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn items_on_a_line_do_not_overlap(
        items in items_strategy(),
        max_width in width_strategy(),
        spacing in spacing_strategy(),
    ) {
        let layout = pack(&items, max_width, spacing);
        let frames = layout.frames();

        for (i, a) in frames.iter().enumerate() {
            for b in frames.iter().skip(i + 1) {
                if a.origin.y == b.origin.y {
                    prop_assert!(
                        !a.intersects_horizontally(b),
                        "overlap on line y={}: {:?} vs {:?}",
                        a.origin.y, a, b
                    );
                }
            }
        }
    }

    #[test]
    fn order_is_preserved(
        items in items_strategy(),
        max_width in width_strategy(),
        spacing in spacing_strategy(),
    ) {
        let layout = pack(&items, max_width, spacing);
        prop_assert_eq!(layout.positions.len(), items.len());
        prop_assert_eq!(&layout.sizes, &items);

        let reversed: Vec<Size> = items.iter().rev().copied().collect();
        let reversed_layout = pack(&reversed, max_width, spacing);
        prop_assert_eq!(&reversed_layout.sizes, &reversed);
    }

    #[test]
    fn packing_is_idempotent(
        items in items_strategy(),
        max_width in width_strategy(),
        spacing in spacing_strategy(),
    ) {
        prop_assert_eq!(pack(&items, max_width, spacing), pack(&items, max_width, spacing));
    }

    #[test]
    fn only_line_starts_may_overflow(
        items in items_strategy(),
        max_width in width_strategy(),
        spacing in spacing_strategy(),
    ) {
        let layout = pack(&items, max_width, spacing);
        prop_assert_eq!(layout.total_size.width, max_width);

        for frame in layout.frames() {
            if frame.origin.x > 0.0 {
                prop_assert!(
                    frame.max_x() + spacing <= max_width,
                    "{:?} overflows width {}",
                    frame, max_width
                );
            } else {
                prop_assert_eq!(frame.origin.x, 0.0);
            }
        }
    }

    #[test]
    fn total_height_is_lowest_bottom_edge(
        items in items_strategy(),
        max_width in width_strategy(),
        spacing in spacing_strategy(),
    ) {
        let layout = pack(&items, max_width, spacing);
        let lowest = layout
            .frames()
            .iter()
            .map(|frame| frame.max_y())
            .fold(0.0f32, f32::max);

        prop_assert_eq!(layout.total_size.height, lowest);
    }

    #[test]
    fn lines_read_in_order(
        items in items_strategy(),
        max_width in width_strategy(),
        spacing in spacing_strategy(),
    ) {
        let layout = pack(&items, max_width, spacing);

        for pair in layout.positions.windows(2) {
            let (a, b): (Point, Point) = (pair[0], pair[1]);
            prop_assert!(
                (b.y == a.y && b.x > a.x) || (b.y > a.y && b.x == 0.0),
                "{:?} does not follow {:?}",
                b, a
            );
        }

        let starts: usize = layout.lines().map(|line| line.len()).sum();
        prop_assert_eq!(starts, items.len());
    }

    #[test]
    fn cache_matches_direct_packing(
        items in items_strategy(),
        max_width in width_strategy(),
    ) {
        let mut cache = FlowLayoutCache::default();
        let cached = cache.layout(&items, max_width).clone();
        prop_assert_eq!(cached, pack(&items, max_width, 8.0));
    }
}

// ── Examples ────────────────────────────────────────────────────────────

#[test]
fn documented_examples() {
    let empty = pack::<Size>(&[], 300.0, 8.0);
    assert!(empty.positions.is_empty());
    assert_eq!(empty.total_size, Size::new(300.0, 0.0));

    let oversized = pack(&[Size::new(400.0, 50.0)], 300.0, 8.0);
    assert_eq!(oversized.positions, vec![Point::new(0.0, 0.0)]);
    assert_eq!(oversized.total_size.height, 50.0);

    let wrapped = pack(&[Size::new(100.0, 20.0), Size::new(250.0, 20.0)], 300.0, 8.0);
    assert_eq!(wrapped.positions, vec![Point::new(0.0, 0.0), Point::new(0.0, 28.0)]);
}
