//! Host-side flow layout cache
//!
//! The layout core holds no observation machinery. A host keeps a
//! [`FlowLayoutCache`] next to its item state and asks it for a layout on every
//! render; the cache re-packs only when the measured sizes, the available
//! width, or the spacing changed since the previous call.

use crate::flow::{pack, FlowConfig, Measurable, PackedLayout};
use crate::geometry::Size;

/// Inputs that produced the cached layout
#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    sizes: Vec<Size>,
    max_width: f32,
    spacing: f32,
}

impl CacheKey {
    /// Float fields compare bitwise so that a NaN input still hits the cache
    fn matches(&self, sizes: &[Size], max_width: f32, spacing: f32) -> bool {
        self.max_width.to_bits() == max_width.to_bits()
            && self.spacing.to_bits() == spacing.to_bits()
            && self.sizes.len() == sizes.len()
            && self.sizes.iter().zip(sizes).all(|(a, b)| {
                a.width.to_bits() == b.width.to_bits() && a.height.to_bits() == b.height.to_bits()
            })
    }
}

/// Memoizes the last packed layout for a host view
#[derive(Debug, Clone, Default)]
pub struct FlowLayoutCache {
    config: FlowConfig,
    key: Option<CacheKey>,
    layout: PackedLayout,
    recompute_count: u64,
}

impl FlowLayoutCache {
    /// Create a cache with the given configuration
    pub fn new(config: FlowConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Current configuration
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Change the spacing; the next call to [`layout`](Self::layout) re-packs
    pub fn set_spacing(&mut self, spacing: f32) {
        self.config.spacing = spacing;
    }

    /// Layout for the given items and width, re-packing only if inputs changed
    pub fn layout<I: Measurable>(&mut self, items: &[I], max_width: f32) -> &PackedLayout {
        let sizes: Vec<Size> = items.iter().map(Measurable::measured_size).collect();
        let spacing = self.config.spacing;

        let fresh = self
            .key
            .as_ref()
            .is_some_and(|key| key.matches(&sizes, max_width, spacing));

        if !fresh {
            self.layout = pack(&sizes, max_width, spacing);
            self.recompute_count += 1;
            self.key = Some(CacheKey {
                sizes,
                max_width,
                spacing,
            });
        }

        &self.layout
    }

    /// Last computed layout, if any
    pub fn cached(&self) -> Option<&PackedLayout> {
        self.key.as_ref().map(|_| &self.layout)
    }

    /// Force the next call to [`layout`](Self::layout) to re-pack
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// How many times the cache has run the packer
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }
}
