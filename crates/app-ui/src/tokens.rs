//! Design tokens for Lumen Kit
//!
//! This module provides the spacing, sizing and timing primitives the
//! components and transitions are tuned against.

use std::time::Duration;

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
/// Based on a 4px base unit with t-shirt sizes
pub mod spacing {
    /// 4px - Extra small
    pub const SPACE_XS: f32 = 4.0;
    /// 8px - Small, the default flow gap
    pub const SPACE_SM: f32 = 8.0;
    /// 12px - Medium
    pub const SPACE_MD: f32 = 12.0;
    /// 16px - Large
    pub const SPACE_LG: f32 = 16.0;
    /// 24px - Extra large
    pub const SPACE_XL: f32 = 24.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(SPACE_XS),
            "sm" => Some(SPACE_SM),
            "md" => Some(SPACE_MD),
            "lg" => Some(SPACE_LG),
            "xl" => Some(SPACE_XL),
            _ => None,
        }
    }
}

// =============================================================================
// Card Tokens
// =============================================================================

/// Card and caption dimensions
pub mod card {
    /// Line height of caption text (18px)
    pub const CAPTION_LINE_HEIGHT: f32 = 18.0;
    /// Gap between card media and a caption placed below it (6px)
    pub const CAPTION_GAP: f32 = 6.0;
    /// Default number of caption lines below a card
    pub const CAPTION_LINES: u8 = 2;
}

// =============================================================================
// Interaction Tokens
// =============================================================================

/// Press feedback
pub mod press {
    /// Scale applied while a pressable is held down
    pub const PRESSED_SCALE: f32 = 0.96;
    /// Scale at rest
    pub const RESTING_SCALE: f32 = 1.0;
}

// =============================================================================
// Duration Tokens
// =============================================================================

/// Animation durations in milliseconds
pub mod duration {
    /// Instant (0ms)
    pub const INSTANT: u32 = 0;
    /// Fast (100ms)
    pub const FAST: u32 = 100;
    /// Normal (150ms)
    pub const NORMAL: u32 = 150;
    /// Slow (300ms)
    pub const SLOW: u32 = 300;
    /// One phase of a fade-cut screen transition (800ms)
    pub const FADE_CUT: u32 = 800;
}

/// Convert a duration token to a [`Duration`]
pub fn duration_of(millis: u32) -> Duration {
    Duration::from_millis(u64::from(millis))
}

// =============================================================================
// Z-Index Tokens
// =============================================================================

/// Z-index layers
pub mod z_index {
    /// Screen content
    pub const CONTENT: i32 = 0;
    /// Developer tooling overlays (backdrop picker)
    pub const DEV_TOOLS: i32 = 90;
    /// Transition veil, above everything
    pub const VEIL: i32 = 9999;
}
