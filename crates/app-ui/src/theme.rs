//! Colors for Lumen Kit
//!
//! Colors are carried as hex strings (`#RRGGBB` or `#RRGGBBAA`) so they can be
//! handed to any renderer unchanged. Parsing is only needed for validation.

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGBA hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Parse a hex color string to RGBA components
///
/// Accepts `#RRGGBB` (opaque) and `#RRGGBBAA`.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    let a = if hex.len() == 8 {
        u8::from_str_radix(&hex[6..8], 16).ok()?
    } else {
        u8::MAX
    };
    Some((r, g, b, a))
}

/// Check whether a string is a valid hex color
pub fn is_hex_color(hex: &str) -> bool {
    parse_hex_color(hex).is_some()
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// =============================================================================
// Brand Colors
// =============================================================================

/// Named colors used by the kit
pub mod brand {
    /// Pure white
    pub const WHITE: &str = "#FFFFFF";

    /// Pure black, the default veil
    pub const BLACK: &str = "#000000";

    /// Deep night blue
    pub const NIGHT: &str = "#0B1026";

    /// Warm dusk orange
    pub const DUSK: &str = "#F28C38";

    /// Soft fog grey
    pub const FOG: &str = "#D9DDE3";

    /// Forest green
    pub const FOREST: &str = "#1F4D3A";
}

/// Default veil color masking a screen swap
pub fn default_veil_color() -> Color {
    brand::BLACK.to_string()
}
