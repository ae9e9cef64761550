//! UI component models for Lumen Kit
//!
//! Components here carry the behavior and sizing of presentational pieces;
//! drawing them is left to the host renderer.
//!
//! # Available Components
//!
//! - [`Card`] - Media card with an optional caption, measurable for flow layout
//! - [`PressGesture`] - Press feedback state for any pressable element
//! - [`BackdropPicker`] - Developer-only backdrop color switcher

use app_layout::{Measurable, Size};
use serde::{Deserialize, Serialize};

use crate::theme::{brand, Color};
use crate::tokens::{card, press};

// =============================================================================
// Captions
// =============================================================================

/// How a card shows its caption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum CaptionStyle {
    /// Drawn over the bottom of the media, taking no extra space
    Overlay,
    /// Drawn beneath the media in up to `lines` lines
    Below {
        /// Maximum number of caption lines
        lines: u8,
    },
    /// Not drawn
    Hidden,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        CaptionStyle::Below {
            lines: card::CAPTION_LINES,
        }
    }
}

impl CaptionStyle {
    /// Vertical space the caption adds below the media
    pub fn extra_height(&self) -> f32 {
        match self {
            CaptionStyle::Below { lines: 0 } => 0.0,
            CaptionStyle::Below { lines } => {
                f32::from(*lines) * card::CAPTION_LINE_HEIGHT + card::CAPTION_GAP
            }
            CaptionStyle::Overlay | CaptionStyle::Hidden => 0.0,
        }
    }

    /// Whether the caption is visible at all
    pub fn is_visible(&self) -> bool {
        !matches!(self, CaptionStyle::Hidden | CaptionStyle::Below { lines: 0 })
    }
}

// =============================================================================
// Card
// =============================================================================

/// A media card with an optional caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card title, used as its accessible label
    pub title: String,
    /// Size of the card media
    pub media_size: Size,
    /// Caption text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Caption presentation
    #[serde(default)]
    pub caption_style: CaptionStyle,
}

impl Card {
    /// Create a card with the given title and media size
    pub fn new(title: impl Into<String>, media_size: Size) -> Self {
        Self {
            title: title.into(),
            media_size,
            caption: None,
            caption_style: CaptionStyle::default(),
        }
    }

    /// Set the caption text
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the caption style
    pub fn with_caption_style(mut self, style: CaptionStyle) -> Self {
        self.caption_style = style;
        self
    }

    /// Caption text, if it is shown
    pub fn visible_caption(&self) -> Option<&str> {
        self.caption
            .as_deref()
            .filter(|text| !text.is_empty() && self.caption_style.is_visible())
    }
}

impl Measurable for Card {
    fn measured_size(&self) -> Size {
        let extra = if self.visible_caption().is_some() {
            self.caption_style.extra_height()
        } else {
            0.0
        };
        Size::new(self.media_size.width, self.media_size.height + extra)
    }
}

// =============================================================================
// Press Gesture
// =============================================================================

/// Press state of a pressable element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressState {
    /// Not being touched
    #[default]
    Idle,
    /// Held down
    Pressed,
}

/// Press feedback for a pressable element
///
/// The host performs hit testing and reports whether a release happened
/// inside the element; the gesture tracks the pressed state and decides
/// whether the action fires.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PressGesture {
    state: PressState,
    disabled: bool,
}

impl PressGesture {
    /// Create an enabled gesture
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the gesture; disabling drops any press in progress
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.state = PressState::Idle;
        }
    }

    /// Current press state
    pub fn state(&self) -> PressState {
        self.state
    }

    /// Whether the element is held down
    pub fn is_pressed(&self) -> bool {
        self.state == PressState::Pressed
    }

    /// Touch down on the element
    pub fn press(&mut self) {
        if !self.disabled {
            self.state = PressState::Pressed;
        }
    }

    /// Touch up; returns whether the action should fire
    pub fn release(&mut self, inside: bool) -> bool {
        let fire = self.is_pressed() && inside;
        self.state = PressState::Idle;
        fire
    }

    /// Touch cancelled by the system
    pub fn cancel(&mut self) {
        self.state = PressState::Idle;
    }

    /// Scale to draw the element at
    pub fn scale(&self) -> f32 {
        match self.state {
            PressState::Pressed => press::PRESSED_SCALE,
            PressState::Idle => press::RESTING_SCALE,
        }
    }
}

// =============================================================================
// Backdrop Picker
// =============================================================================

/// A named backdrop color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backdrop {
    /// Display name
    pub name: String,
    /// Backdrop color
    pub color: Color,
}

impl Backdrop {
    /// Create a backdrop
    pub fn new(name: impl Into<String>, color: impl Into<Color>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Backdrops offered by default
    pub fn presets() -> Vec<Backdrop> {
        vec![
            Backdrop::new("Night", brand::NIGHT),
            Backdrop::new("Dusk", brand::DUSK),
            Backdrop::new("Fog", brand::FOG),
            Backdrop::new("Forest", brand::FOREST),
        ]
    }
}

/// Developer-only switcher for trying screens against different backdrops
#[derive(Debug, Clone, PartialEq)]
pub struct BackdropPicker {
    backdrops: Vec<Backdrop>,
    selected: usize,
    enabled: bool,
}

impl BackdropPicker {
    /// Create a picker over `backdrops`, selecting the first
    pub fn new(backdrops: Vec<Backdrop>, enabled: bool) -> Self {
        Self {
            backdrops,
            selected: 0,
            enabled,
        }
    }

    /// Picker over the preset backdrops
    pub fn with_presets(enabled: bool) -> Self {
        Self::new(Backdrop::presets(), enabled)
    }

    /// Whether the picker is shown and accepts changes
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// All backdrops on offer
    pub fn backdrops(&self) -> &[Backdrop] {
        &self.backdrops
    }

    /// Index of the selected backdrop
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected backdrop, if there are any
    pub fn selected(&self) -> Option<&Backdrop> {
        self.backdrops.get(self.selected)
    }

    /// Select a backdrop by index; returns whether the selection changed
    pub fn select(&mut self, index: usize) -> bool {
        if !self.enabled || index >= self.backdrops.len() || index == self.selected {
            return false;
        }
        self.selected = index;
        tracing::debug!(backdrop = %self.backdrops[index].name, "Backdrop selected");
        true
    }

    /// Select the next backdrop, wrapping around
    pub fn select_next(&mut self) -> bool {
        if self.backdrops.is_empty() {
            return false;
        }
        self.select((self.selected + 1) % self.backdrops.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_layout::{pack, Point};

    #[test]
    fn test_caption_below_adds_height() {
        let card = Card::new("Harbor", Size::new(120.0, 90.0)).with_caption("Morning light");
        assert_eq!(card.measured_size(), Size::new(120.0, 90.0 + 2.0 * 18.0 + 6.0));
    }

    #[test]
    fn test_overlay_and_hidden_captions_add_nothing() {
        let base = Card::new("Harbor", Size::new(120.0, 90.0)).with_caption("Morning light");

        let overlay = base.clone().with_caption_style(CaptionStyle::Overlay);
        assert_eq!(overlay.measured_size(), Size::new(120.0, 90.0));
        assert_eq!(overlay.visible_caption(), Some("Morning light"));

        let hidden = base.with_caption_style(CaptionStyle::Hidden);
        assert_eq!(hidden.measured_size(), Size::new(120.0, 90.0));
        assert_eq!(hidden.visible_caption(), None);
    }

    #[test]
    fn test_missing_caption_adds_nothing() {
        let card = Card::new("Harbor", Size::new(120.0, 90.0));
        assert_eq!(card.measured_size(), Size::new(120.0, 90.0));

        let empty = card.with_caption("");
        assert_eq!(empty.measured_size(), Size::new(120.0, 90.0));
    }

    #[test]
    fn test_cards_flow_into_lines() {
        let cards = vec![
            Card::new("A", Size::new(140.0, 100.0)).with_caption("caption"),
            Card::new("B", Size::new(140.0, 100.0)),
            Card::new("C", Size::new(140.0, 100.0)),
        ];
        let layout = pack(&cards, 300.0, 8.0);

        assert_eq!(layout.positions[1], Point::new(148.0, 0.0));
        // First line is as tall as the captioned card
        assert_eq!(layout.positions[2], Point::new(0.0, 142.0 + 8.0));
    }

    #[test]
    fn test_caption_style_serde() {
        let json = serde_json::to_string(&CaptionStyle::Below { lines: 3 }).unwrap();
        assert_eq!(json, r#"{"style":"below","lines":3}"#);

        let parsed: CaptionStyle = serde_json::from_str(r#"{"style":"overlay"}"#).unwrap();
        assert_eq!(parsed, CaptionStyle::Overlay);
    }

    #[test]
    fn test_press_release_inside_fires() {
        let mut gesture = PressGesture::new();
        gesture.press();
        assert!(gesture.is_pressed());
        assert_eq!(gesture.scale(), 0.96);

        assert!(gesture.release(true));
        assert_eq!(gesture.state(), PressState::Idle);
        assert_eq!(gesture.scale(), 1.0);
    }

    #[test]
    fn test_press_release_outside_or_cancelled_does_not_fire() {
        let mut gesture = PressGesture::new();
        gesture.press();
        assert!(!gesture.release(false));

        gesture.press();
        gesture.cancel();
        assert!(!gesture.release(true));

        // Release without a press
        assert!(!gesture.release(true));
    }

    #[test]
    fn test_disabled_press_is_ignored() {
        let mut gesture = PressGesture::new();
        gesture.press();
        gesture.set_disabled(true);
        assert!(!gesture.is_pressed());

        gesture.press();
        assert!(!gesture.release(true));
    }

    #[test]
    fn test_backdrop_picker_selection() {
        let mut picker = BackdropPicker::with_presets(true);
        assert_eq!(picker.selected().unwrap().name, "Night");

        assert!(picker.select(2));
        assert_eq!(picker.selected().unwrap().color, brand::FOG);
        assert!(!picker.select(2));
        assert!(!picker.select(99));

        assert!(picker.select_next());
        assert!(picker.select_next());
        assert_eq!(picker.selected_index(), 0);
    }

    #[test]
    fn test_disabled_backdrop_picker_ignores_changes() {
        let mut picker = BackdropPicker::with_presets(false);
        assert!(!picker.is_enabled());
        assert!(!picker.select(1));
        assert!(!picker.select_next());
        assert_eq!(picker.selected_index(), 0);
    }

    #[test]
    fn test_empty_backdrop_picker() {
        let mut picker = BackdropPicker::new(Vec::new(), true);
        assert!(picker.selected().is_none());
        assert!(!picker.select_next());
    }
}
