//! The calltip popup widget.
//!
//! A thin wrapper around a toolkit [`OverlayLabel`] that enforces the
//! calltip's widget-level invariants: hidden until asked to show, border
//! drawn in the foreground color, and tooltip-like behavior when the
//! pointer ever reaches it.

use crate::overlay::{FontSpec, LabelStyle, OverlayLabel, Point};
use crate::style::StyleFormat;

/// Horizontal text indent inside the label, in pixels.
const TEXT_INDENT: f32 = 2.0;

/// The overlay label showing the current calltip.
pub struct CalltipPopup {
    label: Box<dyn OverlayLabel>,
}

impl CalltipPopup {
    /// Wrap a toolkit label. Starts hidden regardless of the label's
    /// prior state.
    pub fn new(mut label: Box<dyn OverlayLabel>) -> Self {
        label.hide();
        Self { label }
    }

    /// Apply a resolved style element to the label. The border is solid
    /// and drawn in the foreground color.
    pub fn apply_style(&mut self, format: &StyleFormat) {
        self.label.set_style(&LabelStyle {
            foreground: format.fore,
            background: format.back,
            border_width: format.border,
            border_color: format.fore,
            indent: TEXT_INDENT,
        });
    }

    /// Update text and font without touching visibility.
    pub fn set_content(&mut self, rich_text: &str, font: &FontSpec) {
        self.label.set_text(rich_text, font);
    }

    /// Relocate the popup's top-left corner.
    pub fn move_to(&mut self, position: Point) {
        self.label.move_to(position);
    }

    pub fn show(&mut self) {
        self.label.show();
    }

    /// Idempotent.
    pub fn hide(&mut self) {
        self.label.hide();
    }

    pub fn is_visible(&self) -> bool {
        self.label.is_visible()
    }

    /// Act a bit like a native tooltip: hovering the popup hides it.
    /// The calltip is not meant to be interactive.
    pub fn pointer_entered(&mut self) {
        self.label.hide();
    }
}
