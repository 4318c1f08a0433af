//! Toolkit seam for the calltip overlay.
//!
//! The calltip draws through a minimal "overlay label" capability that
//! any UI toolkit can provide: a borderless label floating above the
//! editor that can be styled, positioned in screen coordinates, and
//! toggled.
//!
//! # What an implementation must guarantee
//!
//! - Never takes keyboard focus
//! - No window-manager decoration or taskbar presence
//! - Renders the rich-text subset from [`crate::markup`] (bold tags)
//!
//! # What does NOT belong here
//!
//! - **Placement math** → `controller` owns it
//! - **Show/hide policy** → `controller` owns it
//! - **Style element lookup** → `style` owns it; the label only
//!   receives the resolved [`LabelStyle`]

use crate::Color;

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A pixel rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn top_left(&self) -> Point {
        Point { x: self.x, y: self.y }
    }
}

/// Font for the label, inherited from the host editor.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Family name; None = toolkit default.
    pub family: Option<String>,
    pub size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: None,
            size: 12.0,
        }
    }
}

/// Resolved visual style for the label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub foreground: Color,
    pub background: Color,
    /// Solid border, in pixels.
    pub border_width: u32,
    pub border_color: Color,
    /// Horizontal text indent, in pixels.
    pub indent: f32,
}

/// The overlay-label capability a UI toolkit implements for the calltip.
///
/// All operations are plain side-effecting UI calls with no failure
/// modes exposed to the caller.
pub trait OverlayLabel {
    /// Set display text (rich-text subset) and font. Visibility is
    /// unchanged.
    fn set_text(&mut self, rich_text: &str, font: &FontSpec);

    /// Apply a resolved style.
    fn set_style(&mut self, style: &LabelStyle);

    /// Relocate the label's top-left corner (screen coordinates).
    fn move_to(&mut self, position: Point);

    fn show(&mut self);

    fn hide(&mut self);

    fn is_visible(&self) -> bool;
}
