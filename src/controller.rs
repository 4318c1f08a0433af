//! Calltip behavior: when to show, where, and when to stay quiet.
//!
//! The controller owns one [`CalltipPopup`] plus a single `suppressed`
//! flag, and is driven entirely by explicit delegation from the host
//! editor (key events, focus loss, style changes, and show/cancel calls
//! from higher-level features such as signature help).
//!
//! # Suppression
//!
//! Pressing Escape on a visible calltip hides it and keeps it hidden
//! until the user types `(` again:
//!
//! ```text
//! Active     -- Escape while visible -->  Suppressed
//! Suppressed -- '(' typed -->             Active
//! ```
//!
//! Programmatic `show` calls never change the flag; while suppressed
//! they are silent no-ops.

use crate::markup;
use crate::overlay::{FontSpec, OverlayLabel, Point, Rect};
use crate::popup::CalltipPopup;
use crate::style::StyleRegistry;

/// Style element key the controller resolves its look from.
pub const CALLTIP_STYLE_KEY: &str = "editor.calltip";

/// Host-editor capabilities the calltip consumes.
///
/// The host owns the text buffer, the caret, and the mapping to screen
/// coordinates; the controller only does arithmetic on what it is
/// handed.
pub trait EditorHost {
    /// Editor-relative pixel rectangle of the caret after moving a copy
    /// of it `chars_left` characters to the left (0 = no movement).
    /// Clamping at the buffer start is the host's concern.
    fn caret_rect(&self, chars_left: usize) -> Rect;

    /// Map an editor-relative point to absolute screen coordinates.
    fn to_screen(&self, point: Point) -> Point;

    /// The editor's current font.
    fn font(&self) -> FontSpec;
}

/// Keyboard modifier state for a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub control: bool,
    pub alt: bool,
    pub shift: bool,
    pub platform: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.control || self.alt || self.shift || self.platform
    }
}

/// A key event as forwarded by the host editor's input pipeline.
#[derive(Debug, Clone, Default)]
pub struct KeyInput {
    /// Key name ("escape", "a", "enter", ...).
    pub key: String,
    pub modifiers: Modifiers,
    /// Literal character the keystroke typed, if any.
    pub ch: Option<char>,
}

impl KeyInput {
    /// A printable keystroke.
    pub fn typed(ch: char) -> Self {
        Self {
            key: ch.to_string(),
            modifiers: Modifiers::default(),
            ch: Some(ch),
        }
    }

    /// A non-printing keystroke with no modifiers.
    pub fn named(key: &str) -> Self {
        Self {
            key: key.to_string(),
            modifiers: Modifiers::default(),
            ch: None,
        }
    }
}

/// Decides when the calltip shows, computes its placement, and
/// intercepts the keystrokes that manage suppression.
pub struct CalltipController {
    popup: CalltipPopup,
    suppressed: bool,
}

impl CalltipController {
    /// Wrap a toolkit label and style it from the registry.
    pub fn new(label: Box<dyn OverlayLabel>, styles: &StyleRegistry) -> Self {
        let mut popup = CalltipPopup::new(label);
        popup.apply_style(&styles.get(CALLTIP_STYLE_KEY));
        Self {
            popup,
            suppressed: false,
        }
    }

    /// Show the given calltip.
    ///
    /// `offset` anchors the tip `offset` characters to the left of the
    /// caret. With `highlight_function_name`, the text before the first
    /// opening parenthesis is made bold. Empty text hides the tip. A
    /// no-op while suppressed.
    pub fn show(
        &mut self,
        host: &dyn EditorHost,
        offset: usize,
        rich_text: &str,
        highlight_function_name: bool,
    ) {
        // Deliberately hidden by the user; stays that way until '('
        if self.suppressed {
            return;
        }

        let rich_text = if highlight_function_name {
            markup::highlight_function_name(rich_text)
        } else {
            rich_text.to_string()
        };

        // Anchor position in pixel coordinates
        let rect = host.caret_rect(offset);
        let mut pos = rect.top_left();
        pos.y -= rect.height + 1.0; // one line above
        pos.x -= 3.0; // correct for border and indent
        let pos = host.to_screen(pos);

        // Text and font update even when the tip ends up hidden
        self.popup.set_content(&rich_text, &host.font());

        if !rich_text.is_empty() {
            self.popup.move_to(pos);
            self.popup.show();
        } else {
            self.popup.hide();
        }
    }

    /// Hide the calltip. Idempotent; suppression is untouched.
    pub fn cancel(&mut self) {
        self.popup.hide();
    }

    /// Whether the calltip is currently shown.
    pub fn is_active(&self) -> bool {
        self.popup.is_visible()
    }

    /// Route a key event ahead of the editor's normal key handling.
    /// Returns true if the event was consumed.
    pub fn handle_key(&mut self, input: &KeyInput) -> bool {
        // Escape on a visible calltip dismisses it and holds it down
        if input.key == "escape" && !input.modifiers.any() && self.is_active() {
            self.cancel();
            self.suppressed = true;
            log::debug!("calltip dismissed; suppressed until '(' is typed");
            return true;
        }

        match input.ch {
            Some('(') => self.suppressed = false,
            Some(')') => self.cancel(),
            _ => {}
        }

        // Keystroke proceeds to default handling
        false
    }

    /// The editor losing input focus always hides the calltip.
    pub fn focus_lost(&mut self) {
        self.popup.hide();
    }

    /// Re-resolve the calltip style element after a theme change.
    pub fn style_changed(&mut self, styles: &StyleRegistry) {
        self.popup.apply_style(&styles.get(CALLTIP_STYLE_KEY));
    }

    /// Pointer reached the popup; it hides like a native tooltip.
    pub fn pointer_entered(&mut self) {
        self.popup.pointer_entered();
    }
}
