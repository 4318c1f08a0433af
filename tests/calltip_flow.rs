//! End-to-end calltip behavior against mock toolkit and editor
//! collaborators: a signature-help feature showing tips while the user
//! types, dismisses, and retypes.

use std::cell::RefCell;
use std::rc::Rc;

use calltip::controller::{CalltipController, EditorHost, KeyInput, CALLTIP_STYLE_KEY};
use calltip::overlay::{FontSpec, LabelStyle, OverlayLabel, Point, Rect};
use calltip::style::StyleRegistry;

#[derive(Default)]
struct LabelState {
    visible: bool,
    text: String,
    font: Option<FontSpec>,
    style: Option<LabelStyle>,
    position: Option<Point>,
}

struct ToolkitLabel {
    state: Rc<RefCell<LabelState>>,
}

impl ToolkitLabel {
    fn create() -> (Box<dyn OverlayLabel>, Rc<RefCell<LabelState>>) {
        let state = Rc::new(RefCell::new(LabelState::default()));
        (Box::new(ToolkitLabel { state: state.clone() }), state)
    }
}

impl OverlayLabel for ToolkitLabel {
    fn set_text(&mut self, rich_text: &str, font: &FontSpec) {
        let mut state = self.state.borrow_mut();
        state.text = rich_text.to_string();
        state.font = Some(font.clone());
    }

    fn set_style(&mut self, style: &LabelStyle) {
        self.state.borrow_mut().style = Some(*style);
    }

    fn move_to(&mut self, position: Point) {
        self.state.borrow_mut().position = Some(position);
    }

    fn show(&mut self) {
        self.state.borrow_mut().visible = true;
    }

    fn hide(&mut self) {
        self.state.borrow_mut().visible = false;
    }

    fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }
}

/// Editor with an 18px line height, caret at column 12 of a 9px-wide
/// monospace grid, viewport at (50, 80) on screen.
struct Editor;

const CHAR_W: f32 = 9.0;
const LINE_H: f32 = 18.0;

impl EditorHost for Editor {
    fn caret_rect(&self, chars_left: usize) -> Rect {
        let col = 12usize.saturating_sub(chars_left);
        Rect {
            x: col as f32 * CHAR_W,
            y: 3.0 * LINE_H,
            width: 1.0,
            height: LINE_H,
        }
    }

    fn to_screen(&self, point: Point) -> Point {
        Point {
            x: point.x + 50.0,
            y: point.y + 80.0,
        }
    }

    fn font(&self) -> FontSpec {
        FontSpec {
            family: Some("JetBrains Mono".into()),
            size: 14.0,
        }
    }
}

fn session() -> (CalltipController, Rc<RefCell<LabelState>>, StyleRegistry) {
    let styles = StyleRegistry::new();
    let (label, state) = ToolkitLabel::create();
    let controller = CalltipController::new(label, &styles);
    (controller, state, styles)
}

// -------------------------------------------------------------------------
// A full signature-help session
// -------------------------------------------------------------------------

#[test]
fn typing_session_with_dismiss_and_reopen() {
    let (mut tip, state, _) = session();

    // User types "round(" - signature help fires, anchored 6 chars back
    assert!(!tip.handle_key(&KeyInput::typed('(')));
    tip.show(&Editor, 6, "round(value, ndigits)", true);

    assert!(tip.is_active());
    assert_eq!(state.borrow().text, "<b>round</b>(value, ndigits)");
    assert_eq!(
        state.borrow().font,
        Some(FontSpec {
            family: Some("JetBrains Mono".into()),
            size: 14.0,
        })
    );

    // Anchored at column 6, one line above, shifted 3px left
    let pos = state.borrow().position.unwrap();
    assert_eq!(pos.x, 6.0 * CHAR_W - 3.0 + 50.0);
    assert_eq!(pos.y, 3.0 * LINE_H - LINE_H - 1.0 + 80.0);

    // User presses Escape - consumed, tip gone
    assert!(tip.handle_key(&KeyInput::named("escape")));
    assert!(!tip.is_active());

    // Signature help keeps calling show on every keystroke; nothing
    // reappears
    tip.show(&Editor, 7, "round(value, ndigits)", true);
    assert!(!tip.is_active());

    // User deletes back and retypes the open paren
    assert!(!tip.handle_key(&KeyInput::typed('(')));
    tip.show(&Editor, 6, "round(value, ndigits)", true);
    assert!(tip.is_active());

    // Closing the call ends the tip; the ')' still reaches the buffer
    assert!(!tip.handle_key(&KeyInput::typed(')')));
    assert!(!tip.is_active());
}

#[test]
fn focus_loss_hides_but_does_not_suppress() {
    let (mut tip, _, _) = session();

    tip.show(&Editor, 0, "len(s)", true);
    assert!(tip.is_active());

    tip.focus_lost();
    assert!(!tip.is_active());

    // Refocus: the next show works without any '(' in between
    tip.show(&Editor, 0, "len(s)", true);
    assert!(tip.is_active());
}

#[test]
fn theme_change_restyles_the_visible_tip() {
    let (mut tip, state, mut styles) = session();

    tip.show(&Editor, 0, "len(s)", false);

    styles.set_from_descriptor(CALLTIP_STYLE_KEY, "fore:#ddd, back:#222, border:1");
    tip.style_changed(&styles);

    let style = state.borrow().style.unwrap();
    assert_eq!(style.foreground, calltip::Color::from_hex(0xdddddd));
    assert_eq!(style.background, calltip::Color::from_hex(0x222222));
    assert_eq!(style.border_color, style.foreground);
    // Restyling never changes visibility
    assert!(tip.is_active());
}

#[test]
fn empty_signature_clears_a_stale_tip() {
    let (mut tip, state, _) = session();

    tip.show(&Editor, 0, "len(s)", false);
    assert!(tip.is_active());

    // Cursor left the call - the feature pushes an empty tip
    tip.show(&Editor, 0, "", false);
    assert!(!tip.is_active());
    assert_eq!(state.borrow().text, "");
}

#[test]
fn user_styles_json_overrides_the_default() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"{{ "editor.calltip": {{ "back": "#202020", "border": 2 }} }}"##
    )
    .unwrap();

    let mut styles = StyleRegistry::new();
    styles.load_overrides_from(file.path());

    let (label, state) = ToolkitLabel::create();
    let _tip = CalltipController::new(label, &styles);

    let style = state.borrow().style.unwrap();
    assert_eq!(style.background, calltip::Color::from_hex(0x202020));
    assert_eq!(style.border_width, 2);
    // fore untouched by the partial override
    assert_eq!(style.foreground, calltip::Color::from_hex(0x555555));
}
