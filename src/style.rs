//! Style elements for the calltip.
//!
//! Styling follows the editor convention of named style elements: a key
//! like `editor.calltip` maps to a small color bundle described by a
//! compact descriptor string (`fore:#555, back:#ff9, border:1`). The
//! registry is seeded with built-in defaults, hosts push theme values
//! over them, and users can override per element from a JSON file in
//! the platform config directory.

use crate::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A named style element and its default descriptor.
#[derive(Debug, Clone, Copy)]
pub struct StyleElement {
    pub key: &'static str,
    pub description: &'static str,
    pub default: &'static str,
}

/// Style elements this crate defines.
pub const STYLE_ELEMENTS: &[StyleElement] = &[StyleElement {
    key: "editor.calltip",
    description: "The style of the calltip.",
    default: "fore:#555, back:#ff9, border:1",
}];

/// A resolved style element: colors plus border width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleFormat {
    pub fore: Color,
    pub back: Color,
    /// Border width in pixels. The border is drawn in the fore color.
    pub border: u32,
}

impl Default for StyleFormat {
    fn default() -> Self {
        Self {
            fore: Color::from_hex(0x555555),
            back: Color::from_hex(0xffff99),
            border: 1,
        }
    }
}

impl StyleFormat {
    /// Parse a descriptor string like `fore:#555, back:#ff9, border:1`.
    ///
    /// Unknown keys are ignored. A part that fails to parse leaves that
    /// field at its default.
    pub fn parse(descriptor: &str) -> Self {
        let mut format = StyleFormat::default();
        for part in descriptor.split(',') {
            let Some((key, value)) = part.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "fore" => {
                    if let Some(color) = Color::parse_hex(value) {
                        format.fore = color;
                    }
                }
                "back" => {
                    if let Some(color) = Color::parse_hex(value) {
                        format.back = color;
                    }
                }
                "border" => {
                    if let Ok(width) = value.parse() {
                        format.border = width;
                    }
                }
                _ => {}
            }
        }
        format
    }
}

/// JSON override for one style element (hex color strings).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fore: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<u32>,
}

impl StyleOverride {
    /// Apply on top of a base format. Unparseable colors keep the base
    /// value.
    fn apply_to(&self, base: StyleFormat) -> StyleFormat {
        let mut format = base;
        if let Some(color) = self.fore.as_deref().and_then(Color::parse_hex) {
            format.fore = color;
        }
        if let Some(color) = self.back.as_deref().and_then(Color::parse_hex) {
            format.back = color;
        }
        if let Some(width) = self.border {
            format.border = width;
        }
        format
    }
}

/// Registry of resolved style elements.
///
/// Lookup keys are case-insensitive. `get` never fails: an unknown key
/// resolves to the default format.
pub struct StyleRegistry {
    formats: HashMap<String, StyleFormat>,
}

impl StyleRegistry {
    /// Create a registry seeded with the built-in element defaults.
    pub fn new() -> Self {
        let mut formats = HashMap::new();
        for element in STYLE_ELEMENTS {
            formats.insert(
                element.key.to_ascii_lowercase(),
                StyleFormat::parse(element.default),
            );
        }
        Self { formats }
    }

    /// Resolve a style element, falling back to the default format for
    /// unknown keys.
    pub fn get(&self, key: &str) -> StyleFormat {
        self.formats
            .get(&key.to_ascii_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Set a resolved format (host theme values).
    pub fn set(&mut self, key: &str, format: StyleFormat) {
        self.formats.insert(key.to_ascii_lowercase(), format);
    }

    /// Set an element from a descriptor string.
    pub fn set_from_descriptor(&mut self, key: &str, descriptor: &str) {
        self.set(key, StyleFormat::parse(descriptor));
    }

    /// Path of the user override file
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calltip");
        config_dir.join("styles.json")
    }

    /// Load user overrides from the platform config directory. Missing
    /// file is a no-op.
    pub fn load_overrides(&mut self) {
        let path = Self::config_path();
        if path.exists() {
            self.load_overrides_from(&path);
        }
    }

    /// Load overrides from a JSON file mapping element keys to partial
    /// formats:
    ///
    /// ```json
    /// { "editor.calltip": { "fore": "#333", "back": "#ffc" } }
    /// ```
    ///
    /// A file that fails to read or parse leaves the registry unchanged.
    pub fn load_overrides_from(&mut self, path: &Path) {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("Error reading {}: {}", path.display(), e);
                return;
            }
        };

        let overrides: HashMap<String, StyleOverride> = match serde_json::from_str(&contents) {
            Ok(overrides) => overrides,
            Err(e) => {
                log::warn!("Error parsing {}: {}", path.display(), e);
                return;
            }
        };

        for (key, element_override) in overrides {
            let patched = element_override.apply_to(self.get(&key));
            self.set(&key, patched);
        }
        log::debug!("Loaded style overrides from {}", path.display());
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
