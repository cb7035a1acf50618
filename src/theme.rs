use std::path::Path;

use eframe::egui::{self, Color32};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Optional presentation theme
// ---------------------------------------------------------------------------

/// Presentation-only settings read once at startup from `theme.json` in the
/// working directory. Absent or malformed files fall back to defaults; the
/// theme never affects filtering or statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    #[serde(default = "default_dark")]
    pub dark: bool,
    /// Accent color as `#RRGGBB`, applied to hyperlinks and selections.
    #[serde(default)]
    pub accent: Option<String>,
}

fn default_dark() -> bool {
    true
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            dark: true,
            accent: None,
        }
    }
}

/// Read `theme.json` from the working directory, if present.
pub fn load_default() -> Theme {
    let path = Path::new("theme.json");
    if !path.exists() {
        return Theme::default();
    }
    match std::fs::read_to_string(path) {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(theme) => theme,
            Err(e) => {
                log::warn!("ignoring malformed theme.json: {e}");
                Theme::default()
            }
        },
        Err(e) => {
            log::warn!("could not read theme.json: {e}");
            Theme::default()
        }
    }
}

/// Apply the theme to the egui context.
pub fn apply(ctx: &egui::Context, theme: &Theme) {
    let mut visuals = if theme.dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    if let Some(accent) = theme.accent.as_deref().and_then(parse_hex) {
        visuals.hyperlink_color = accent;
        visuals.selection.bg_fill = accent;
    }
    ctx.set_visuals(visuals);
}

/// Parse a `#RRGGBB` string.
fn parse_hex(s: &str) -> Option<Color32> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() || hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_hex("#ff8c00"), Some(Color32::from_rgb(255, 140, 0)));
        assert_eq!(parse_hex("ff8c00"), None);
        assert_eq!(parse_hex("#ff8c"), None);
        assert_eq!(parse_hex("#gg0000"), None);
    }

    #[test]
    fn multibyte_accent_strings_are_rejected_not_a_panic() {
        // "é" is two bytes in UTF-8, so naive byte slicing would split a
        // character here. Must come back as None, never crash startup.
        assert_eq!(parse_hex("#a\u{e9}\u{e9}c"), None);
        assert_eq!(parse_hex("#ééé"), None);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let theme: Theme = serde_json::from_str("{}").unwrap();
        assert!(theme.dark);
        assert_eq!(theme.accent, None);

        let theme: Theme =
            serde_json::from_str(r##"{"dark": false, "accent": "#2563eb"}"##).unwrap();
        assert!(!theme.dark);
        assert_eq!(theme.accent.as_deref(), Some("#2563eb"));
    }
}
