//! Icon color theme.
//!
//! [`IconTheme`] holds the three colors the icon is drawn with. The default
//! theme is the compiled-in teal/gold/white palette; for callers that want
//! to persist or exchange a palette, themes round-trip through JSON:
//!
//! ```
//! use hilal_renderer::IconTheme;
//!
//! let theme = IconTheme::default();
//! let json = theme.to_json().unwrap();
//! let restored = IconTheme::from_json(&json).unwrap();
//! assert_eq!(restored, theme);
//! ```

use image::Rgba;
use palette::Srgb;
use serde::{Deserialize, Serialize};

/// The three colors the icon is drawn with.
///
/// Every element paints fully opaque; transparency exists only where no
/// element has painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IconTheme {
    /// Background disc color, also used to carve the crescent.
    pub background: Srgb<u8>,

    /// Crescent and star color.
    pub accent: Srgb<u8>,

    /// Mosque silhouette color.
    pub foreground: Srgb<u8>,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            background: Srgb::new(46, 139, 139), // teal
            accent: Srgb::new(255, 215, 0),      // gold
            foreground: Srgb::new(255, 255, 255),
        }
    }
}

impl IconTheme {
    /// Serializes the theme to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a theme from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Converts a theme color to an opaque RGBA pixel.
pub fn opaque(color: Srgb<u8>) -> Rgba<u8> {
    Rgba([color.red, color.green, color.blue, 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette() {
        let theme = IconTheme::default();
        assert_eq!(opaque(theme.background).0, [46, 139, 139, 255]);
        assert_eq!(opaque(theme.accent).0, [255, 215, 0, 255]);
        assert_eq!(opaque(theme.foreground).0, [255, 255, 255, 255]);
    }

    #[test]
    fn json_roundtrip() {
        let theme = IconTheme {
            accent: Srgb::new(200, 160, 40),
            ..IconTheme::default()
        };

        let json = theme.to_json().unwrap();
        let restored = IconTheme::from_json(&json).unwrap();
        assert_eq!(restored, theme);
    }

    #[test]
    fn json_names_every_role() {
        let json = IconTheme::default().to_json().unwrap();
        assert!(json.contains("\"background\""));
        assert!(json.contains("\"accent\""));
        assert!(json.contains("\"foreground\""));
    }
}
