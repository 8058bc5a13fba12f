//! Theme glyphs and a configurable, serializable theme

use std::borrow::Cow;
use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::host::Theme;

/// A named glyph from the host's icon set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(Cow<'static, str>);

impl Icon {
    pub const MOVE_UP: Icon = Icon(Cow::Borrowed("move-up"));
    pub const MOVE_DOWN: Icon = Icon(Cow::Borrowed("move-down"));
    pub const CHEVRON_UP: Icon = Icon(Cow::Borrowed("chevron-up"));
    pub const CHEVRON_DOWN: Icon = Icon(Cow::Borrowed("chevron-down"));

    /// Create an icon from a glyph name understood by the host
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A [`Theme`] backed by plain values
///
/// This is the configuration surface for widget appearance. Missing fields
/// fall back to the defaults when deserializing, so a config only needs to
/// name what it overrides:
///
/// ```
/// use accordion_core::{Icon, StaticTheme, Theme};
///
/// let theme = StaticTheme::from_json(r#"{ "padding": 1, "expand_icon": "chevron-down" }"#)?;
/// assert_eq!(theme.padding(), 1);
/// assert_eq!(theme.expand_icon(), Icon::CHEVRON_DOWN);
/// assert_eq!(theme.collapse_icon(), Icon::MOVE_UP);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticTheme {
    /// Spacing between stacked elements
    pub padding: u16,
    /// Background color behind the widget
    pub background: Color,
    /// Glyph for collapsed sections
    pub expand_icon: Icon,
    /// Glyph for expanded sections
    pub collapse_icon: Icon,
}

impl Default for StaticTheme {
    fn default() -> Self {
        Self {
            padding: 4,
            background: Color::Reset,
            expand_icon: Icon::MOVE_DOWN,
            collapse_icon: Icon::MOVE_UP,
        }
    }
}

impl StaticTheme {
    /// Parse a theme from JSON, filling unspecified fields with defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let theme = serde_json::from_str(json)?;
        Ok(theme)
    }

    /// Serialize the theme as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn with_padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_icons(mut self, expand: Icon, collapse: Icon) -> Self {
        self.expand_icon = expand;
        self.collapse_icon = collapse;
        self
    }
}

impl Theme for StaticTheme {
    fn padding(&self) -> u16 {
        self.padding
    }

    fn background_color(&self) -> Color {
        self.background
    }

    fn expand_icon(&self) -> Icon {
        self.expand_icon.clone()
    }

    fn collapse_icon(&self) -> Icon {
        self.collapse_icon.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = StaticTheme::default();
        assert_eq!(theme.padding(), 4);
        assert_eq!(theme.background_color(), Color::Reset);
        assert_eq!(theme.expand_icon(), Icon::MOVE_DOWN);
        assert_eq!(theme.collapse_icon(), Icon::MOVE_UP);
    }

    #[test]
    fn test_from_json_partial() {
        let theme = StaticTheme::from_json(r#"{ "padding": 2, "background": "blue" }"#).unwrap();
        assert_eq!(theme.padding, 2);
        assert_eq!(theme.background, Color::Blue);
        assert_eq!(theme.expand_icon, Icon::MOVE_DOWN);
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        let theme = StaticTheme::from_json("{}").unwrap();
        assert_eq!(theme, StaticTheme::default());
    }

    #[test]
    fn test_from_json_rejects_wrong_types() {
        assert!(StaticTheme::from_json(r#"{ "padding": "wide" }"#).is_err());
        assert!(StaticTheme::from_json("not json").is_err());
    }

    #[test]
    fn test_json_roundtrip_keeps_icons() {
        let theme = StaticTheme::default()
            .with_padding(1)
            .with_icons(Icon::CHEVRON_DOWN, Icon::CHEVRON_UP);
        let json = theme.to_json().unwrap();
        assert!(json.contains("chevron-down"));
        assert_eq!(StaticTheme::from_json(&json).unwrap(), theme);
    }

    #[test]
    fn test_icon_named() {
        let icon = Icon::named("caret");
        assert_eq!(icon.name(), "caret");
        assert_eq!(icon.to_string(), "caret");
        assert_eq!(Icon::named("move-up"), Icon::MOVE_UP);
    }
}
