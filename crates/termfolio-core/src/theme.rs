//! Terminal color themes.
//!
//! The core only tracks which theme is selected; rendering colors is the
//! presentation layer's concern.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::Result;

/// A selectable theme.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
    Retro,
    Synthwave,
    Hacker,
    Ocean,
    #[default]
    Dracula,
    Nord,
}

impl Theme {
    /// Short blurb shown by `themes`.
    pub fn description(self) -> &'static str {
        match self {
            Theme::Dark => "Modern dark theme with teal accents",
            Theme::Light => "Clean light theme with blue accents",
            Theme::Retro => "Classic green on black terminal",
            Theme::Synthwave => "Neon colors on dark background",
            Theme::Hacker => "Matrix-inspired hacker theme",
            Theme::Ocean => "Calming blue ocean theme",
            Theme::Dracula => "Popular dark theme with purple accents",
            Theme::Nord => "Arctic, north-bluish color palette",
        }
    }

    /// The display name shown by `themes` (capitalized).
    pub fn title(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Retro => "Retro",
            Theme::Synthwave => "Synthwave",
            Theme::Hacker => "Hacker",
            Theme::Ocean => "Ocean",
            Theme::Dracula => "Dracula",
            Theme::Nord => "Nord",
        }
    }
}

/// "dark, light, retro, ..." for error messages and usage text.
pub fn available_themes() -> String {
    let names: Vec<String> = Theme::iter().map(|t| t.to_string()).collect();
    names.join(", ")
}

/// Durable cache for the selected theme. Best-effort.
pub trait ThemeCache: Send + Sync {
    fn load(&self) -> Result<Option<Theme>>;
    fn save(&self, theme: Theme) -> Result<()>;
}

/// Cache that never stores anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullThemeCache;

impl ThemeCache for NullThemeCache {
    fn load(&self) -> Result<Option<Theme>> {
        Ok(None)
    }

    fn save(&self, _theme: Theme) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_dracula() {
        assert_eq!(Theme::default(), Theme::Dracula);
    }

    #[test]
    fn test_theme_parses_lowercase_name() {
        assert_eq!("synthwave".parse::<Theme>().unwrap(), Theme::Synthwave);
        assert!("neon".parse::<Theme>().is_err());
    }

    #[test]
    fn test_available_themes_order() {
        assert_eq!(
            available_themes(),
            "dark, light, retro, synthwave, hacker, ocean, dracula, nord"
        );
    }

    #[test]
    fn test_every_theme_has_a_description() {
        for theme in Theme::iter() {
            assert!(!theme.description().is_empty(), "{theme}");
        }
    }
}
