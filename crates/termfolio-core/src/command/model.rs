//! Command metadata.

use serde::Serialize;

/// Which help section a command is listed under.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CommandCategory {
    Core,
    Extended,
    Admin,
    EasterEgg,
}

impl CommandCategory {
    /// The section heading `help` renders for this category.
    pub fn heading(self) -> &'static str {
        match self {
            CommandCategory::Core => "CORE COMMANDS:",
            CommandCategory::Extended => "EXTENDED COMMANDS:",
            CommandCategory::Admin => "ADMIN COMMANDS:",
            CommandCategory::EasterEgg => "EASTER EGGS:",
        }
    }
}

/// A registered command.
///
/// Definitions are metadata only; behavior lives in the dispatcher. The
/// registry is the single source of truth for what names exist, so the
/// dispatcher, `help`, and line completion all agree.
#[derive(Debug, Clone, Serialize)]
pub struct CommandDefinition {
    pub name: &'static str,
    /// One-line description shown by `help`.
    pub description: &'static str,
    /// Usage format (e.g., "theme set <name>")
    pub usage: &'static str,
    pub category: CommandCategory,
    /// Rejected with a permission error before dispatch when not admin.
    pub requires_admin: bool,
    /// Alternate names that resolve to this command.
    pub aliases: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_is_kebab_case() {
        assert_eq!(CommandCategory::EasterEgg.to_string(), "easter-egg");
        assert_eq!(CommandCategory::Core.to_string(), "core");
    }

    #[test]
    fn test_every_category_has_a_heading() {
        use strum::IntoEnumIterator;
        for category in CommandCategory::iter() {
            assert!(category.heading().ends_with(':'), "{category}");
        }
    }
}
