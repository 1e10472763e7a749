//! Localized content
//!
//! Menu prompts and message templates keyed by (identifier, language).
//! The state machine never embeds user-facing text; it asks a [`Catalog`].

mod bilingual;
mod catalog;

pub use bilingual::extract_language_part;
pub use catalog::{MenuId, MessageId, StaticCatalog};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages a session can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Marathi,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Marathi, Language::Hindi];

    /// Map a reply in the language menu to a language.
    ///
    /// Accepts the option digit or the language's own name.
    pub fn from_choice(input: &str) -> Option<Self> {
        let lowered = input.to_lowercase();
        if input == "1" || lowered.contains("english") {
            Some(Language::English)
        } else if input == "2" || input.contains("मराठी") || lowered.contains("marathi") {
            Some(Language::Marathi)
        } else if input == "3" || input.contains("हिंदी") || lowered.contains("hindi") {
            Some(Language::Hindi)
        } else {
            None
        }
    }

    /// Short code as stored on user records
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Marathi => "mr",
            Language::Hindi => "hi",
        }
    }

    /// Whether records for this language are written in Devanagari
    pub fn uses_devanagari(self) -> bool {
        !matches!(self, Language::English)
    }

    fn index(self) -> usize {
        match self {
            Language::English => 0,
            Language::Marathi => 1,
            Language::Hindi => 2,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Lookup table for localized text
pub trait Catalog: Send + Sync + fmt::Debug {
    /// Prompt text for a menu
    fn menu(&self, id: MenuId, lang: Language) -> &str;

    /// Template text for a message; placeholders look like `{name}`
    fn message(&self, id: MessageId, lang: Language) -> &str;
}

/// Substitute `{key}` placeholders in a template.
///
/// Unknown placeholders are left in place.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_choice_by_digit_and_name() {
        assert_eq!(Language::from_choice("1"), Some(Language::English));
        assert_eq!(Language::from_choice("English please"), Some(Language::English));
        assert_eq!(Language::from_choice("2"), Some(Language::Marathi));
        assert_eq!(Language::from_choice("मराठी"), Some(Language::Marathi));
        assert_eq!(Language::from_choice("3"), Some(Language::Hindi));
        assert_eq!(Language::from_choice("हिंदी"), Some(Language::Hindi));
        assert_eq!(Language::from_choice("5"), None);
        assert_eq!(Language::from_choice("hello"), None);
    }

    #[test]
    fn fill_replaces_known_placeholders_only() {
        let out = fill("Ticket #{id} for {name} ({missing})", &[("id", "42"), ("name", "Asha")]);
        assert_eq!(out, "Ticket #42 for Asha ({missing})");
    }
}
