//! Response language.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Supported response languages. Anything unrecognized is English.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Turkish.
    Tr,
}

impl Language {
    /// Normalize a raw language tag.
    ///
    /// Lowercases and trims, then matches on the two-letter prefix:
    /// `tr*` is Turkish, everything else (including absent) is English.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) if raw.trim().to_lowercase().starts_with("tr") => Self::Tr,
            _ => Self::En,
        }
    }

    /// Resolve the request language from its three possible signals.
    ///
    /// Precedence is body field, then query parameter, then header. A blank
    /// signal counts as absent and falls through to the next one.
    pub fn resolve(body: Option<&str>, query: Option<&str>, header: Option<&str>) -> Self {
        let pick = [body, query, header]
            .into_iter()
            .flatten()
            .find(|raw| !raw.trim().is_empty());
        Self::normalize(pick)
    }

    /// Two-letter code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }

    /// Pick the English or Turkish variant of a value.
    pub fn pick<T>(self, en: T, tr: T) -> T {
        match self {
            Self::En => en,
            Self::Tr => tr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Language {
    fn from(raw: &str) -> Self {
        Self::normalize(Some(raw))
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::normalize(raw.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn normalize_prefix() {
        assert_eq!(Language::normalize(Some("tr-TR")), Language::Tr);
        assert_eq!(Language::normalize(Some("  TR ")), Language::Tr);
        assert_eq!(Language::normalize(Some("EN")), Language::En);
        assert_eq!(Language::normalize(Some("de")), Language::En);
        assert_eq!(Language::normalize(None), Language::En);
    }

    #[test]
    fn resolve_precedence() {
        assert_eq!(Language::resolve(Some("tr-TR"), None, None), Language::Tr);
        assert_eq!(Language::resolve(None, Some("EN"), Some("tr")), Language::En);
        assert_eq!(Language::resolve(Some("en"), Some("tr"), Some("tr")), Language::En);
        assert_eq!(Language::resolve(None, None, Some("tr")), Language::Tr);
        assert_eq!(Language::resolve(Some(""), None, Some("tr")), Language::Tr);
        assert_eq!(Language::resolve(None, None, None), Language::En);
    }
}
