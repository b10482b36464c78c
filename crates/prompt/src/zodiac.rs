//! Zodiac signs.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The twelve zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    /// All signs in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Lowercase identifier, e.g. `"aries"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }

    /// Capitalized display name, e.g. `"Aries"`.
    pub fn display_name(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Uppercase form used inside prompts, e.g. `"ARIES"`.
    pub fn upper(self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sign {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|sign| sign.as_str() == value)
            .ok_or_else(|| format!("unknown zodiac sign '{value}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::Sign;

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("LEO".parse::<Sign>(), Ok(Sign::Leo));
        assert_eq!(" sagittarius ".parse::<Sign>(), Ok(Sign::Sagittarius));
        assert!("ophiuchus".parse::<Sign>().is_err());
    }

    #[test]
    fn display_name_capitalizes() {
        assert_eq!(Sign::Capricorn.display_name(), "Capricorn");
        assert_eq!(Sign::Leo.upper(), "LEO");
    }
}
