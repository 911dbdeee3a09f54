use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BanwatchError;

/// A locale the bot can answer in.
///
/// Only these values ever reach the locale store; everything else is
/// rejected at parse time, before any state changes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default for users who never picked a language).
    #[default]
    En,
    /// French.
    Fr,
}

impl Locale {
    /// The two-letter code for this locale.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = BanwatchError;

    /// Case-insensitive parse of a locale code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(BanwatchError::InvalidLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("Fr".parse::<Locale>().unwrap(), Locale::Fr);
        assert_eq!(" fr ".parse::<Locale>().unwrap(), Locale::Fr);
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        assert!("de".parse::<Locale>().is_err());
        assert!("english".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::default().as_str(), "en");
    }
}
