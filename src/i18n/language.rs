// SPDX-License-Identifier: MPL-2.0
//! Language codes used as keys throughout the locale layer.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Short, opaque identifier for a display language (e.g. `en`, `kz`).
///
/// Codes coming from configuration or the command line are validated as
/// BCP-47 identifiers but kept exactly as written (minus surrounding
/// whitespace), since they also name the bundle resource: `pt_BR` fetches
/// `pt_BR.json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Builds a code from a compile-time constant without validation.
    ///
    /// Only for literals that are known to be valid; see the tests in
    /// `config::defaults` that parse every default back.
    pub(crate) fn from_static(code: &'static str) -> Self {
        Self(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LanguageCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<LanguageIdentifier>()
            .map_err(|_| Error::InvalidLanguage(trimmed.to_string()))?;
        Ok(Self(trimmed.to_string()))
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_code_as_written() {
        for input in ["EN", "en_US", "pt_BR", "zh-hant-tw"] {
            let code: LanguageCode = input.parse().expect("valid code");
            assert_eq!(code.as_str(), input);
        }
    }

    #[test]
    fn parse_trims_whitespace_only() {
        let code: LanguageCode = "  pt_BR\n".parse().expect("valid code");
        assert_eq!(code.as_str(), "pt_BR");
    }

    #[test]
    fn codes_differing_in_case_are_distinct_keys() {
        let upper: LanguageCode = "EN".parse().unwrap();
        let lower: LanguageCode = "en".parse().unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn parse_accepts_two_letter_tags_outside_iso_list() {
        let code: LanguageCode = "kz".parse().expect("kz is syntactically valid");
        assert_eq!(code.to_string(), "kz");
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "not a language!".parse::<LanguageCode>().unwrap_err();
        assert!(matches!(err, Error::InvalidLanguage(_)));
    }

    #[test]
    fn deserializes_from_toml_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            lang: LanguageCode,
        }
        let wrapper: Wrapper = toml::from_str("lang = \"Ru\"").expect("valid toml");
        assert_eq!(wrapper.lang.as_str(), "Ru");
    }
}
