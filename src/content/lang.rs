//! Supported content languages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language the blog publishes in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Tr,
}

impl Lang {
    /// Every supported language, English first
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Tr];

    /// The language code used in directory names and URLs
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Tr => "tr",
        }
    }

    /// Infer the language of a route: `/tr/...` is Turkish, anything else English
    pub fn from_route(route: &str) -> Self {
        if route.starts_with("/tr/") {
            Lang::Tr
        } else {
            Lang::En
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the supported language codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language `{0}` (expected one of: en, tr)")]
pub struct UnknownLang(pub String);

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Lang::En),
            "tr" => Ok(Lang::Tr),
            other => Err(UnknownLang(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_codes() {
        assert_eq!("en".parse::<Lang>(), Ok(Lang::En));
        assert_eq!("tr".parse::<Lang>(), Ok(Lang::Tr));
    }

    #[test]
    fn test_reject_unknown_codes() {
        for code in ["de", "fr", "", "EN", "english"] {
            assert!(code.parse::<Lang>().is_err(), "{code:?} should be rejected");
        }
    }

    #[test]
    fn test_all_languages() {
        assert_eq!(Lang::ALL, [Lang::En, Lang::Tr]);
        assert_eq!(Lang::ALL.len(), 2);
    }

    #[test]
    fn test_from_route() {
        assert_eq!(Lang::from_route("/tr/merhaba/"), Lang::Tr);
        assert_eq!(Lang::from_route("/en/hello/"), Lang::En);
        assert_eq!(Lang::from_route("tr/no-leading-slash/"), Lang::En);
        assert_eq!(Lang::from_route("garbage"), Lang::En);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Lang::Tr).unwrap(), "\"tr\"");
        let lang: Lang = serde_yaml::from_str("en").unwrap();
        assert_eq!(lang, Lang::En);
    }
}
