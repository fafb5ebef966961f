use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CaseInput, Strictness, convert};

/// How words are capitalized when they are joined back together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capitalization {
    /// Every char lowercase.
    Lower,
    /// First word lowercase, every following word starts with an uppercase char.
    Camel,
}

/// A target case style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// `helloWorld`
    Camel,
    /// `hello-world`
    #[default]
    Kebab,
    /// `hello.world`
    Dot,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 3] = [CaseStyle::Camel, CaseStyle::Kebab, CaseStyle::Dot];

    /// Canonical name, as accepted by [`FromStr`] and serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Dot => "dot",
        }
    }

    /// Char placed between words, if any.
    pub fn joiner(&self) -> Option<char> {
        match self {
            CaseStyle::Camel => None,
            CaseStyle::Kebab => Some('-'),
            CaseStyle::Dot => Some('.'),
        }
    }

    pub fn capitalization(&self) -> Capitalization {
        match self {
            CaseStyle::Camel => Capitalization::Camel,
            CaseStyle::Kebab | CaseStyle::Dot => Capitalization::Lower,
        }
    }

    /// Dot case keeps punctuation and edge separators; the others clean them up.
    pub fn strictness(&self) -> Strictness {
        match self {
            CaseStyle::Camel | CaseStyle::Kebab => Strictness::Strict,
            CaseStyle::Dot => Strictness::Loose,
        }
    }

    /// Convert `input` to this style.
    pub fn apply<I: CaseInput + ?Sized>(&self, input: &I) -> String {
        convert(*self, input)
    }

    /// Whether `text` is already in this style, i.e. converting it is a no-op.
    pub fn is_formatted(&self, text: &str) -> bool {
        self.apply(text) == text
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized style name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown case style '{name}', expected one of: camel, kebab, dot")]
pub struct UnknownStyleError {
    pub name: String,
}

impl FromStr for CaseStyle {
    type Err = UnknownStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            "dot" | "dot-case" => Ok(CaseStyle::Dot),
            _ => Err(UnknownStyleError {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("camel".parse::<CaseStyle>(), Ok(CaseStyle::Camel));
        assert_eq!("camelCase".parse::<CaseStyle>(), Ok(CaseStyle::Camel));
        assert_eq!("KEBAB".parse::<CaseStyle>(), Ok(CaseStyle::Kebab));
        assert_eq!("kebab-case".parse::<CaseStyle>(), Ok(CaseStyle::Kebab));
        assert_eq!("dot-case".parse::<CaseStyle>(), Ok(CaseStyle::Dot));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "snake".parse::<CaseStyle>().unwrap_err();
        assert_eq!(err.name, "snake");
        assert!(err.to_string().contains("camel, kebab, dot"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for style in CaseStyle::ALL {
            assert_eq!(style.to_string().parse::<CaseStyle>(), Ok(style));
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&CaseStyle::Kebab).unwrap(),
            r#""kebab""#
        );
        let style: CaseStyle = serde_json::from_str(r#""dot""#).unwrap();
        assert_eq!(style, CaseStyle::Dot);
    }

    #[test]
    fn test_rules() {
        assert_eq!(CaseStyle::Camel.joiner(), None);
        assert_eq!(CaseStyle::Kebab.joiner(), Some('-'));
        assert_eq!(CaseStyle::Dot.joiner(), Some('.'));
        assert_eq!(CaseStyle::Camel.capitalization(), Capitalization::Camel);
        assert_eq!(CaseStyle::Dot.strictness(), Strictness::Loose);
        assert_eq!(CaseStyle::default(), CaseStyle::Kebab);
    }

    #[test]
    fn test_is_formatted() {
        assert!(CaseStyle::Kebab.is_formatted("hello-world"));
        assert!(!CaseStyle::Kebab.is_formatted("Hello World"));
        assert!(CaseStyle::Camel.is_formatted("helloWorld"));
        assert!(CaseStyle::Dot.is_formatted("my.variable.name"));
        assert!(!CaseStyle::Dot.is_formatted("myVariable"));
    }
}
