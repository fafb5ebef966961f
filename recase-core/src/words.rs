//! Word boundary detection and normalization.
//!
//! Text is scanned one char at a time. Each char is classified, and a
//! boundary is recorded either at a lowercase-to-uppercase transition or at
//! a run of separator chars. The same scan backs every formatter; the
//! [`Strictness`] decides how much cleanup happens along the way.

use std::{mem, ops::Deref, slice, vec};

use serde::Serialize;

use crate::CaseInput;

/// Classification of a single char during the boundary scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII `a-z`
    Lower,
    /// ASCII `A-Z`
    Upper,
    /// ASCII `0-9`
    Digit,
    /// Whitespace, `_` or `-`
    Separator,
    /// Anything else, including non-ASCII letters
    Other,
}

impl CharClass {
    /// Classify a char.
    pub fn of(c: char) -> Self {
        match c {
            'a'..='z' => Self::Lower,
            'A'..='Z' => Self::Upper,
            '0'..='9' => Self::Digit,
            '_' | '-' => Self::Separator,
            c if c.is_whitespace() => Self::Separator,
            _ => Self::Other,
        }
    }

    /// Whether chars of this class survive strict normalization.
    pub fn is_alphanumeric(self) -> bool {
        matches!(self, Self::Lower | Self::Upper | Self::Digit)
    }
}

/// How much cleanup [`split_segments`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Trim, drop non-alphanumeric chars, drop empty segments, lowercase.
    #[default]
    Strict,
    /// Keep every non-separator char as-is and keep the empty segments
    /// produced by leading or trailing separators.
    Loose,
}

/// Split text into segments at every detected boundary.
///
/// A run of separators counts as a single boundary. Lowercase-to-uppercase
/// transitions are detected on the raw text, so a dropped char between two
/// letters (`"a@B"`) never creates a boundary.
///
/// With [`Strictness::Loose`] the segments are returned with their original
/// casing, and joining them reproduces the input with each boundary
/// replaced by the joiner.
pub fn split_segments(text: &str, strictness: Strictness) -> Vec<String> {
    let text = match strictness {
        Strictness::Strict => text.trim(),
        Strictness::Loose => text,
    };

    let mut segments = Vec::new();
    let mut current = String::new();
    let mut prev: Option<CharClass> = None;

    for c in text.chars() {
        let class = CharClass::of(c);

        if class == CharClass::Separator {
            if prev != Some(CharClass::Separator) {
                segments.push(mem::take(&mut current));
            }
        } else {
            if prev == Some(CharClass::Lower) && class == CharClass::Upper {
                segments.push(mem::take(&mut current));
            }
            match strictness {
                Strictness::Strict if class.is_alphanumeric() => {
                    current.push(c.to_ascii_lowercase());
                }
                Strictness::Strict => {}
                Strictness::Loose => current.push(c),
            }
        }

        prev = Some(class);
    }
    segments.push(current);

    if strictness == Strictness::Strict {
        segments.retain(|segment| !segment.is_empty());
    }
    segments
}

/// Reduce any input to its ordered sequence of lowercase words.
///
/// Non-string input and blank strings produce an empty sequence.
///
/// ```
/// use recase_core::normalize_words;
///
/// let words = normalize_words("getUserProfile_data");
/// assert_eq!(words.as_slice(), ["get", "user", "profile", "data"]);
/// assert!(normalize_words(&42).is_empty());
/// ```
pub fn normalize_words<I: CaseInput + ?Sized>(input: &I) -> Words {
    match input.as_case_str() {
        Some(text) => Words(split_segments(text, Strictness::Strict)),
        None => Words::default(),
    }
}

/// An ordered sequence of non-empty, lowercase ASCII alphanumeric words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Words(Vec<String>);

impl Words {
    /// Number of words.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no words.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the words.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.0.iter()
    }

    /// The words as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Join the words with a separator.
    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

impl Deref for Words {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Words {
    type Item = String;
    type IntoIter = vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Words {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Words> for Vec<String> {
    fn from(words: Words) -> Self {
        words.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(text: &str) -> Vec<String> {
        split_segments(text, Strictness::Strict)
    }

    fn loose(text: &str) -> Vec<String> {
        split_segments(text, Strictness::Loose)
    }

    #[test]
    fn test_char_class() {
        assert_eq!(CharClass::of('a'), CharClass::Lower);
        assert_eq!(CharClass::of('Z'), CharClass::Upper);
        assert_eq!(CharClass::of('7'), CharClass::Digit);
        assert_eq!(CharClass::of('_'), CharClass::Separator);
        assert_eq!(CharClass::of('-'), CharClass::Separator);
        assert_eq!(CharClass::of('\t'), CharClass::Separator);
        assert_eq!(CharClass::of('.'), CharClass::Other);
        assert_eq!(CharClass::of('é'), CharClass::Other);
    }

    #[test]
    fn test_strict_camel_boundaries() {
        assert_eq!(strict("myVariable"), ["my", "variable"]);
        assert_eq!(strict("PascalCaseString"), ["pascal", "case", "string"]);
        assert_eq!(strict("XMLHttpRequest"), ["xmlhttp", "request"]);
    }

    #[test]
    fn test_strict_separator_runs() {
        assert_eq!(strict("  Hello   World  "), ["hello", "world"]);
        assert_eq!(strict("---hello---world---"), ["hello", "world"]);
        assert_eq!(strict("a_-_ b"), ["a", "b"]);
        assert_eq!(strict("Hello  \t  World"), ["hello", "world"]);
    }

    #[test]
    fn test_strict_drops_other_chars() {
        assert_eq!(strict("Version 2.0 Release"), ["version", "20", "release"]);
        assert_eq!(strict("Hello#$%World"), ["helloworld"]);
        assert_eq!(strict("a @ b"), ["a", "b"]);
        assert_eq!(strict("café"), ["caf"]);
    }

    #[test]
    fn test_strict_boundary_ignores_dropped_chars() {
        assert_eq!(strict("a@B"), ["ab"]);
        assert_eq!(strict("File123Name"), ["file123name"]);
    }

    #[test]
    fn test_strict_empty() {
        assert!(strict("").is_empty());
        assert!(strict("   ").is_empty());
        assert!(strict("-_-").is_empty());
        assert!(strict("!!!").is_empty());
    }

    #[test]
    fn test_loose_keeps_edges() {
        assert_eq!(loose(""), [""]);
        assert_eq!(loose(" a b "), ["", "a", "b", ""]);
        assert_eq!(loose("__a"), ["", "a"]);
    }

    #[test]
    fn test_loose_keeps_other_chars_and_case() {
        assert_eq!(loose("Hello@World!"), ["Hello@World!"]);
        assert_eq!(loose("myVariable.Name"), ["my", "Variable.Name"]);
    }

    #[test]
    fn test_normalize_words_input() {
        assert_eq!(normalize_words("hello world").as_slice(), ["hello", "world"]);
        assert!(normalize_words(&None::<&str>).is_empty());
        assert!(normalize_words(&123).is_empty());
        assert!(normalize_words("").is_empty());
    }

    #[test]
    fn test_words_accessors() {
        let words = normalize_words("user_profile_page");
        assert_eq!(words.len(), 3);
        assert_eq!(words.join("/"), "user/profile/page");
        assert_eq!(words.iter().next().map(String::as_str), Some("user"));
        assert_eq!(words.first().map(String::as_str), Some("user"));

        let owned: Vec<String> = words.into();
        assert_eq!(owned, ["user", "profile", "page"]);
    }

    #[test]
    fn test_words_serialize_as_list() {
        let words = normalize_words("helloWorld");
        assert_eq!(
            serde_json::to_string(&words).unwrap(),
            r#"["hello","world"]"#
        );
    }
}
