//! Case formatters.

use crate::{Capitalization, CaseInput, CaseStyle, split_segments};

/// Convert `input` to the given style.
///
/// The style picks the segmentation strictness, the joiner and the
/// capitalization rule. Non-string input always converts to `""`.
pub fn convert<I: CaseInput + ?Sized>(style: CaseStyle, input: &I) -> String {
    let Some(text) = input.as_case_str() else {
        return String::new();
    };
    let segments = split_segments(text, style.strictness());
    join(&segments, style.joiner(), style.capitalization())
}

/// Convert to camelCase (e.g., "hello-world-example" -> "helloWorldExample").
pub fn to_camel_case<I: CaseInput + ?Sized>(input: &I) -> String {
    convert(CaseStyle::Camel, input)
}

/// Convert to kebab-case (e.g., "Hello World" -> "hello-world").
///
/// Punctuation is dropped without splitting words, so `"Version 2.0"`
/// becomes `"version-20"`.
pub fn to_kebab_case<I: CaseInput + ?Sized>(input: &I) -> String {
    convert(CaseStyle::Kebab, input)
}

/// Convert to dot.case (e.g., "myVariableName" -> "my.variable.name").
///
/// Unlike the other formatters this one does not trim, keeps punctuation,
/// and turns leading or trailing separators into dots (`" a b "` -> `".a.b."`).
pub fn to_dot_case<I: CaseInput + ?Sized>(input: &I) -> String {
    convert(CaseStyle::Dot, input)
}

fn join(segments: &[String], joiner: Option<char>, capitalization: Capitalization) -> String {
    let mut out = String::with_capacity(segments.iter().map(|s| s.len() + 1).sum());

    for (i, segment) in segments.iter().enumerate() {
        if let Some(joiner) = joiner.filter(|_| i > 0) {
            out.push(joiner);
        }
        match capitalization {
            Capitalization::Camel if i > 0 => push_capitalized(&mut out, segment),
            _ => out.push_str(segment),
        }
    }

    match capitalization {
        // Lowercase the joined text rather than each segment so
        // context-sensitive mappings see their real neighbors.
        Capitalization::Lower => out.to_lowercase(),
        Capitalization::Camel => out,
    }
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("hello-world-example"), "helloWorldExample");
        assert_eq!(to_camel_case("hello_world_example"), "helloWorldExample");
        assert_eq!(to_camel_case("hello world example"), "helloWorldExample");
        assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
        assert_eq!(to_camel_case("SCREAMING_SNAKE_CASE"), "screamingSnakeCase");
        assert_eq!(to_camel_case("version 2 release"), "version2Release");
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_camel_case(&None::<String>), "");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("Hello World"), "hello-world");
        assert_eq!(to_kebab_case("HelloWorld"), "hello-world");
        assert_eq!(to_kebab_case("hello_world"), "hello-world");
        assert_eq!(to_kebab_case("CamelCaseString"), "camel-case-string");
        assert_eq!(to_kebab_case("getUserProfileData"), "get-user-profile-data");
        assert_eq!(to_kebab_case("Hello@World!"), "helloworld");
        assert_eq!(to_kebab_case("   "), "");
    }

    #[test]
    fn test_to_dot_case() {
        assert_eq!(to_dot_case("myVariableName"), "my.variable.name");
        assert_eq!(to_dot_case("my_variable_name"), "my.variable.name");
        assert_eq!(to_dot_case("my-variable-name"), "my.variable.name");
        assert_eq!(to_dot_case("my variable name"), "my.variable.name");
    }

    #[test]
    fn test_to_dot_case_is_loose() {
        assert_eq!(to_dot_case(" a b "), ".a.b.");
        assert_eq!(to_dot_case("Hello@World!"), "hello@world!");
        assert_eq!(to_dot_case("a. b"), "a..b");
        assert_eq!(to_dot_case("SCREAMING_SNAKE"), "screaming.snake");
        assert_eq!(to_dot_case(""), "");
        assert_eq!(to_dot_case(&7u8), "");
    }

    #[test]
    fn test_convert_dispatch() {
        assert_eq!(convert(CaseStyle::Camel, "a b"), "aB");
        assert_eq!(convert(CaseStyle::Kebab, "a b"), "a-b");
        assert_eq!(convert(CaseStyle::Dot, "a b"), "a.b");
        assert_eq!(CaseStyle::Kebab.apply("fooBar"), "foo-bar");
    }

    #[test]
    fn test_push_capitalized() {
        let mut out = String::new();
        push_capitalized(&mut out, "wORLD");
        push_capitalized(&mut out, "");
        push_capitalized(&mut out, "2x");
        assert_eq!(out, "World2x");
    }
}
