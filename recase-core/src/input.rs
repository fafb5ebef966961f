//! Input accepted by the formatters.

use std::borrow::Cow;

/// A value that may or may not carry text to convert.
///
/// Only string values are converted; anything else (numbers, booleans,
/// `None`, non-string TOML or JSON values) reads as no text at all and
/// formats to an empty string.
pub trait CaseInput {
    /// The text to convert, or `None` if this value is not a string.
    fn as_case_str(&self) -> Option<&str>;
}

impl CaseInput for str {
    fn as_case_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl CaseInput for String {
    fn as_case_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl CaseInput for Cow<'_, str> {
    fn as_case_str(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: CaseInput + ?Sized> CaseInput for &T {
    fn as_case_str(&self) -> Option<&str> {
        (**self).as_case_str()
    }
}

impl<T: CaseInput + ?Sized> CaseInput for Box<T> {
    fn as_case_str(&self) -> Option<&str> {
        (**self).as_case_str()
    }
}

impl<T: CaseInput> CaseInput for Option<T> {
    fn as_case_str(&self) -> Option<&str> {
        self.as_ref().and_then(CaseInput::as_case_str)
    }
}

impl CaseInput for toml::Value {
    fn as_case_str(&self) -> Option<&str> {
        match self {
            toml::Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl CaseInput for serde_json::Value {
    fn as_case_str(&self) -> Option<&str> {
        match self {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_non_text {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CaseInput for $ty {
                fn as_case_str(&self) -> Option<&str> {
                    None
                }
            }
        )*
    };
}

impl_non_text!(
    (),
    bool,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
);
