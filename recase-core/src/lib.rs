//! Word normalization and case formatting.
//!
//! Every formatter reduces its input to a sequence of words first and then
//! joins them back together with a style-specific joiner and capitalization.
//! None of the functions in this crate fail: input that is not a string
//! produces an empty result.

mod convert;
mod input;
mod style;
mod words;

// Formatters
pub use convert::{convert, to_camel_case, to_dot_case, to_kebab_case};
// Input model
pub use input::CaseInput;
// Styles
pub use style::{Capitalization, CaseStyle, UnknownStyleError};
// Normalization
pub use words::{CharClass, Strictness, Words, normalize_words, split_segments};
