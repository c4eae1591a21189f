//! Spell out integers as English words.
//!
//! ```
//! assert_eq!(english_numerals::translate(1024).unwrap(), "one thousand, twenty four");
//! assert_eq!(
//!     english_numerals::translate_str("-1,234").unwrap(),
//!     "minus one thousand, two hundreds thirty four"
//! );
//! ```
//!
//! Numbers are read in groups of three digits. Each group is spelled out on
//! its own and followed by its scale word ("thousand", "million", ...), which
//! is singular only when the group is exactly one. Hundreds follow the same
//! rule, so 200 reads "two hundreds".

pub mod digits;
pub mod error;
pub mod group;
pub mod loader;
pub mod numeral;
pub mod scale;
pub mod translator;


// Re-export main types for convenient access
pub use digits::nth_digit;
pub use error::{NumeralError, NumeralResult};
pub use group::translate_group;
pub use loader::load_scale_table_from_file;
pub use numeral::Numeral;
pub use scale::{ScaleLevel, ScaleTable};
pub use translator::{NumberTranslator, Spellable};

/// Translate a non-negative integer with the English scale table.
pub fn translate(number: i64) -> NumeralResult<String> {
    NumberTranslator::default().translate(number)
}

/// Translate a numeral string (optionally signed and comma-grouped) with
/// the English scale table.
pub fn translate_str(numeral: &str) -> NumeralResult<String> {
    NumberTranslator::default().translate_str(numeral)
}
