use std::sync::LazyLock;

use regex::Regex;

use crate::error::{NumeralError, NumeralResult};

// Optional sign, then "0", a plain digit run without leading zero, or
// American comma grouping with a 1-3 digit leading group.
static NUMERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:0|[1-9][0-9]*|[1-9][0-9]{0,2}(?:,[0-9]{3})+)$")
        .expect("numeral grammar is a valid regex")
});

/// A numeral string that matched the grammar, split into sign and digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    pub negative: bool,
    /// Significant digits, most significant first, without sign or commas.
    pub digits: String,
}

impl Numeral {
    /// Validate `input` against the numeral grammar and strip sign and commas.
    ///
    /// # Errors
    /// Returns `InvalidFormat` for anything the grammar rejects, e.g.
    /// `"0123"`, `"1,23"`, `"-"` or `"12,345,6"`.
    pub fn parse(input: &str) -> NumeralResult<Self> {
        if !NUMERAL_RE.is_match(input) {
            return Err(NumeralError::InvalidFormat {
                input: input.to_string(),
            });
        }

        let negative = input.starts_with('-');
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

        Ok(Numeral { negative, digits })
    }

    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Split the digits into 3-digit groups, least significant group first.
    pub fn groups(&self) -> Vec<u16> {
        self.digits
            .as_bytes()
            .rchunks(3)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u16, |value, digit| value * 10 + (digit - b'0') as u16)
            })
            .collect()
    }
}
