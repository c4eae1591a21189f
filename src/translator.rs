use crate::error::{NumeralError, NumeralResult};
use crate::group::translate_group;
use crate::numeral::Numeral;
use crate::scale::ScaleTable;

const ZERO: &str = "zero";
const MINUS: &str = "minus";
const GROUP_SEPARATOR: &str = ", ";

/// Values that can be spelled out by a [`NumberTranslator`].
///
/// Integers go through the integer contract (non-negative only), strings
/// through the numeral grammar (signed, optionally comma-grouped).
pub trait Spellable {
    fn spell_with(&self, translator: &NumberTranslator) -> NumeralResult<String>;
}

impl Spellable for i64 {
    fn spell_with(&self, translator: &NumberTranslator) -> NumeralResult<String> {
        translator.translate(*self)
    }
}

impl Spellable for i32 {
    fn spell_with(&self, translator: &NumberTranslator) -> NumeralResult<String> {
        translator.translate(*self as i64)
    }
}

impl Spellable for u64 {
    fn spell_with(&self, translator: &NumberTranslator) -> NumeralResult<String> {
        translator.translate_unsigned(*self)
    }
}

impl Spellable for u32 {
    fn spell_with(&self, translator: &NumberTranslator) -> NumeralResult<String> {
        translator.translate_unsigned(*self as u64)
    }
}

impl Spellable for str {
    fn spell_with(&self, translator: &NumberTranslator) -> NumeralResult<String> {
        translator.translate_str(self)
    }
}

impl Spellable for String {
    fn spell_with(&self, translator: &NumberTranslator) -> NumeralResult<String> {
        translator.translate_str(self)
    }
}

/// Spells out numbers as English words using a bound scale table.
///
/// The input is cut into chunks of three decimal digits, one per scale
/// level. Each non-zero chunk is translated on its own, followed by the
/// level's scale word, and the chunks are joined with `", "`:
///
/// ```
/// use english_numerals::NumberTranslator;
///
/// let translator = NumberTranslator::default();
/// assert_eq!(translator.translate(1024).unwrap(), "one thousand, twenty four");
/// assert_eq!(
///     translator.translate_str("-2,000,015").unwrap(),
///     "minus two millions, fifteen"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct NumberTranslator {
    scales: ScaleTable,
}

impl NumberTranslator {
    /// Bind a translator to a scale table.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the table fails validation.
    pub fn new(scales: ScaleTable) -> NumeralResult<Self> {
        scales.validate()?;
        if scales.has_named_units() {
            tracing::warn!("Units scale level has names, they will follow every units group");
        }
        tracing::debug!(
            "Created translator with {} scale levels (up to {} digits)",
            scales.len(),
            scales.max_digits()
        );
        Ok(NumberTranslator { scales })
    }

    pub fn scales(&self) -> &ScaleTable {
        &self.scales
    }

    /// Largest number of significant digits accepted.
    pub fn max_digits(&self) -> usize {
        self.scales.max_digits()
    }

    /// Largest integer accepted, `None` if it does not fit in a `u128`.
    pub fn upper_bound(&self) -> Option<u128> {
        let exponent = u32::try_from(self.max_digits()).ok()?;
        10u128.checked_pow(exponent).map(|power| power - 1)
    }

    /// Spell out any supported value, dispatching on its input contract.
    pub fn spell<T: Spellable + ?Sized>(&self, value: &T) -> NumeralResult<String> {
        value.spell_with(self)
    }

    /// Translate a raw integer.
    ///
    /// # Errors
    /// Returns `OutOfRange` for negative numbers and for numbers above
    /// [`upper_bound`](Self::upper_bound).
    pub fn translate(&self, number: i64) -> NumeralResult<String> {
        let magnitude = u64::try_from(number)
            .map_err(|_| NumeralError::out_of_range(number, self.max_digits()))?;
        self.translate_unsigned(magnitude)
    }

    /// Translate a raw unsigned integer.
    ///
    /// # Errors
    /// Returns `OutOfRange` for numbers above [`upper_bound`](Self::upper_bound).
    pub fn translate_unsigned(&self, number: u64) -> NumeralResult<String> {
        if let Some(bound) = self.upper_bound() {
            if number as u128 > bound {
                return Err(NumeralError::out_of_range(number, self.max_digits()));
            }
        }

        let mut groups = Vec::new();
        let mut rest = number;
        while rest > 0 {
            groups.push((rest % 1000) as u16);
            rest /= 1000;
        }

        self.assemble(&groups, false)
    }

    /// Translate a numeral string such as `"1,234"`, `"-56"` or `"+0"`.
    ///
    /// # Errors
    /// Returns `InvalidFormat` if the string does not match the numeral
    /// grammar and `OutOfRange` if it has more significant digits than the
    /// scale table supports.
    pub fn translate_str(&self, input: &str) -> NumeralResult<String> {
        let numeral = Numeral::parse(input)?;
        if numeral.is_zero() {
            return Ok(ZERO.to_string());
        }
        if numeral.digit_count() > self.max_digits() {
            return Err(NumeralError::out_of_range(input, self.max_digits()));
        }
        self.assemble(&numeral.groups(), numeral.negative)
    }

    /// Join the translated groups (least significant first) into the final phrase.
    fn assemble(&self, groups: &[u16], negative: bool) -> NumeralResult<String> {
        if groups.iter().all(|&group| group == 0) {
            return Ok(ZERO.to_string());
        }

        let mut phrases = Vec::with_capacity(groups.len());
        for (index, &group) in groups.iter().enumerate().rev() {
            if group == 0 {
                continue;
            }

            let level = self.scales.level(index).ok_or_else(|| {
                NumeralError::out_of_range(
                    format!("with {} groups", groups.len()),
                    self.max_digits(),
                )
            })?;

            let mut phrase = translate_group(group)?;
            let scale_word = level.name_for(group);
            if !scale_word.is_empty() {
                phrase.push(' ');
                phrase.push_str(scale_word);
            }

            tracing::trace!("Group {} at level {} -> '{}'", group, index, phrase);
            phrases.push(phrase);
        }

        let translation = phrases.join(GROUP_SEPARATOR);
        if negative {
            Ok(format!("{} {}", MINUS, translation))
        } else {
            Ok(translation)
        }
    }
}

impl Default for NumberTranslator {
    fn default() -> Self {
        NumberTranslator {
            scales: ScaleTable::english(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ScaleLevel;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, "zero")]
    #[case::one(1, "one")]
    #[case::twenty_one(21, "twenty one")]
    #[case::teen(15, "fifteen")]
    #[case::one_hundred(100, "one hundred")]
    #[case::two_hundreds(200, "two hundreds")]
    #[case::one_thousand(1000, "one thousand")]
    #[case::two_thousands(2000, "two thousands")]
    #[case::one_thousand_twenty_four(1024, "one thousand, twenty four")]
    #[case::teen_thousands(15_000, "fifteen thousands")]
    #[case::one_million(1_000_000, "one million")]
    #[case::million_and_one(1_000_001, "one million, one")]
    #[case::skip_middle(5_000_000_300, "five billions, three hundreds")]
    #[case::one_of_each(1_001_001_001_001, "one trillion, one billion, one million, one thousand, one")]
    #[case::largest(
        999_999_999_999_999,
        "nine hundreds ninety nine trillions, nine hundreds ninety nine billions, \
         nine hundreds ninety nine millions, nine hundreds ninety nine thousands, \
         nine hundreds ninety nine"
    )]
    fn test_translate(#[case] number: i64, #[case] expected: &str) {
        let translator = NumberTranslator::default();
        assert_eq!(translator.translate(number).unwrap(), expected);
    }

    #[rstest]
    #[case::zero("0", "zero")]
    #[case::minus_zero("-0", "zero")]
    #[case::plus_zero("+0", "zero")]
    #[case::grouped("1,234", "one thousand, two hundreds thirty four")]
    #[case::negative("-1,234", "minus one thousand, two hundreds thirty four")]
    #[case::plus("+42", "forty two")]
    #[case::ungrouped("1000000", "one million")]
    #[case::max("999,999,999,999,999", "nine hundreds ninety nine trillions, nine hundreds ninety nine billions, nine hundreds ninety nine millions, nine hundreds ninety nine thousands, nine hundreds ninety nine")]
    fn test_translate_str(#[case] input: &str, #[case] expected: &str) {
        let translator = NumberTranslator::default();
        assert_eq!(translator.translate_str(input).unwrap(), expected);
    }

    #[test]
    fn test_named_units_follow_units_group() {
        let scales = ScaleTable::from_json_str(
            r#"{ "levels": [
                { "singular": "unit", "plural": "units" },
                { "singular": "thousand", "plural": "thousands" }
            ] }"#,
        )
        .unwrap();
        let translator = NumberTranslator::new(scales).unwrap();
        assert!(translator.scales().has_named_units());
        assert_eq!(translator.translate(1_001).unwrap(), "one thousand, one unit");
        assert_eq!(translator.translate(2_000).unwrap(), "two thousands");
    }

    #[test]
    fn test_signed_zero_reads_zero() {
        let translator = NumberTranslator::default();
        for input in ["0", "-0", "+0"] {
            assert_eq!(translator.translate_str(input).unwrap(), "zero");
        }
    }

    #[test]
    fn test_negative_integer_is_out_of_range() {
        let translator = NumberTranslator::default();
        assert!(matches!(
            translator.translate(-1),
            Err(NumeralError::OutOfRange { .. })
        ));
        assert!(matches!(
            translator.translate(i64::MIN),
            Err(NumeralError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_integer_above_bound_is_out_of_range() {
        let translator = NumberTranslator::default();
        assert!(matches!(
            translator.translate(1_000_000_000_000_000),
            Err(NumeralError::OutOfRange { max_digits: 15, .. })
        ));
        assert!(matches!(
            translator.translate_unsigned(u64::MAX),
            Err(NumeralError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_string_above_bound_is_out_of_range() {
        let translator = NumberTranslator::default();
        assert!(matches!(
            translator.translate_str("1,000,000,000,000,000"),
            Err(NumeralError::OutOfRange { .. })
        ));
        assert!(matches!(
            translator.translate_str("-12345678901234567890"),
            Err(NumeralError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_malformed_string_is_invalid_format() {
        let translator = NumberTranslator::default();
        for input in ["0123", "1,23", "-", "12,345,6"] {
            assert!(
                matches!(
                    translator.translate_str(input),
                    Err(NumeralError::InvalidFormat { .. })
                ),
                "{} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_upper_bound() {
        let translator = NumberTranslator::default();
        assert_eq!(translator.max_digits(), 15);
        assert_eq!(translator.upper_bound(), Some(999_999_999_999_999));
        assert_eq!(translator.scales(), &ScaleTable::english());
    }

    #[test]
    fn test_extended_scale_table() {
        let mut scales = ScaleTable::english();
        scales
            .levels
            .push(ScaleLevel::new("quadrillion", "quadrillions"));
        let translator = NumberTranslator::new(scales).unwrap();

        assert_eq!(translator.max_digits(), 18);
        assert_eq!(
            translator.translate(1_000_000_000_000_000).unwrap(),
            "one quadrillion"
        );
        assert_eq!(
            translator.translate_str("3,000,000,000,000,007").unwrap(),
            "three quadrillions, seven"
        );
    }

    #[test]
    fn test_short_scale_table_limits_range() {
        let scales = ScaleTable::new(vec![
            ScaleLevel::new("", ""),
            ScaleLevel::new("thousand", "thousands"),
        ])
        .unwrap();
        let translator = NumberTranslator::new(scales).unwrap();

        assert_eq!(translator.upper_bound(), Some(999_999));
        assert_eq!(
            translator.translate(999_999).unwrap(),
            "nine hundreds ninety nine thousands, nine hundreds ninety nine"
        );
        assert!(matches!(
            translator.translate(1_000_000),
            Err(NumeralError::OutOfRange { max_digits: 6, .. })
        ));
    }

    #[test]
    fn test_upper_bound_beyond_u128() {
        let levels = (0..14)
            .map(|i| {
                if i == 0 {
                    ScaleLevel::new("", "")
                } else {
                    ScaleLevel::new(&format!("scale{}", i), &format!("scales{}", i))
                }
            })
            .collect();
        let translator = NumberTranslator::new(ScaleTable { levels }).unwrap();
        assert_eq!(translator.upper_bound(), None);
        assert_eq!(
            translator.translate_unsigned(u64::MAX).unwrap().split(", ").count(),
            7
        );
    }

    #[test]
    fn test_spell_dispatches_on_contract() {
        let translator = NumberTranslator::default();
        assert_eq!(translator.spell(&12i64).unwrap(), "twelve");
        assert_eq!(translator.spell(&12u32).unwrap(), "twelve");
        assert_eq!(translator.spell("-12").unwrap(), "minus twelve");
        assert_eq!(
            translator.spell(&"1,000".to_string()).unwrap(),
            "one thousand"
        );
        assert!(matches!(
            translator.spell(&-12i32),
            Err(NumeralError::OutOfRange { .. })
        ));
    }
}
