//! Decimal digit extraction and the English word tables for digits.

use crate::error::{NumeralError, NumeralResult};

const DECIMAL: u64 = 10;

const UNITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

// Index 0 has no tens word.
const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const TEENS: [&str; 9] = [
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Returns the nth digit of `number`, counting from 0 at the rightmost digit.
///
/// Positions past the most significant digit yield 0.
pub fn nth_digit(number: u64, n: u32) -> u8 {
    let mut number = number;
    for _ in 0..n {
        number /= DECIMAL;
    }
    (number % DECIMAL) as u8
}

/// English word for a single digit ("zero".."nine").
pub fn unit_word(digit: u8) -> NumeralResult<&'static str> {
    UNITS
        .get(digit as usize)
        .copied()
        .ok_or(NumeralError::InvalidDigit(digit as u32))
}

/// English word for a tens digit, empty for 0.
pub fn tens_word(digit: u8) -> NumeralResult<&'static str> {
    TENS.get(digit as usize)
        .copied()
        .ok_or(NumeralError::InvalidDigit(digit as u32))
}

/// Whether `value` is in 11..=19, which has its own word.
pub fn is_teen(value: u16) -> bool {
    (11..=19).contains(&value)
}

/// English word for a value in 11..=19.
pub fn teen_word(value: u16) -> NumeralResult<&'static str> {
    if !is_teen(value) {
        return Err(NumeralError::InvalidDigit(value as u32));
    }
    Ok(TEENS[(value - 11) as usize])
}
