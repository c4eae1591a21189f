use crate::digits::{is_teen, nth_digit, teen_word, tens_word, unit_word};
use crate::error::{NumeralError, NumeralResult};

/// Largest value a single group can hold.
pub const MAX_GROUP: u16 = 999;

fn hundreds_phrase(group: u16) -> NumeralResult<String> {
    let hundreds = nth_digit(group as u64, 2);
    match hundreds {
        0 => Ok(String::new()),
        1 => Ok(format!("{} hundred", unit_word(hundreds)?)),
        // "hundreds" for anything but one, e.g. "two hundreds"
        _ => Ok(format!("{} hundreds", unit_word(hundreds)?)),
    }
}

fn push_segment(phrase: &mut String, segment: &str) {
    if segment.is_empty() {
        return;
    }
    if !phrase.is_empty() {
        phrase.push(' ');
    }
    phrase.push_str(segment);
}

/// Translate a single 3-digit group (0..=999) into English words.
///
/// The group is translated independently of its scale level, so the
/// result never carries "thousand", "million" and the like. A group of
/// 0 translates to the empty string.
///
/// # Errors
/// Returns `OutOfRange` if `group` is larger than 999.
pub fn translate_group(group: u16) -> NumeralResult<String> {
    if group > MAX_GROUP {
        return Err(NumeralError::out_of_range(group, 3));
    }

    let mut phrase = hundreds_phrase(group)?;

    // Teens are not composed from tens and units
    let last_two = group % 100;
    if is_teen(last_two) {
        push_segment(&mut phrase, teen_word(last_two)?);
        return Ok(phrase);
    }

    push_segment(&mut phrase, tens_word(nth_digit(group as u64, 1))?);

    let units = nth_digit(group as u64, 0);
    if units != 0 {
        push_segment(&mut phrase, unit_word(units)?);
    }

    Ok(phrase)
}
