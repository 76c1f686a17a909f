use crate::{zq::Modulus, Error, Result};

/// Decode `value`, a numeral written in `base`, into an element of the field.
///
/// Digits are `0-9` followed by the letters `a-z` in either case, so the base
/// must lie in `[2, 36]`. The numeral is accumulated with Horner's rule and
/// reduced after every digit: the result is the numeral's value modulo `p`,
/// not the exact integer. The empty numeral decodes to 0.
pub fn decode(value: &str, base: u32, q: &Modulus) -> Result<u64> {
    if !(2..=36).contains(&base) {
        return Err(Error::InvalidBase(base));
    }
    value
        .chars()
        .enumerate()
        .try_fold(0u64, |acc, (position, character)| {
            // Only ASCII digits and letters have a radix-36 value.
            let digit = character.to_digit(36).ok_or(Error::InvalidDigit {
                character,
                position,
            })?;
            if digit >= base {
                return Err(Error::DigitOutOfRange {
                    character,
                    digit,
                    base,
                });
            }
            Ok(q.add(q.mul(acc, base as u64), digit as u64))
        })
}
