use crate::Token;
use thiserror::Error;

/// The reason why a text is not an abbreviation of a given word.
///
/// Offsets count characters (not bytes) from the start of the abbreviation.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum DecodeError {
    #[error("run length at offset {offset} has a leading zero")]
    LeadingZero { offset: usize },
    #[error("run length at offset {offset} does not fit in usize")]
    Overflow { offset: usize },
    #[error("literal {found:?} at offset {offset} does not match {expected:?}")]
    Mismatch {
        offset: usize,
        expected: char,
        found: char,
    },
    #[error("token at offset {offset} reaches past the end of a {len}-character word")]
    Overrun { offset: usize, len: usize },
    #[error("abbreviation covers only {covered} of {len} characters")]
    Truncated { covered: usize, len: usize },
}

/// Reads `abbreviation` as an abbreviation of `word` and returns its tokens.
///
/// Every maximal sequence of ASCII digits is one run length, and every other
/// character is a literal that must equal the character of `word` under the
/// cursor. As a consequence, two runs can never be adjacent in a decodable
/// text. Words that themselves contain ASCII digits are read by the same rule,
/// so their literal digits decode as runs.
///
/// # Examples
///
/// ```
/// use generalized_abbreviations::{decode, DecodeError, Token};
///
/// assert_eq!(
///     decode("word", "w2d"),
///     Ok(vec![Token::Literal('w'), Token::Skip(2), Token::Literal('d')])
/// );
/// assert_eq!(
///     decode("word", "w02d"),
///     Err(DecodeError::LeadingZero { offset: 1 })
/// );
/// ```
pub fn decode(word: &str, abbreviation: &str) -> Result<Vec<Token>, DecodeError> {
    let word: Vec<char> = word.chars().collect();
    let len = word.len();
    let mut tokens = Vec::new();
    let mut position: usize = 0;
    let mut chars = abbreviation.chars().enumerate().peekable();
    while let Some((offset, c)) = chars.next() {
        if let Some(digit) = c.to_digit(10) {
            if digit == 0 {
                return Err(DecodeError::LeadingZero { offset });
            }
            let mut width = digit as usize;
            while let Some(digit) = chars.peek().and_then(|&(_, c)| c.to_digit(10)) {
                chars.next();
                width = width
                    .checked_mul(10)
                    .and_then(|w| w.checked_add(digit as usize))
                    .ok_or(DecodeError::Overflow { offset })?;
            }
            position = position
                .checked_add(width)
                .filter(|&end| end <= len)
                .ok_or(DecodeError::Overrun { offset, len })?;
            tokens.push(Token::Skip(width));
        } else {
            let Some(&expected) = word.get(position) else {
                return Err(DecodeError::Overrun { offset, len });
            };
            if c != expected {
                return Err(DecodeError::Mismatch {
                    offset,
                    expected,
                    found: c,
                });
            }
            position += 1;
            tokens.push(Token::Literal(c));
        }
    }
    if position < len {
        return Err(DecodeError::Truncated {
            covered: position,
            len,
        });
    }
    Ok(tokens)
}
