use std::fmt::{self, Write};
use std::iter::FusedIterator;

/// A contiguous stretch of the word that an abbreviation replaces with the
/// decimal representation of its width.
///
/// # Invariant
///
/// `width` is positive, so a run always covers at least one character.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Run {
    start: usize,
    width: usize,
}

impl Run {
    /// Creates a run covering `width` characters from position `start`.
    pub(crate) fn new(start: usize, width: usize) -> Self {
        debug_assert!(width > 0, "a run must cover at least one character");
        Self { start, width }
    }

    /// Returns the position of the first character covered by the run.
    #[must_use]
    pub const fn start(self) -> usize {
        self.start
    }

    /// Returns the number of characters covered by the run.
    #[must_use]
    pub const fn width(self) -> usize {
        self.width
    }

    /// Returns the position just past the last character covered by the run.
    #[must_use]
    pub const fn end(self) -> usize {
        self.start + self.width
    }
}

/// One piece of an abbreviation, read from left to right.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Token {
    /// A character of the word kept as is.
    Literal(char),
    /// A run of characters replaced by its width.
    Skip(usize),
}

impl Token {
    /// Returns the number of word characters that the token accounts for.
    #[must_use]
    pub const fn coverage(self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Skip(width) => width,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(c) => write!(f, "{c}"),
            Token::Skip(width) => write!(f, "{width}"),
        }
    }
}

/// An iterator over the tokens of an abbreviation, reconstructed from the
/// word and the list of runs it replaces.
///
/// This `struct` is created by [`Abbreviation::tokens`].
///
/// [`Abbreviation::tokens`]: crate::Abbreviation::tokens
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    word: &'a [char],
    /// The runs that start at or after `position`, ordered by start.
    runs: &'a [Run],
    position: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(word: &'a [char], runs: &'a [Run]) -> Self {
        Self {
            word,
            runs,
            position: 0,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some((run, rest)) = self.runs.split_first() {
            if run.start == self.position {
                self.runs = rest;
                self.position = run.end();
                return Some(Token::Skip(run.width));
            }
        }
        let c = *self.word.get(self.position)?;
        self.position += 1;
        Some(Token::Literal(c))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Appends the decimal digits of `n` to `buf`.
pub(crate) fn push_decimal(buf: &mut String, n: usize) {
    // Writing into a `String` never fails.
    let _ = write!(buf, "{n}");
}
