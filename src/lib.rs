//! This crate enumerates the _generalized abbreviations_ of a word.
//!
//! Suppose we're given a word $w$ of $n$ characters. An abbreviation of $w$ is
//! obtained by choosing zero or more disjoint runs of consecutive characters
//! and replacing each run by the decimal representation of its length, in such
//! a way that no two chosen runs are adjacent. For example, the abbreviations
//! of `"word"` include `"word"` itself, `"4"`, `"w3"`, `"1ord"` and `"w1r1"`,
//! but not `"22"`: the runs `wo` and `rd` touch each other, and the result
//! would be indistinguishable from a single run of 22 characters. The
//! correspondence between abbreviations and subsets of replaced positions is
//! one to one (maximal stretches of replaced positions form the runs), so
//! every word of length $n$ has exactly $2^n$ abbreviations; see [`count`].
//!
//! The search tree explored by this crate has a level for every position $p$
//! of the word that has not been accounted for yet. Its branches either keep
//! the character at $p$, or replace the next $1,2,\dots,n-p$ characters by
//! a number; in the latter case the next level must keep its character.
//! This branching factor of $O(n)$ makes the tree considerably larger than
//! the $2^n$ leaves would suggest, so the input words are expected to be
//! small. The abbreviation under construction lives in a single scratch
//! buffer that grows when the search advances and is truncated when it
//! backtracks; a string is materialized only at the leaves.
//!
//! The following structures and functions are the most important pieces:
//! - [`generate`] returns all abbreviations of a word in a vector.
//! - [`abbreviations`] yields them one at a time, lazily.
//! - [`RecursiveEnumerator`] visits every abbreviation by recursive
//!   backtracking, and lets the visitor inspect its [tokens] without
//!   allocating.
//! - [`StackEnumerator`] adheres to the same conventions, but keeps the
//!   state of the search in an explicit stack instead of the call stack.
//! - [`decode`] checks whether a text is an abbreviation of a given word.
//!
//! All of them explore the branches in the same order: keeping a character
//! comes first, and runs are tried in increasing order of length.
//!
//! ```
//! use generalized_abbreviations::generate;
//!
//! assert_eq!(
//!     generate("abc"),
//!     ["abc", "ab1", "a1c", "a2", "1bc", "1b1", "2c", "3"]
//! );
//! ```
//!
//! [tokens]: Token

mod decode;
mod recursive;
mod stack;
mod token;

pub use decode::{decode, DecodeError};
pub use recursive::Enumerator as RecursiveEnumerator;
pub use stack::{Abbreviations, Enumerator as StackEnumerator};
pub use token::{Run, Token, Tokens};
use std::fmt;
use std::ops::ControlFlow;
use tracing::debug;

/// Visits all [abbreviations] of a word.
///
/// See the [crate-level documentation](`crate`) for details.
///
/// This trait is sealed, meaning that it cannot be implemented outside of the
/// `generalized-abbreviations` crate.
///
/// # Examples
///
/// The following program finds the abbreviations of `"word"` that keep
/// exactly two of its letters:
///
/// ```
/// use std::ops::ControlFlow;
/// use generalized_abbreviations::{Enumerator, RecursiveEnumerator};
///
/// let mut found = Vec::new();
/// RecursiveEnumerator::new("word").enumerate(|abbreviation| {
///     if abbreviation.literal_count() == 2 {
///         found.push(abbreviation.to_string());
///     }
///     ControlFlow::Continue(())
/// });
/// assert_eq!(found, ["wo2", "w1r1", "w2d", "1or1", "1o1d", "2rd"]);
/// ```
///
/// [abbreviations]: `Abbreviation`
pub trait Enumerator: private::Enumerator + Sized {
    /// Creates an enumerator for the abbreviations of the given word.
    fn new(word: &str) -> Self;

    /// Calls a closure on each abbreviation of the word.
    ///
    /// The enumeration continues until the closure returns
    /// [`ControlFlow::Break`] or all abbreviations have been visited,
    /// whichever occurs first.
    fn enumerate<F>(self, visit: F)
    where
        F: FnMut(Abbreviation<'_, Self>) -> ControlFlow<()>;
}

pub(crate) mod private {
    use crate::token::Run;

    pub trait Enumerator {
        /// Returns the characters of the word being abbreviated.
        fn word(&self) -> &[char];

        /// Returns the abbreviation on the active path of the search tree.
        fn scratch(&self) -> &str;

        /// Returns the runs replaced by numbers in [`Self::scratch`],
        /// ordered by start.
        fn runs(&self) -> &[Run];
    }
}

/// An abbreviation visited by an [`Enumerator`].
///
/// The value borrows the enumerator's scratch buffers, so it can only be
/// inspected inside the visiting closure. Use [`ToString::to_string`] to keep
/// a copy of the text.
pub struct Abbreviation<'s, E> {
    /// The enumerator that reached the abbreviation.
    enumerator: &'s E,
}

impl<'s, E: Enumerator> Abbreviation<'s, E> {
    /// Returns the text of the abbreviation.
    pub fn as_str(&self) -> &'s str {
        self.enumerator.scratch()
    }

    /// Returns the runs of the word that the abbreviation replaces by numbers,
    /// ordered by start. No two of them overlap or are adjacent.
    pub fn runs(&self) -> &'s [Run] {
        self.enumerator.runs()
    }

    /// Returns an iterator over the tokens of the abbreviation.
    ///
    /// Unlike [`decode`], this method never confuses a literal digit of the
    /// word with a run.
    pub fn tokens(&self) -> Tokens<'s> {
        Tokens::new(self.enumerator.word(), self.enumerator.runs())
    }

    /// Returns the number of characters of the word replaced by numbers.
    pub fn abbreviated_count(&self) -> usize {
        self.runs().iter().map(|run| run.width()).sum()
    }

    /// Returns the number of characters of the word kept as they are.
    pub fn literal_count(&self) -> usize {
        self.enumerator.word().len() - self.abbreviated_count()
    }
}

impl<E: Enumerator> fmt::Display for Abbreviation<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns every abbreviation of a word, in the order described in the
/// [crate-level documentation](`crate`).
///
/// The empty word has exactly one abbreviation, the empty string. Words that
/// contain ASCII digits may produce the same text from different runs; for
/// example, both abbreviations of `"1"` are `"1"`.
///
/// # Examples
///
/// ```
/// use generalized_abbreviations::generate;
///
/// assert_eq!(generate(""), [""]);
/// assert_eq!(generate("a"), ["a", "1"]);
///
/// let results = generate("word");
/// assert_eq!(results.len(), 16);
/// assert!(results.iter().any(|r| r == "w1r1"));
/// ```
pub fn generate(word: &str) -> Vec<String> {
    let mut results = Vec::new();
    RecursiveEnumerator::new(word).enumerate(|abbreviation| {
        results.push(abbreviation.to_string());
        ControlFlow::Continue(())
    });
    debug!(count = results.len(), "generated abbreviations");
    results
}

/// Returns an iterator over the abbreviations of a word.
///
/// The iterator yields the same strings as [`generate`], in the same order,
/// but it computes them on demand.
///
/// # Examples
///
/// ```
/// use generalized_abbreviations::abbreviations;
///
/// let mut iter = abbreviations("internationalization");
/// assert_eq!(iter.size_hint(), (1 << 20, Some(1 << 20)));
/// assert_eq!(iter.next().as_deref(), Some("internationalization"));
/// assert!(iter.any(|a| a == "i18n"));
/// ```
pub fn abbreviations(word: &str) -> Abbreviations {
    Abbreviations::new(word)
}

/// Returns the number of abbreviations of a word with `len` characters,
/// or [`None`] if it does not fit in a `usize`.
///
/// # Examples
///
/// ```
/// use generalized_abbreviations::count;
///
/// assert_eq!(count(0), Some(1));
/// assert_eq!(count(4), Some(16));
/// assert_eq!(count(usize::BITS as usize), None);
/// ```
#[must_use]
pub fn count(len: usize) -> Option<usize> {
    u32::try_from(len)
        .ok()
        .and_then(|len| 1usize.checked_shl(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_matches_generate() {
        for word in ["", "a", "ab", "abc", "abcdefg"] {
            assert_eq!(count(word.chars().count()), Some(generate(word).len()));
        }
    }

    #[test]
    fn count_overflow() {
        assert_eq!(count(usize::BITS as usize - 1), Some(1 << (usize::BITS - 1)));
        assert_eq!(count(usize::BITS as usize), None);
        assert_eq!(count(usize::MAX), None);
    }

    #[test]
    fn enumerators_agree() {
        let word = "abcdefgh";
        let mut stacked = Vec::new();
        StackEnumerator::new(word).enumerate(|abbreviation| {
            stacked.push(abbreviation.to_string());
            ControlFlow::Continue(())
        });
        let lazy: Vec<_> = abbreviations(word).collect();
        let eager = generate(word);
        assert_eq!(eager, stacked);
        assert_eq!(eager, lazy);
    }

    #[test]
    fn deterministic() {
        assert_eq!(generate("abcdef"), generate("abcdef"));
    }

    #[test]
    fn digit_words_repeat_texts() {
        assert_eq!(generate("1"), ["1", "1"]);
    }

    #[test]
    fn literal_and_abbreviated_counts() {
        RecursiveEnumerator::new("word").enumerate(|abbreviation| {
            match abbreviation.as_str() {
                "word" => {
                    assert_eq!(abbreviation.literal_count(), 4);
                    assert_eq!(abbreviation.abbreviated_count(), 0);
                    assert!(abbreviation.runs().is_empty());
                }
                "4" => {
                    assert_eq!(abbreviation.literal_count(), 0);
                    assert_eq!(abbreviation.runs(), [Run::new(0, 4)]);
                }
                "w1r1" => {
                    assert_eq!(abbreviation.literal_count(), 2);
                    assert_eq!(abbreviation.runs(), [Run::new(1, 1), Run::new(3, 1)]);
                }
                _ => {}
            }
            ControlFlow::Continue(())
        });
    }

    #[test]
    fn long_words_decode_to_their_tokens() {
        let word = "abcdefghijkl";
        let mut visited = 0;
        StackEnumerator::new(word).enumerate(|abbreviation| {
            let tokens: Vec<_> = abbreviation.tokens().collect();
            assert_eq!(decode(word, abbreviation.as_str()), Ok(tokens));
            visited += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(Some(visited), count(12));
    }
}
