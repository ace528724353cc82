use crate::token::{push_decimal, Run};
use crate::Abbreviation;
use std::iter::FusedIterator;
use std::ops::ControlFlow;
use tracing::debug;

/// A level of the search tree that still has branches left to explore.
#[derive(Debug, Copy, Clone)]
struct Frame {
    /// The position of the first character of the word that is not yet
    /// accounted for at this level.
    position: usize,
    /// Whether the previous token is a number, in which case the character
    /// at `position` cannot start another run.
    must_keep_current: bool,
    /// The next branch to explore: `0` keeps the character at `position`,
    /// and a positive value $w$ replaces the next $w$ characters by $w$.
    next_width: usize,
    /// The length of the scratch buffer when this level was entered.
    scratch_mark: usize,
    /// The number of runs when this level was entered.
    runs_mark: usize,
}

/// Visits all abbreviations of a word by backtracking with an explicit stack.
///
/// This structure explores the same search tree as [`RecursiveEnumerator`]
/// and in the same order, but it keeps the state of every level in a
/// frame instead of the call stack. The traversal can therefore be
/// suspended at any leaf, which is what the [`Abbreviations`] iterator does.
///
/// [`RecursiveEnumerator`]: crate::RecursiveEnumerator
pub struct Enumerator {
    /// The characters of the word to abbreviate.
    word: Vec<char>,
    /// The abbreviation under construction.
    scratch: String,
    /// The runs replaced by numbers in `scratch`, ordered by start.
    runs: Vec<Run>,
    /// The levels of the search tree on the active path.
    frames: Vec<Frame>,
    /// Whether the root of the search tree has been entered.
    started: bool,
}

impl crate::Enumerator for Enumerator {
    fn new(word: &str) -> Self {
        Self {
            scratch: String::with_capacity(word.len()),
            word: word.chars().collect(),
            runs: Vec::new(),
            frames: Vec::new(),
            started: false,
        }
    }

    fn enumerate<F>(mut self, mut visit: F)
    where
        F: FnMut(Abbreviation<'_, Self>) -> ControlFlow<()>,
    {
        debug!(len = self.word.len(), "enumerating abbreviations with a stack");
        while self.advance() {
            if visit(Abbreviation { enumerator: &self }).is_break() {
                debug!("enumeration stopped by the visitor");
                return;
            }
        }
    }
}

impl Enumerator {
    /// Moves to the next leaf of the search tree, leaving the corresponding
    /// abbreviation in the scratch buffer.
    ///
    /// Returns `false` once the entire tree has been explored, and on every
    /// call after that.
    fn advance(&mut self) -> bool {
        if !self.started {
            self.started = true;
            if self.enter(0, false) {
                return true;
            }
        }
        while let Some(&frame) = self.frames.last() {
            // Undo the branch explored last at this level.
            self.scratch.truncate(frame.scratch_mark);
            self.runs.truncate(frame.runs_mark);

            let remaining = self.word.len() - frame.position;
            let (position, must_keep_current) = if frame.next_width == 0 {
                self.scratch.push(self.word[frame.position]);
                (frame.position + 1, false)
            } else if !frame.must_keep_current && frame.next_width <= remaining {
                push_decimal(&mut self.scratch, frame.next_width);
                self.runs.push(Run::new(frame.position, frame.next_width));
                (frame.position + frame.next_width, true)
            } else {
                // All branches at this level have been tried; backtrack.
                self.frames.pop();
                continue;
            };
            if let Some(top) = self.frames.last_mut() {
                top.next_width += 1;
            }
            if self.enter(position, must_keep_current) {
                return true;
            }
        }
        false
    }

    /// Enters the level of the search tree at `position`, and returns whether
    /// it is a leaf.
    fn enter(&mut self, position: usize, must_keep_current: bool) -> bool {
        if position == self.word.len() {
            return true;
        }
        self.frames.push(Frame {
            position,
            must_keep_current,
            next_width: 0,
            scratch_mark: self.scratch.len(),
            runs_mark: self.runs.len(),
        });
        false
    }
}

impl crate::private::Enumerator for Enumerator {
    fn word(&self) -> &[char] {
        &self.word
    }

    fn scratch(&self) -> &str {
        &self.scratch
    }

    fn runs(&self) -> &[Run] {
        &self.runs
    }
}

/// An iterator over the abbreviations of a word, produced one at a time.
///
/// This `struct` is created by [`abbreviations`]. It yields the same strings
/// as [`generate`], in the same order.
///
/// [`abbreviations`]: crate::abbreviations
/// [`generate`]: crate::generate
pub struct Abbreviations {
    enumerator: Enumerator,
    /// The number of abbreviations not yet yielded, if it fits in a `usize`.
    remaining: Option<usize>,
}

impl Abbreviations {
    pub(crate) fn new(word: &str) -> Self {
        let enumerator = <Enumerator as crate::Enumerator>::new(word);
        let remaining = crate::count(enumerator.word.len());
        Self {
            enumerator,
            remaining,
        }
    }
}

impl Iterator for Abbreviations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if !self.enumerator.advance() {
            return None;
        }
        if let Some(remaining) = &mut self.remaining {
            *remaining -= 1;
        }
        Some(self.enumerator.scratch.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Abbreviations {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Enumerator as _;

    #[test]
    fn empty_word() {
        let mut iter = Abbreviations::new("");
        assert_eq!(iter.size_hint(), (1, Some(1)));
        assert_eq!(iter.next().as_deref(), Some(""));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn traversal_order() {
        let results: Vec<_> = Abbreviations::new("abc").collect();
        assert_eq!(
            results,
            ["abc", "ab1", "a1c", "a2", "1bc", "1b1", "2c", "3"]
        );
    }

    #[test]
    fn exact_size_hint() {
        let mut iter = Abbreviations::new("word");
        assert_eq!(iter.size_hint(), (16, Some(16)));
        iter.next();
        iter.next();
        assert_eq!(iter.size_hint(), (14, Some(14)));
        assert_eq!(iter.by_ref().count(), 14);
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn unbounded_size_hint_when_count_overflows() {
        let word = "a".repeat(usize::BITS as usize);
        assert_eq!(Abbreviations::new(&word).size_hint(), (usize::MAX, None));
    }

    #[test]
    fn frames_are_released_after_exhaustion() {
        let mut enumerator = Enumerator::new("abcd");
        let mut count = 0;
        while enumerator.advance() {
            assert!(enumerator.frames.len() <= 4);
            count += 1;
        }
        assert_eq!(count, 16);
        assert!(enumerator.frames.is_empty());
        assert!(!enumerator.advance());
    }

    #[test]
    fn runs_follow_the_scratch_buffer() {
        Enumerator::new("abcdefg").enumerate(|abbreviation| {
            let text: String = abbreviation.tokens().map(|t| t.to_string()).collect();
            assert_eq!(text, abbreviation.as_str());
            ControlFlow::Continue(())
        });
    }

    #[test]
    fn stops_when_the_visitor_breaks() {
        let mut seen = 0;
        Enumerator::new("abcdef").enumerate(|_| {
            seen += 1;
            if seen == 10 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(seen, 10);
    }
}
