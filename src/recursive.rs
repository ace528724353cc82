use crate::token::{push_decimal, Run};
use crate::Abbreviation;
use std::ops::ControlFlow;
use tracing::debug;

/// Visits all abbreviations of a word by recursive backtracking.
///
/// The enumerator keeps a single scratch buffer holding the abbreviation on
/// the active path of the search tree. Each branch appends its token to the
/// buffer and truncates it again on return, so a string is materialized only
/// when the visitor asks for one at a leaf.
///
/// The recursion is at most $n+1$ calls deep for a word of $n$ characters.
/// For the same traversal without recursion, see [`StackEnumerator`].
///
/// [`StackEnumerator`]: crate::StackEnumerator
pub struct Enumerator {
    /// The characters of the word to abbreviate.
    word: Vec<char>,
    /// The abbreviation under construction.
    scratch: String,
    /// The runs replaced by numbers in `scratch`, ordered by start.
    runs: Vec<Run>,
}

impl crate::Enumerator for Enumerator {
    fn new(word: &str) -> Self {
        Self {
            scratch: String::with_capacity(word.len()),
            word: word.chars().collect(),
            runs: Vec::new(),
        }
    }

    fn enumerate<F>(mut self, mut visit: F)
    where
        F: FnMut(Abbreviation<'_, Self>) -> ControlFlow<()>,
    {
        debug!(len = self.word.len(), "enumerating abbreviations recursively");
        if self.expand_from(0, false, &mut visit).is_break() {
            debug!("enumeration stopped by the visitor");
        }
    }
}

impl Enumerator {
    /// Extends the current abbreviation with every way of abbreviating the
    /// suffix of the word that starts at `position`.
    ///
    /// If `must_keep_current` is set, the previous token is a number and the
    /// character at `position` must be kept; otherwise the output would contain
    /// two adjacent numbers.
    fn expand_from<F>(
        &mut self,
        position: usize,
        must_keep_current: bool,
        visit: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(Abbreviation<'_, Self>) -> ControlFlow<()>,
    {
        let len = self.word.len();
        if position == len {
            return visit(Abbreviation { enumerator: &*self });
        }
        let mark = self.scratch.len();

        // Keep the current character.
        self.scratch.push(self.word[position]);
        let flow = self.expand_from(position + 1, false, visit);
        self.scratch.truncate(mark);
        flow?;

        if must_keep_current {
            return ControlFlow::Continue(());
        }

        // Replace the characters in `position..position + width` by a number.
        for width in 1..=len - position {
            push_decimal(&mut self.scratch, width);
            self.runs.push(Run::new(position, width));
            let flow = self.expand_from(position + width, true, visit);
            self.runs.pop();
            self.scratch.truncate(mark);
            flow?;
        }
        ControlFlow::Continue(())
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
