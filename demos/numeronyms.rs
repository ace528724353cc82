//! A _numeronym_ such as `i18n` or `k8s` keeps the first and last letters of
//! a word and replaces everything in between by its length. This program
//! searches the abbreviations of a few words for their numeronyms, stopping
//! the enumeration as soon as one is found.

use generalized_abbreviations::{Enumerator, StackEnumerator, Token};
use std::ops::ControlFlow;

const WORDS: [&str; 4] = ["internationalization", "localization", "kubernetes", "ab"];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    for word in WORDS {
        let len = word.chars().count();
        let mut numeronym = None;
        let mut visited = 0usize;
        StackEnumerator::new(word).enumerate(|abbreviation| {
            visited += 1;
            // The numeronym is the only abbreviation with one run in the middle.
            if let [Token::Literal(_), Token::Skip(width), Token::Literal(_)] =
                abbreviation.tokens().collect::<Vec<_>>()[..]
            {
                if width + 2 == len {
                    numeronym = Some(abbreviation.to_string());
                    return ControlFlow::Break(());
                }
            }
            ControlFlow::Continue(())
        });
        match numeronym {
            Some(numeronym) => println!("{word} -> {numeronym} ({visited} visited)"),
            None => println!("{word} has no numeronym ({visited} visited)"),
        }
    }
}
