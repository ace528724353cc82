//! This program prints every generalized abbreviation of each word given on
//! the command line, one per line, followed by a summary on standard error.
//!
//! Run it with `RUST_LOG=debug` to see the events emitted by the enumerator.
//! A word of $n$ characters has $2^n$ abbreviations, so keep the words short.

use generalized_abbreviations::{abbreviations, count};
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for word in std::env::args().skip(1) {
        let mut printed = 0usize;
        for abbreviation in abbreviations(&word) {
            writeln!(out, "{abbreviation}")?;
            printed += 1;
        }
        debug_assert_eq!(Some(printed), count(word.chars().count()));
        eprintln!("{word}: {printed} abbreviations");
    }
    out.flush()
}
