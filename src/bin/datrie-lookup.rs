//! datrie-lookup - Build a dictionary from a word list, then answer queries.
//!
//! Since a built [`datrie::DoubleArray`] is not persisted to disk (that is
//! out of scope for this crate), this tool folds what would otherwise be
//! two steps - build, then load-and-query - into one process: it builds
//! from `dictionary` and then answers one query per line from stdin.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "datrie-lookup")]
#[command(about = "Build a dictionary from a word list and look up queries from stdin")]
#[command(version)]
struct Args {
    /// Word list to build the dictionary from, one word per line
    dictionary: PathBuf,
}

fn main() {
    let args = Args::parse();

    let keyset = datrie::corpus::read_words_from_path(&args.dictionary).unwrap_or_else(|e| {
        eprintln!(
            "error: failed to read corpus from {}: {}",
            args.dictionary.display(),
            e
        );
        process::exit(10);
    });

    let dict = keyset.build().unwrap_or_else(|e| {
        eprintln!("error: failed to build dictionary: {}", e);
        process::exit(20);
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| {
            eprintln!("error: failed to read query: {}", e);
            process::exit(30);
        });

        let record_no = dict.lookup(line.as_bytes());
        if let Err(e) = writeln!(stdout, "{}\t{}", record_no, line) {
            eprintln!("error: failed to write output: {}", e);
            process::exit(31);
        }
    }
}
