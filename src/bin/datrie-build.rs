//! datrie-build - Build a double-array dictionary and report its size.
//!
//! Reads one word per line from a file (or stdin) and builds a
//! [`datrie::DoubleArray`], then prints size statistics to stderr. There is
//! no `-o` option: a built dictionary is not persisted to disk, so this
//! tool exists mainly to validate a corpus and see how large it lowers to.

use clap::Parser;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "datrie-build")]
#[command(about = "Build a double-array dictionary from a word list and report its size")]
#[command(version)]
struct Args {
    /// Input file (default: stdin)
    file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let keyset = match args.file {
        Some(path) => datrie::corpus::read_words_from_path(&path).unwrap_or_else(|e| {
            eprintln!("error: failed to read corpus from {}: {}", path.display(), e);
            process::exit(10);
        }),
        None => {
            let stdin = io::stdin();
            datrie::corpus::read_words(BufReader::new(stdin.lock())).unwrap_or_else(|e| {
                eprintln!("error: failed to read corpus from stdin: {}", e);
                process::exit(10);
            })
        }
    };

    eprintln!("#words: {}", keyset.len());

    let dict = keyset.build().unwrap_or_else(|e| {
        eprintln!("error: failed to build dictionary: {}", e);
        process::exit(20);
    });

    eprintln!("#slots: {}", dict.size_in_slots());
    eprintln!("#tails: {}", dict.tails_count());
    eprintln!("base bytes: {}", dict.base_memory_bytes());
    eprintln!("check bytes: {}", dict.check_memory_bytes());
    eprintln!("tails bytes: {}", dict.tails_memory_bytes());
    eprintln!("total bytes: {}", dict.total_memory_bytes());
}
