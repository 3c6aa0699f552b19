//! Basic usage example.
//!
//! This example demonstrates building a dictionary and looking words up.

use datrie::{Keyset, NOT_FOUND};

fn main() {
    println!("=== datrie - Basic Usage Example ===\n");

    let mut keyset = Keyset::new();
    keyset.push_str("app").unwrap();
    keyset.push_str("apple").unwrap();
    keyset.push_str("application").unwrap();
    keyset.push_str("apply").unwrap();

    println!("Building dictionary with {} words...", keyset.len());

    let dict = keyset.build().unwrap();

    println!("Dictionary built successfully!");
    println!("  Slots used: {}", dict.size_in_slots());
    println!("  Tails stored: {}", dict.tails_count());
    println!("  Total size: {} bytes\n", dict.total_memory_bytes());

    println!("=== Lookup Examples ===");
    let test_words = ["apple", "apply", "apricot", "app"];
    for word in test_words {
        let record_no = dict.lookup(word.as_bytes());
        if record_no == NOT_FOUND {
            println!("  lookup(\"{}\") = not found", word);
        } else {
            println!("  lookup(\"{}\") = record {}", word, record_no);
        }
    }

    println!("\n=== Example Complete ===");
}
