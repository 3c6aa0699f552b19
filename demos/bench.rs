//! Benchmark binary for perf profiling.
//!
//! This is NOT a criterion benchmark. It is a simple binary designed to be
//! used with `perf record` / `perf report` to identify hot spots in datrie.
//!
//! Usage:
//!   cargo build --release --example bench
//!   ./target/release/examples/bench
//!
//! Profiling:
//!   perf record -g ./target/release/examples/bench
//!   perf report

use datrie::{DoubleArray, Keyset};
use std::hint::black_box;
use std::time::Instant;

/// Number of iterations for each benchmark operation.
const ITERATIONS: usize = 1000;

/// Hiragana syllables used as building blocks.
const SYLLABLES: &[&str] = &[
    "あ", "い", "う", "え", "お", "か", "き", "く", "け", "こ", "さ", "し", "す", "せ", "そ",
    "た", "ち", "つ", "て", "と", "な", "に", "ぬ", "ね", "の", "は", "ひ", "ふ", "へ", "ほ",
    "ま", "み", "む", "め", "も", "や", "ゆ", "よ", "ら", "り", "る", "れ", "ろ", "わ", "を",
    "ん", "が", "ぎ", "ぐ", "げ",
];

/// Kanji/surface forms paired with readings.
const SURFACES: &[&str] = &[
    "亜", "位", "宇", "絵", "尾", "火", "木", "空", "毛", "子", "左", "市", "酢", "背", "祖",
    "田", "地", "津", "手", "戸", "名", "荷", "布", "根", "野", "葉", "日", "風", "辺", "帆",
    "間", "実", "無", "目", "物", "矢", "湯", "世", "良", "理", "留", "礼", "路", "和", "尾",
    "運", "雅", "義", "具", "下",
];

/// Generate "読み\t表層形" style keys of varying length, mimicking a
/// kana-kanji reading dictionary.
fn generate_dict_keys() -> Vec<String> {
    let mut keys = Vec::new();

    for (i, &s1) in SYLLABLES.iter().enumerate() {
        keys.push(format!("{}\t{}", s1, SURFACES[i % SURFACES.len()]));

        for (j, &s2) in SYLLABLES.iter().enumerate() {
            let reading2 = format!("{}{}", s1, s2);
            let surface2 = format!(
                "{}{}",
                SURFACES[i % SURFACES.len()],
                SURFACES[j % SURFACES.len()]
            );
            keys.push(format!("{}\t{}", reading2, surface2));

            if j < 4 {
                for (k, &s3) in SYLLABLES.iter().enumerate().take(4) {
                    let reading3 = format!("{}{}{}", s1, s2, s3);
                    let surface3 = format!(
                        "{}{}{}",
                        SURFACES[i % SURFACES.len()],
                        SURFACES[j % SURFACES.len()],
                        SURFACES[k % SURFACES.len()]
                    );
                    keys.push(format!("{}\t{}/{}", reading3, surface3, reading3));
                }
            }
        }
    }

    keys.sort();
    keys.dedup();
    keys
}

fn bench_build(label: &str, keys: &[String]) -> DoubleArray {
    let start = Instant::now();

    let mut keyset = Keyset::new();
    for key in keys {
        keyset.push_str(key).unwrap();
    }
    let dict = keyset.build().unwrap();

    let elapsed = start.elapsed();
    eprintln!(
        "build({}):  {:>8.2} ms  ({} keys, {} slots, {} bytes)",
        label,
        elapsed.as_secs_f64() * 1000.0,
        keys.len(),
        dict.size_in_slots(),
        dict.total_memory_bytes(),
    );
    dict
}

fn bench_lookup(dict: &DoubleArray, keys: &[String]) {
    let start = Instant::now();
    let mut found = 0usize;

    for _ in 0..ITERATIONS {
        for key in keys {
            let record_no = black_box(dict.lookup(key.as_bytes()));
            if record_no != datrie::NOT_FOUND {
                found += 1;
            }
        }
    }

    let elapsed = start.elapsed();
    eprintln!(
        "lookup:                 {:>8.2} ms  ({} iters x {} keys, {} found)",
        elapsed.as_secs_f64() * 1000.0,
        ITERATIONS,
        keys.len(),
        found,
    );
}

fn bench_lookup_misses(dict: &DoubleArray, keys: &[String]) {
    let misses: Vec<String> = keys.iter().map(|k| format!("{}\u{3093}\u{3093}", k)).collect();

    let start = Instant::now();
    let mut not_found = 0usize;

    for _ in 0..ITERATIONS {
        for key in &misses {
            let record_no = black_box(dict.lookup(key.as_bytes()));
            if record_no == datrie::NOT_FOUND {
                not_found += 1;
            }
        }
    }

    let elapsed = start.elapsed();
    eprintln!(
        "lookup (misses):        {:>8.2} ms  ({} iters x {} keys, {} not found)",
        elapsed.as_secs_f64() * 1000.0,
        ITERATIONS,
        misses.len(),
        not_found,
    );
}

fn main() {
    eprintln!("=== datrie bench (for perf profiling) ===\n");

    let dict_keys = generate_dict_keys();
    eprintln!("Generated {} dict keys\n", dict_keys.len());

    let dict = bench_build("dict", &dict_keys);

    eprintln!();
    bench_lookup(&dict, &dict_keys);
    bench_lookup_misses(&dict, &dict_keys);

    eprintln!("\nDone.");
}
