//! Benchmarks for search operations
//!
//! Run with: cargo bench search

use ropey::Rope;
use tabpad::search::{find_all, replace_all};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn sample_text(line_count: usize) -> String {
    "The quick brown fox jumps over the lazy dog.\n".repeat(line_count)
}

// ============================================================================
// Find
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn find_all_occurrences(bencher: divan::Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher.bench(|| find_all(divan::black_box(&text), "the").map(Iterator::count));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn find_no_match(bencher: divan::Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher.bench(|| find_all(divan::black_box(&text), "zebra").map(Iterator::count));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn find_first_only(bencher: divan::Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher.bench(|| {
        find_all(divan::black_box(&text), "lazy").map(|mut matches| matches.next())
    });
}

// ============================================================================
// Replace
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn replace_all_occurrences(bencher: divan::Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher.bench(|| replace_all(divan::black_box(&text), "fox", "cat"));
}

/// Full replace as the editor does it: flatten the rope, replace, rebuild
#[divan::bench(args = [1_000, 10_000, 100_000])]
fn replace_through_rope(bencher: divan::Bencher, line_count: usize) {
    let rope = Rope::from_str(&sample_text(line_count));
    bencher.bench(|| {
        let text = rope.to_string();
        replace_all(&text, "dog", "wolf").map(|out| Rope::from_str(&out))
    });
}
