//! Example that demonstrates the exact usage shown in the README.md file.
//!
//! This shows how to split stringified lists of numbers at compile time and at runtime.

use numsplit::{Tokenizer, numbers};

const LITTLE_FINGER: [u32; 9] = numbers!(1 | 2 | 6 | 7 | 11 | 52 | 57 | 58 | 65);

fn main() {
    println!("=== numsplit README Example ===");

    println!("Little finger keys (compile time): {LITTLE_FINGER:?}");

    let keys = numsplit::tokenize_exact("1 | 2 | 6", '|', 3).unwrap();
    assert_eq!(keys, vec![1, 2, 6]);
    println!("Keys (runtime): {keys:?}");

    match numsplit::tokenize_exact("1 | 2 | 6", '|', 2) {
        Ok(keys) => println!("Unexpectedly accepted: {keys:?}"),
        Err(error) => println!("Rejected as expected: {error}"),
    }

    let tokenizer = Tokenizer::builder().delimiter(',').build();
    let keys = tokenizer.tokenize("10, 20, 30").unwrap();
    assert_eq!(keys, vec![10, 20, 30]);
    println!("Comma-separated keys: {keys:?}");

    println!("README example completed successfully!");
}
