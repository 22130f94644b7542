//! Build script to generate embedded level dictionaries
//!
//! Reads the per-level word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LEVEL_LISTS: [(&str, &str, &str); 3] = [
    ("data/level1.txt", "LEVEL_1_WORDS", "Dictionary for level 1 (КОРЗИНА)"),
    ("data/level2.txt", "LEVEL_2_WORDS", "Dictionary for level 2 (ПАРОВОЗ)"),
    ("data/level3.txt", "LEVEL_3_WORDS", "Dictionary for level 3 (КАРТИНА)"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("levels.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated level dictionaries").unwrap();
    writeln!(output).unwrap();

    for (input_path, const_name, doc_comment) in LEVEL_LISTS {
        generate_word_list(&mut output, input_path, const_name, doc_comment);
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(output: &mut fs::File, input_path: &str, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
