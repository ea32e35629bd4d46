//! Generate EQUATIONS.md from the equation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations
//! ```
//!
//! Run from the workspace root. The file is written to
//! `setu_core/src/equations/EQUATIONS.md`.

use std::fs;
use std::path::Path;

use setu_core::equations::{generate_equations_markdown, ALL_EQUATIONS};

fn main() {
    println!("Generating EQUATIONS.md...");

    let markdown = generate_equations_markdown();
    let output_path = Path::new("setu_core/src/equations/EQUATIONS.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!(
                "Successfully wrote {} equations ({} bytes) to {}",
                ALL_EQUATIONS.len(),
                markdown.len(),
                output_path.display()
            );
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
