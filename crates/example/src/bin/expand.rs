//! Prints the code `#[copyable]` generates for the traits of a source file.
//!
//! Usage: `expand [path]` (defaults to this crate's `src/lib.rs`).

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use zonecopy_codegen::CodeGenerator;

fn main() -> ExitCode {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/lib.rs"));

    let mut generator = CodeGenerator::new();
    generator.set_header(format!("Expansion of {}", path.display()));

    let result = generator
        .add_source_file(&path)
        .and_then(|generator| generator.write_to(io::stdout()));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
