//! Prints the character name, attributes and checksum of a save file.
//!
//! Run with: cargo run --example dump_save -- path/to/character.d2s

use std::process::ExitCode;

use d2s::{D2sFile, SaveError};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: dump_save <file.d2s>");
        return ExitCode::FAILURE;
    };

    match dump(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", path, e);
            ExitCode::FAILURE
        }
    }
}

fn dump(path: &str) -> Result<(), SaveError> {
    let save = D2sFile::load_from_file(path)?;

    println!("=== {} ===\n", save.character_name());
    println!("Attributes:");
    for record in save.attributes() {
        let record = record?;
        println!("  {:<16} {}", record.attribute, record.value);
    }

    println!();
    let stored = &save.as_bytes()[save.layout().checksum_range()];
    println!("Stored checksum:   {:02x?}", stored);
    println!("Computed checksum: {:#010x}", save.compute_checksum());

    Ok(())
}
