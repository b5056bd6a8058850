//! Build script for groovebot.
//!
//! Places a copy of `.env.example` in the local data directory so the bot
//! finds a configuration template next to the `.env` it loads at startup.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` into `<data_local_dir>/groovebot/`.
///
/// A missing template only produces a cargo warning; directory or write
/// failures fail the build.
///
/// Destinations:
/// - Linux: `~/.local/share/groovebot/.env.example`
/// - macOS: `~/Library/Application Support/groovebot/.env.example`
/// - Windows: `%LOCALAPPDATA%/groovebot/.env.example`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("groovebot");
    fs::create_dir_all(&out_dir)?;

    if template.is_file() {
        fs::copy(&template, out_dir.join(".env.example"))?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
    }

    Ok(())
}
