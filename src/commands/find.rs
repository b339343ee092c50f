use std::path::Path;

use anyhow::{bail, Result};

use crate::config;
use crate::gemini::{self, DocFetcher};
use crate::input::LineSource;
use crate::manifest;

/// `doc-pilot find <library> <func>`
///
/// Fetches and prints the documentation text. Returns `Err` only for fatal
/// conditions (unreadable config, malformed manifest, empty key entry); a
/// failed remote call is reported to the user and the command still returns
/// `Ok`.
pub fn run(
    config_path: &Path,
    manifest_dir: &Path,
    library: &str,
    func: &str,
    input: &mut dyn LineSource,
    fetcher: &dyn DocFetcher,
) -> Result<()> {
    println!("🚀 Fetching docs for {library} > {func}...");

    let version_context = manifest::version_context(manifest_dir, library)?;

    let mut cfg = config::load(config_path)?;
    let api_key = match cfg.gemini_api_key.clone() {
        Some(key) => key,
        None => {
            println!("\nNo Gemini API key found.");
            println!("Please enter your Gemini API key (get one from https://makersuite.google.com/app/apikey):");
            let key = input.read_line("API Key:").unwrap_or_default();
            if key.is_empty() {
                bail!("no API key provided");
            }
            cfg.gemini_api_key = Some(key.clone());
            config::save(config_path, &cfg)?;
            println!("\n✓ API key saved successfully!\n");
            key
        }
    };

    let prompt = gemini::build_prompt(library, func, version_context.as_deref());
    println!("\n📚 Fetching documentation using Gemini AI...\n");

    match fetcher.fetch(&api_key, &prompt) {
        Ok(text) => {
            println!("{text}");
            println!("\n✓ Documentation fetched successfully!\n");
        }
        Err(err) if gemini::is_invalid_key_error(&err) => {
            eprintln!("\n✗ Invalid API key. Please check your Gemini API key.");
            println!("Run the command again to re-enter your API key.\n");
            // Drop the rejected key so the next run prompts again
            let mut cfg = config::load(config_path)?;
            cfg.gemini_api_key = None;
            config::save(config_path, &cfg)?;
        }
        Err(err) => {
            eprintln!("\n✗ Error fetching from Gemini: {err}");
        }
    }

    Ok(())
}
