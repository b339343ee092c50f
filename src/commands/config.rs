use std::path::Path;

use anyhow::Result;

use crate::config;
use crate::input::LineSource;
use crate::models::Config;

/// Flags of the `config` subcommand. When several are set, the first truthy
/// one in declaration order wins.
#[derive(Debug, Default)]
pub struct ConfigOptions {
    pub set_api_key: bool,
    pub show_config: bool,
    pub reset: bool,
}

/// `doc-pilot config [--set-api-key] [--show-config] [--reset]`
pub fn run(config_path: &Path, opts: &ConfigOptions, input: &mut dyn LineSource) -> Result<()> {
    if opts.set_api_key {
        let key = input
            .read_line("Enter your Gemini API key:")
            .unwrap_or_default();
        if key.is_empty() {
            eprintln!("\n✗ No API key provided.\n");
        } else {
            let mut cfg = config::load(config_path)?;
            cfg.gemini_api_key = Some(key);
            config::save(config_path, &cfg)?;
            println!("\n✓ API key saved successfully!\n");
        }
    } else if opts.show_config {
        let cfg = config::load(config_path)?;
        for line in render_show(config_path, &cfg) {
            println!("{line}");
        }
        println!();
    } else if opts.reset {
        if config::reset(config_path)? {
            println!("\n✓ Configuration reset successfully!\n");
        } else {
            println!("\nNo configuration found.\n");
        }
    } else {
        println!("\nPlease specify an option. Use --help for more information.\n");
    }

    Ok(())
}

/// Lines printed by `--show-config`. Reports presence only, never the key
/// value itself.
fn render_show(config_path: &Path, cfg: &Config) -> Vec<String> {
    let mut lines = vec![
        "\nCurrent configuration:".to_string(),
        format!("Config file: {}", config_path.display()),
    ];
    if cfg.has_api_key() {
        lines.push("✓ Gemini API Key: configured".to_string());
    } else {
        lines.push("✗ Gemini API Key: not configured".to_string());
    }
    lines
}
