use std::env;
use std::path::Path;
use std::process;

use doc_pilot::commands::{self, config::ConfigOptions};
use doc_pilot::config::config_path;
use doc_pilot::gemini::GeminiClient;
use doc_pilot::input::Interactive;

fn usage() {
    println!("Usage:");
    println!("  doc-pilot find <library> <func>                      # fetch docs for a function");
    println!("  doc-pilot config [--set-api-key|--show-config|--reset]");
    println!("  doc-pilot --version | --help");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let result = match args.get(1).map(String::as_str) {
        Some("find") => match (args.get(2), args.get(3)) {
            (Some(library), Some(func)) => {
                let client = GeminiClient::new();
                let mut input = Interactive;
                commands::find::run(
                    &config_path(),
                    Path::new("."),
                    library,
                    func,
                    &mut input,
                    &client,
                )
            }
            _ => {
                println!("Usage: doc-pilot find <library> <func>");
                Ok(())
            }
        },
        Some("config") => {
            let opts = ConfigOptions {
                set_api_key: args.iter().any(|a| a == "--set-api-key"),
                show_config: args.iter().any(|a| a == "--show-config"),
                reset: args.iter().any(|a| a == "--reset"),
            };
            let mut input = Interactive;
            commands::config::run(&config_path(), &opts, &mut input)
        }
        Some("--version") | Some("-V") => {
            println!("doc-pilot {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some("--help") | Some("help") | None => {
            usage();
            Ok(())
        }
        Some(other) => {
            println!("Unknown command: {other}");
            usage();
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("\n✗ {err:#}\n");
        process::exit(1);
    }
}
