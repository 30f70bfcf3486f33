//! Xcache redirect command-line tool.
//!
//! # Architecture Overview
//!
//! ```text
//!   --config plugin.toml ──▶ loader ──▶ propagate ──▶ process environment
//!                                                           │
//!   resolve <URL>... ──────────────────────▶ Redirector ◀───┘
//!                                                │
//!                                                ▼
//!                                        final URL on stdout
//! ```
//!
//! Useful for checking what a client with the plugin loaded would actually
//! contact for a given address.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use xcache_redirect::config::{load_config, propagate};
use xcache_redirect::observability::logging::{default_directive, init_logging};
use xcache_redirect::redirect::{Redirector, XCACHE_HOST_KEY, XCACHE_PORT_KEY};
use xcache_redirect::ProcessEnv;

#[derive(Parser)]
#[command(name = "xcache-redirect")]
#[command(
    about = "Resolve xcache pseudo-host addresses to the configured cache proxy",
    long_about = None
)]
struct Cli {
    /// Plugin descriptor (TOML) whose settings seed the environment.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the final URL for each address
    Resolve {
        #[arg(required = true)]
        urls: Vec<String>,

        /// Emit one JSON object per address
        #[arg(long)]
        json: bool,
    },
    /// Show the effective cache overrides
    ShowEnv,
}

#[derive(Serialize)]
struct Resolution<'a> {
    input: &'a str,
    output: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _ = init_logging(&default_directive(&cli.log_level));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut enabled = true;
    if let Some(path) = &cli.config {
        let plugin = load_config(path)?;
        enabled = plugin.enable;
        if enabled {
            propagate(Some(&plugin.to_config_map()), &ProcessEnv);
        } else {
            tracing::info!(path = ?path, "Plugin disabled in config, addresses are not rewritten");
        }
    }

    let redirector = Redirector::from_process_env();

    match cli.command {
        Commands::Resolve { urls, json } => {
            for url in &urls {
                let output = if enabled {
                    redirector.construct_final_url(url)
                } else {
                    url.clone()
                };

                if json {
                    println!("{}", serde_json::to_string(&Resolution { input: url, output })?);
                } else {
                    println!("{output}");
                }
            }
        }
        Commands::ShowEnv => {
            let overrides = redirector.overrides();
            println!("{XCACHE_HOST_KEY}={}", overrides.host.as_deref().unwrap_or(""));
            println!(
                "{XCACHE_PORT_KEY}={}",
                overrides.port.map(|p| p.to_string()).unwrap_or_default()
            );
            if !enabled {
                println!("# plugin disabled");
            }
        }
    }

    Ok(())
}
