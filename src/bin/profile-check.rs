use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use http_profiles::config::{build_registry, load_config, register_line};
use http_profiles::registry::ConnectionRegistry;

#[derive(Parser)]
#[command(name = "profile-check")]
#[command(about = "Validate HTTP connection profile configuration", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "http-client.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse every connection line and report diagnostics
    Check,
    /// Print the registered profiles as JSON
    Dump,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "http_profiles=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Check => {
            let mut registry = ConnectionRegistry::new();
            let mut failures = 0usize;
            for line in &config.connections {
                match register_line(&mut registry, line, &config.defaults) {
                    Ok(profile) => {
                        println!("ok: {} => {}://{}", profile.name, profile.scheme, profile.url);
                    }
                    Err(e) => {
                        failures += 1;
                        eprintln!("error: `{line}`: {e}");
                    }
                }
            }
            println!("{} profile(s) registered", registry.count());
            if failures > 0 {
                return Err(format!("{failures} invalid connection line(s)").into());
            }
        }
        Commands::Dump => {
            let registry = build_registry(&config)?;
            let profiles: Vec<_> = registry.iter().map(|p| p.as_ref()).collect();
            println!("{}", serde_json::to_string_pretty(&profiles)?);
        }
    }

    Ok(())
}
