use anyhow::{Context, Result};
use clap::Parser;
use fleet_kernel::{config, Role, Session};
use std::io;
use tracing::{info, Level};

use fleet_console::Console;

/// Interactive operator console for the fleet registries.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration (falls back to FLEET_CONSOLE_CONFIG, then console.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the configured role (operator or viewer)
    #[arg(short, long)]
    role: Option<String>,

    /// Override the configured log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<Level>,
}

fn parse_role(raw: &str) -> Result<Role> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "operator" => Ok(Role::Operator),
        "viewer" => Ok(Role::Viewer),
        other => anyhow::bail!("unknown role '{other}' (expected operator or viewer)"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env optionnel
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let path = config::resolve_config_path(args.config.as_deref());
    let cfg = config::load_config(&path).await;

    // le niveau du fichier est déjà normalisé par parse_config
    let level = args
        .log_level
        .unwrap_or_else(|| cfg.log_level.parse().unwrap_or(Level::WARN));
    // logs sur stderr pour ne pas se mêler aux menus
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let role = match args.role.as_deref() {
        Some(raw) => parse_role(raw)?,
        None => cfg.role,
    };
    info!(config = %path, ?role, "fleet console starting");

    let session = Session::new(&cfg.capacities).context("Failed to open fleet session")?;
    let stdin = io::stdin();
    let mut console = Console::new(session, role, stdin.lock(), io::stdout());
    console.run().context("Console execution failed")?;

    Ok(())
}
