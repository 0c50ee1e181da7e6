//! Halqa Admin
//!
//! Administrative console for the organizational directory.
//!
//! This is the main entry point for the Dioxus Desktop application.

use anyhow::Context;
use halqa_client::ConsoleConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Configuration first: it carries the default log level
    let config = ConsoleConfig::load().context("Failed to load configuration")?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    tracing::debug!(?config, "Configuration loaded");

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   ⭕ {:<53}║", format!("{} v{}", halqa_ui::NAME, halqa_ui::VERSION));
    println!("║   Directory administration console                        ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    // Launch the Dioxus desktop application
    halqa_ui::launch(config).context("Failed to start the console")?;
    Ok(())
}
