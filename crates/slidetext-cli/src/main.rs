use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slidetext_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "slidetext")]
#[command(author, version, about = "Seamless scrolling marquee text for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show an interactive marquee demo (default)
    Run {
        /// Texts to scroll, one marquee per text
        texts: Vec<String>,
        /// Scroll speed in cells per second
        #[arg(short, long)]
        velocity: Option<f64>,
        /// Seconds before the first motion
        #[arg(short, long)]
        delay: Option<f64>,
        /// Blank cells between repetitions
        #[arg(short, long)]
        spacing: Option<f64>,
    },
    /// Print the loop schedule for a container and content width
    Schedule {
        /// Container width (D)
        #[arg(short = 'D', long)]
        display: f64,
        /// Content width (W)
        #[arg(short = 'W', long)]
        content: f64,
        /// Velocity (v)
        #[arg(short, long, default_value_t = slidetext_core::marquee::DEFAULT_VELOCITY)]
        velocity: f64,
        /// Spacing (s)
        #[arg(short, long, default_value_t = slidetext_core::marquee::DEFAULT_SPACING)]
        spacing: f64,
        /// Initial delay
        #[arg(short, long, default_value_t = slidetext_core::marquee::DEFAULT_DELAY)]
        delay: f64,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write the default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    let tui = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, tui)?;

    match cli.command {
        Some(Commands::Run {
            texts,
            velocity,
            delay,
            spacing,
        }) => {
            let config = commands::run::apply_overrides(config, velocity, delay, spacing);
            commands::run::run(Arc::new(config), texts).await
        }
        None => commands::run::run(Arc::new(config), Vec::new()).await,
        Some(Commands::Schedule {
            display,
            content,
            velocity,
            spacing,
            delay,
            json,
        }) => commands::schedule::run(display, content, velocity, spacing, delay, json),
        Some(Commands::Config { init }) => commands::config::run(&config, init),
    }
}

/// Logs go to stderr, or to a file while the TUI owns the terminal
fn init_logging(config: &AppConfig, tui: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if tui {
        std::fs::create_dir_all(config.data_dir())?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
