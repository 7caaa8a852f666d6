use anyhow::{Context, Result};
use clap::Parser;
use futures::StreamExt;
use std::io::Write;
use std::path::PathBuf;

use feedsim::app::App;
use feedsim::config::Config;
use feedsim::session::NewsSession;
use feedsim::ui;

#[derive(Parser, Debug)]
#[command(name = "feedsim", about = "Reactive news feed simulator")]
struct Args {
    /// Config file (default: ~/.config/feedsim/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Selector to start with: a category or the wildcard
    #[arg(long)]
    category: Option<String>,

    /// Seed the category picker for a reproducible feed
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between generated items
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Milliseconds before a read is confirmed
    #[arg(long, value_name = "MS")]
    read_delay_ms: Option<u64>,

    /// Color theme (dark, light)
    #[arg(long)]
    theme: Option<String>,

    /// Print headlines to stdout instead of starting the TUI
    #[arg(long)]
    plain: bool,

    /// Stop after this many headlines (plain mode only)
    #[arg(long, value_name = "N", requires = "plain")]
    limit: Option<usize>,
}

impl Args {
    /// Apply command-line overrides on top of file configuration.
    fn apply(&self, config: &mut Config) {
        if let Some(category) = &self.category {
            config.initial_category = category.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(ms) = self.interval_ms {
            config.emit_interval_ms = ms;
        }
        if let Some(ms) = self.read_delay_ms {
            config.read_delay_ms = ms;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => Config::default_path(),
    };

    let mut config = match path {
        Some(path) => Config::load(&path)
            .with_context(|| format!("Failed to load config from '{}'", path.display()))?,
        None => {
            tracing::warn!("HOME not set, using default configuration");
            Config::default()
        }
    };

    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Print headlines line by line until the limit is reached or Ctrl+C.
async fn run_plain(session: &NewsSession, selector: &str, limit: Option<usize>) -> Result<()> {
    let feed = session
        .subscribe_feed(selector)
        .context("Failed to subscribe")?;
    let mut feed = match limit {
        Some(n) => feed.take(n).boxed(),
        None => feed.boxed(),
    };

    let stdout = std::io::stdout();
    loop {
        tokio::select! {
            line = feed.next() => {
                let Some(line) = line else { break };
                let mut out = stdout.lock();
                writeln!(out, "{}", line).context("Failed to write headline")?;
                out.flush().context("Failed to flush stdout")?;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!("Interrupted");
                break;
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with headlines or the TUI
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let session = NewsSession::new(&config).context("Failed to create news session")?;

    if args.plain {
        return run_plain(&session, &config.initial_category, args.limit).await;
    }

    let mut app = App::new(session, &config).context("Failed to create application")?;
    ui::run(&mut app).await?;

    println!("Goodbye!");
    Ok(())
}
