//! viewport-fit
//!
//! Applies viewport sizing to an HTML document as a browser would on load
//! and on each resize, then prints the adjusted document.
//!
//! ```text
//!   INPUT.html ──▶ parse ──▶ EventLoop ◀── Ready, Resize(WxH)...
//!                               │
//!                               ▼
//!                     ViewportAdjuster (vh, vw, letterbox, vcenter)
//!                               │
//!                               ▼
//!                     adjusted HTML ──▶ stdout / --output
//! ```

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use tokio::sync::mpsc;

use viewport_fit::config::{load_config, AppConfig};
use viewport_fit::lifecycle::{build_event_loop, build_logger, ViewportEvent};
use viewport_fit::logger::{StderrAlert, TerminalAlert};
use viewport_fit::observability::init_tracing;
use viewport_fit::{parse_html, ViewportSize};

#[derive(Parser)]
#[command(name = "viewport-fit")]
#[command(about = "Resize marked HTML elements relative to a viewport", long_about = None)]
struct Cli {
    /// HTML document to adjust.
    input: PathBuf,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Viewport size when the document becomes ready.
    #[arg(long, default_value = "1280x720")]
    viewport: ViewportSize,

    /// Resize events to replay after ready, in order.
    #[arg(long = "resize", value_name = "WxH")]
    resizes: Vec<ViewportSize>,

    /// Write the adjusted document here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a JSON record per adjustment run on stderr.
    #[arg(long)]
    summary: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    init_tracing(&config.observability.log_level);
    tracing::info!("viewport-fit v{} starting", env!("CARGO_PKG_VERSION"));

    let html = fs::read_to_string(&cli.input)?;
    let document = parse_html(&html)?;

    let logger = if io::stdin().is_terminal() {
        build_logger(&config, TerminalAlert)?
    } else {
        build_logger(&config, StderrAlert)?
    };
    let event_loop = build_event_loop(&config, document, cli.viewport, logger);

    let (tx, rx) = mpsc::channel(cli.resizes.len() + 1);
    let handle = tokio::spawn(event_loop.run(rx));

    tx.send(ViewportEvent::Ready).await?;
    for size in &cli.resizes {
        tx.send(ViewportEvent::resize(*size)).await?;
    }
    drop(tx);

    let (document, records) = handle.await?;

    if cli.summary {
        for record in &records {
            eprintln!("{}", serde_json::to_string(record)?);
        }
    }

    let adjusted = document.to_html();
    match &cli.output {
        Some(path) => fs::write(path, adjusted)?,
        None => println!("{adjusted}"),
    }

    tracing::info!(runs = records.len(), "Done");
    Ok(())
}
