//! Command line surface.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sl_app::ScanReport;
use sl_core::artwork::Artwork;
use sl_core::capture::CameraView;
use sl_core::config::AppConfig;
use sl_core::ports::NavigationPort;
use sl_core::story::StoryCarousel;
use tracing::{info, info_span, Instrument};

use crate::bootstrap::wire_scan_app;
use crate::presentation::{render_story_page, TerminalNavigator, TerminalOutput, TerminalPresenter};

#[derive(Debug, Parser)]
#[command(name = "storylens", version, about = "Photograph an artwork and read its story")]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Photograph an artwork (an image file or a directory of images) and
    /// recognise it
    Scan {
        #[arg(value_name = "IMAGE")]
        image: PathBuf,
    },
    /// Show one page of an artwork story read from a JSON file
    Story {
        #[arg(value_name = "ARTWORK_JSON")]
        artwork_json: PathBuf,

        /// Zero-based page; out-of-range values snap to the nearest page
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        page: i64,
    },
    /// Show scanning tips
    Info,
}

pub async fn run(cli: Cli, config: AppConfig, output: TerminalOutput) -> anyhow::Result<()> {
    match cli.command {
        Command::Scan { image } => scan(&config, image, output).await,
        Command::Story { artwork_json, page } => story(&artwork_json, page, &output),
        Command::Info => TerminalNavigator::new(output).goto_help().await,
    }
}

async fn scan(config: &AppConfig, image: PathBuf, output: TerminalOutput) -> anyhow::Result<()> {
    let presenter = Arc::new(TerminalPresenter::new(output.clone()));
    let app = wire_scan_app(
        config,
        image,
        Arc::new(TerminalNavigator::new(output)),
        presenter.clone(),
    )?;

    async {
        let show_intro = app.intro.show_intro().await;
        app.orchestrator.set_intro_visible(show_intro);
        if show_intro {
            presenter.show_intro();
        }

        let capture = app.orchestrator.capture_controller();
        capture.request_permission().await;
        capture.on_camera_ready(app.screen).await;

        let view = capture.view();
        presenter.show_camera_view(&view);
        if view == CameraView::PermissionDenied {
            return Ok(());
        }

        let report = app.orchestrator.scan().await;
        let (successes, failures) = app.analytics.totals();
        info!(successes, failures, "scan session finished");

        match report {
            ScanReport::Rejected(err) => Err(err).context("Scan was rejected"),
            ScanReport::CaptureFailed(_) | ScanReport::Completed(_) => Ok(()),
        }
    }
    .instrument(info_span!("cli.scan"))
    .await
}

fn story(artwork_json: &Path, page: i64, output: &TerminalOutput) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(artwork_json)
        .with_context(|| format!("Failed to read artwork file: {}", artwork_json.display()))?;
    let artwork: Artwork =
        serde_json::from_str(&content).context("Failed to parse artwork JSON")?;

    let mut carousel = StoryCarousel::from_artwork(&artwork);
    carousel.snap_to(page);
    output
        .write_block(&render_story_page(&carousel))
        .context("Failed to print story page")
}
