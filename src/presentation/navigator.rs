use anyhow::Context;
use async_trait::async_trait;
use sl_core::artwork::Artwork;
use sl_core::ports::NavigationPort;
use sl_core::story::StoryCarousel;

use super::output::TerminalOutput;
use super::story::{render_chooser, render_help, render_story_page};

/// Navigation host that prints each destination to the terminal.
///
/// A single artwork is shown by swiping through every page of its carousel.
pub struct TerminalNavigator {
    output: TerminalOutput,
}

impl TerminalNavigator {
    pub fn new(output: TerminalOutput) -> Self {
        Self { output }
    }
}

#[async_trait]
impl NavigationPort for TerminalNavigator {
    async fn goto_single_artwork(&self, artwork: Artwork) -> anyhow::Result<()> {
        let mut carousel = StoryCarousel::from_artwork(&artwork);
        for page in 0..carousel.total_count() {
            carousel.snap_to(page as i64);
            self.output
                .write_block(&render_story_page(&carousel))
                .context("Failed to print story page")?;
        }
        Ok(())
    }

    async fn goto_artwork_chooser(&self, artworks: Vec<Artwork>) -> anyhow::Result<()> {
        self.output
            .write_block(&render_chooser(&artworks))
            .context("Failed to print artwork chooser")
    }

    async fn goto_help(&self) -> anyhow::Result<()> {
        self.output
            .write_block(&render_help())
            .context("Failed to print help")
    }
}
