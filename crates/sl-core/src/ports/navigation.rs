use async_trait::async_trait;

use crate::artwork::Artwork;

/// Screen navigation host. The core only asks for destinations; it never
/// manages a screen stack.
#[async_trait]
pub trait NavigationPort: Send + Sync {
    /// Present the story of a single artwork.
    async fn goto_single_artwork(&self, artwork: Artwork) -> anyhow::Result<()>;

    /// Present a chooser over several candidate artworks, in the given order.
    async fn goto_artwork_chooser(&self, artworks: Vec<Artwork>) -> anyhow::Result<()>;

    async fn goto_help(&self) -> anyhow::Result<()>;
}
