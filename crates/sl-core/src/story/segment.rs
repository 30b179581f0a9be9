use serde::Serialize;

use crate::artwork::Artwork;

/// One page of the story carousel.
///
/// 故事轮播中的一页。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplaySegment {
    /// Synthesized cover page, always first.
    ///
    /// 合成的封面页，始终位于第一页。
    FrontCard { image_url: String, title: String },
    /// One narrative segment.
    ///
    /// 一段叙事内容。
    StoryCard { id: String, text: String },
}

impl DisplaySegment {
    pub fn is_front(&self) -> bool {
        matches!(self, DisplaySegment::FrontCard { .. })
    }
}

/// Build the display sequence for an artwork: one front card followed by one
/// story card per segment, in narrative order.
pub fn build_segments(artwork: &Artwork) -> Vec<DisplaySegment> {
    let mut segments = Vec::with_capacity(artwork.stories.len() + 1);
    segments.push(DisplaySegment::FrontCard {
        image_url: artwork.image_url.clone(),
        title: artwork.title.clone(),
    });
    segments.extend(
        artwork
            .stories
            .iter()
            .map(|story| DisplaySegment::StoryCard {
                id: story.id.clone(),
                text: story.text.clone(),
            }),
    );
    segments
}
