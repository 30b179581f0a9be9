//! Text rendering of stories, choosers and help.

use std::fmt::Write;

use sl_core::artwork::Artwork;
use sl_core::story::{DisplaySegment, StoryCarousel};

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";

/// Render the active page of a carousel with its pagination dots.
pub fn render_story_page(carousel: &StoryCarousel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[backdrop: {}]", carousel.background_image_url());

    match carousel.active_segment() {
        DisplaySegment::FrontCard { image_url, title } => {
            let _ = writeln!(out, "== {title} ==");
            let _ = writeln!(out, "{image_url}");
        }
        DisplaySegment::StoryCard { id, text } => {
            let _ = writeln!(out, "-- story {id} --");
            let _ = writeln!(out, "{text}");
        }
    }

    let dots = carousel
        .pagination()
        .dots()
        .map(|dot| if dot.active { ACTIVE_DOT } else { INACTIVE_DOT })
        .collect::<Vec<_>>()
        .join(" ");
    let _ = write!(
        out,
        "{dots}  ({}/{})",
        carousel.active_index() + 1,
        carousel.total_count()
    );
    out
}

/// Numbered list of candidate artworks, in the given order.
pub fn render_chooser(artworks: &[Artwork]) -> String {
    let mut out = String::from("Which artwork are you looking at?");
    for (position, artwork) in artworks.iter().enumerate() {
        let _ = write!(
            out,
            "\n  {}. {} ({} stories)",
            position + 1,
            artwork.title,
            artwork.stories.len()
        );
    }
    out
}

pub fn render_help() -> String {
    [
        "StoryLens",
        "Take a photo of an artwork to read the stories behind it.",
        "Keep the whole artwork in frame and avoid reflections.",
    ]
    .join("\n")
}
