//! Artwork domain models
//!
//! An artwork is what the recognition service hands back for a photo: a cover
//! image, a title and the ordered story told about it.

mod model;

pub use model::{Artwork, StorySegment};
