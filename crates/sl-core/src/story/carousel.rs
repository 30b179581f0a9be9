//! Story carousel model.
//!
//! The carousel owns the display sequence for one artwork and the index of the
//! page currently snapped into view. Pagination dots are derived from that
//! index on demand and never stored.

use std::num::NonZeroUsize;

use super::segment::{build_segments, DisplaySegment};
use crate::artwork::Artwork;

/// Active page of a carousel. `0 <= active_index < total_count` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    active_index: usize,
    total_count: NonZeroUsize,
}

impl CarouselState {
    pub fn new(total_count: NonZeroUsize) -> Self {
        Self {
            active_index: 0,
            total_count,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn total_count(&self) -> usize {
        self.total_count.get()
    }

    /// Move to `index`, clamped into range. Out-of-range requests never fail.
    pub fn snap_to(&mut self, index: i64) -> usize {
        let last = self.total_count.get() - 1;
        self.active_index = if index <= 0 {
            0
        } else {
            usize::try_from(index).map_or(last, |i| i.min(last))
        };
        self.active_index
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            dots_length: self.total_count.get(),
            active_dot_index: self.active_index,
        }
    }
}

/// Pagination indicator, a projection of [`CarouselState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub dots_length: usize,
    pub active_dot_index: usize,
}

/// One pagination dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationDot {
    pub index: usize,
    pub active: bool,
}

impl Pagination {
    pub fn dots(&self) -> impl Iterator<Item = PaginationDot> + '_ {
        (0..self.dots_length).map(move |index| PaginationDot {
            index,
            active: index == self.active_dot_index,
        })
    }
}

/// Swipeable story of one artwork.
#[derive(Debug, Clone)]
pub struct StoryCarousel {
    background_image_url: String,
    segments: Vec<DisplaySegment>,
    state: CarouselState,
}

impl StoryCarousel {
    pub fn from_artwork(artwork: &Artwork) -> Self {
        let segments = build_segments(artwork);
        // build_segments always yields the front card
        let total = NonZeroUsize::new(segments.len()).unwrap_or(NonZeroUsize::MIN);
        Self {
            background_image_url: artwork.image_url.clone(),
            segments,
            state: CarouselState::new(total),
        }
    }

    pub fn segments(&self) -> &[DisplaySegment] {
        &self.segments
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index()
    }

    pub fn total_count(&self) -> usize {
        self.state.total_count()
    }

    /// Blurred backdrop source behind every page.
    pub fn background_image_url(&self) -> &str {
        &self.background_image_url
    }

    pub fn snap_to(&mut self, index: i64) -> usize {
        self.state.snap_to(index)
    }

    pub fn active_segment(&self) -> &DisplaySegment {
        &self.segments[self.state.active_index()]
    }

    pub fn pagination(&self) -> Pagination {
        self.state.pagination()
    }
}
