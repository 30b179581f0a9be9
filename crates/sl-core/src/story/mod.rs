//! Story presentation: display segments and the carousel over them.

mod carousel;
mod segment;

pub use carousel::{CarouselState, Pagination, PaginationDot, StoryCarousel};
pub use segment::{build_segments, DisplaySegment};
