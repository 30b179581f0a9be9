use crate::artwork::Artwork;
use crate::recognition::Candidates;

/// Presentation a successful scan leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanRoute {
    SingleArtwork(Artwork),
    ArtworkChooser(Candidates),
}
