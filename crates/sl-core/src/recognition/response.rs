use serde::{Deserialize, Deserializer, Serialize};

use crate::artwork::Artwork;

/// Well-formed answer of the recognition service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionResponse {
    #[serde(rename = "artworkRecognized")]
    pub recognized: bool,

    /// Candidate artworks in the service's ranking order.
    #[serde(rename = "artworks", default, deserialize_with = "null_as_empty")]
    pub matches: Vec<Artwork>,
}

impl RecognitionResponse {
    pub fn recognized(matches: Vec<Artwork>) -> Self {
        Self {
            recognized: true,
            matches,
        }
    }

    pub fn not_recognized() -> Self {
        Self {
            recognized: false,
            matches: Vec::new(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Artwork>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Artwork>>::deserialize(deserializer)?.unwrap_or_default())
}
