use serde::{Deserialize, Serialize};

/// One narrative segment of an artwork story.
///
/// Segments are immutable and their order in [`Artwork::stories`] is the
/// narrative order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorySegment {
    pub id: String,
    pub text: String,
}

impl StorySegment {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// An identified artwork with its story.
///
/// Immutable once received from the recognition call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Cover image shown on the front card and as the blurred backdrop.
    pub image_url: String,
    pub title: String,
    #[serde(default)]
    pub stories: Vec<StorySegment>,
}

impl Artwork {
    pub fn new(
        image_url: impl Into<String>,
        title: impl Into<String>,
        stories: Vec<StorySegment>,
    ) -> Self {
        Self {
            image_url: image_url.into(),
            title: title.into(),
            stories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artwork_deserializes_without_stories() {
        let artwork: Artwork = serde_json::from_str(
            r#"{"image_url": "https://img.example/nightwatch.jpg", "title": "The Night Watch"}"#,
        )
        .unwrap();

        assert_eq!(artwork.title, "The Night Watch");
        assert!(artwork.stories.is_empty());
    }

    #[test]
    fn artwork_keeps_story_order() {
        let artwork: Artwork = serde_json::from_str(
            r#"{
                "image_url": "u",
                "title": "t",
                "stories": [{"id": "b", "text": "second"}, {"id": "a", "text": "first"}]
            }"#,
        )
        .unwrap();

        let ids: Vec<&str> = artwork.stories.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
