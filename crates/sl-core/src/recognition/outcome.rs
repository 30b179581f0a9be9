//! Recognition outcome classification.
//!
//! Every round-trip ends in exactly one of four outcomes. The classification
//! is a pure function of the transport result so it can be tested without a
//! network.

use super::response::RecognitionResponse;
use crate::artwork::Artwork;
use crate::ports::RecognitionTransportError;
use crate::scan::{ScanMessage, ScanRoute};

/// Two or more candidate artworks for one photo, in response order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates(Vec<Artwork>);

impl Candidates {
    /// `None` unless there are at least two artworks.
    pub fn new(artworks: Vec<Artwork>) -> Option<Self> {
        (artworks.len() > 1).then_some(Self(artworks))
    }

    pub fn as_slice(&self) -> &[Artwork] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<Artwork> {
        self.0
    }
}

/// Result of one recognition round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionOutcome {
    Unique(Artwork),
    Ambiguous(Candidates),
    NoMatch,
    TransportError(RecognitionTransportError),
}

impl RecognitionOutcome {
    /// Classify a transport result.
    ///
    /// Rules, in order: transport failure, "not recognized", one artwork,
    /// several artworks. A response that claims recognition but carries no
    /// artwork counts as no match.
    pub fn classify(result: Result<RecognitionResponse, RecognitionTransportError>) -> Self {
        let response = match result {
            Ok(response) => response,
            Err(err) => return RecognitionOutcome::TransportError(err),
        };
        if !response.recognized {
            return RecognitionOutcome::NoMatch;
        }

        let mut matches = response.matches;
        match matches.len() {
            0 => RecognitionOutcome::NoMatch,
            1 => RecognitionOutcome::Unique(matches.remove(0)),
            _ => match Candidates::new(matches) {
                Some(candidates) => RecognitionOutcome::Ambiguous(candidates),
                None => RecognitionOutcome::NoMatch,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self,
            RecognitionOutcome::Unique(_) | RecognitionOutcome::Ambiguous(_)
        )
    }

    /// Short tag for logs and analytics.
    pub fn kind(&self) -> &'static str {
        match self {
            RecognitionOutcome::Unique(_) => "unique",
            RecognitionOutcome::Ambiguous(_) => "ambiguous",
            RecognitionOutcome::NoMatch => "no_match",
            RecognitionOutcome::TransportError(_) => "transport_error",
        }
    }

    /// Where a successful outcome leads.
    pub fn route(&self) -> Option<ScanRoute> {
        match self {
            RecognitionOutcome::Unique(artwork) => Some(ScanRoute::SingleArtwork(artwork.clone())),
            RecognitionOutcome::Ambiguous(candidates) => {
                Some(ScanRoute::ArtworkChooser(candidates.clone()))
            }
            RecognitionOutcome::NoMatch | RecognitionOutcome::TransportError(_) => None,
        }
    }

    /// Message left on screen by a failed outcome.
    pub fn message(&self) -> Option<ScanMessage> {
        match self {
            RecognitionOutcome::Unique(_) | RecognitionOutcome::Ambiguous(_) => None,
            RecognitionOutcome::NoMatch => Some(ScanMessage::NoStory),
            RecognitionOutcome::TransportError(_) => Some(ScanMessage::RecognitionProblem),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(title: &str) -> Artwork {
        Artwork::new(format!("https://img.example/{title}.jpg"), title, Vec::new())
    }

    #[test]
    fn single_match_is_unique() {
        let outcome =
            RecognitionOutcome::classify(Ok(RecognitionResponse::recognized(vec![artwork("A")])));
        assert_eq!(outcome, RecognitionOutcome::Unique(artwork("A")));
        assert!(outcome.is_success());
        assert_eq!(outcome.route(), Some(ScanRoute::SingleArtwork(artwork("A"))));
        assert_eq!(outcome.message(), None);
    }

    #[test]
    fn several_matches_are_ambiguous_in_order() {
        let outcome = RecognitionOutcome::classify(Ok(RecognitionResponse::recognized(vec![
            artwork("A"),
            artwork("B"),
        ])));

        let RecognitionOutcome::Ambiguous(candidates) = &outcome else {
            panic!("expected ambiguous outcome, got {outcome:?}");
        };
        assert_eq!(candidates.as_slice(), &[artwork("A"), artwork("B")]);
        assert!(outcome.is_success());
    }

    #[test]
    fn not_recognized_is_no_match() {
        let outcome = RecognitionOutcome::classify(Ok(RecognitionResponse::not_recognized()));
        assert_eq!(outcome, RecognitionOutcome::NoMatch);
        assert_eq!(outcome.message(), Some(ScanMessage::NoStory));
        assert_eq!(outcome.route(), None);
    }

    #[test]
    fn not_recognized_ignores_stray_artworks() {
        let response = RecognitionResponse {
            recognized: false,
            matches: vec![artwork("A")],
        };
        assert_eq!(
            RecognitionOutcome::classify(Ok(response)),
            RecognitionOutcome::NoMatch
        );
    }

    #[test]
    fn recognized_without_artworks_is_no_match() {
        let outcome = RecognitionOutcome::classify(Ok(RecognitionResponse::recognized(Vec::new())));
        assert_eq!(outcome, RecognitionOutcome::NoMatch);
    }

    #[test]
    fn transport_failure_is_transport_error() {
        let outcome = RecognitionOutcome::classify(Err(RecognitionTransportError::Timeout));
        assert_eq!(
            outcome,
            RecognitionOutcome::TransportError(RecognitionTransportError::Timeout)
        );
        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), Some(ScanMessage::RecognitionProblem));
    }

    #[test]
    fn classification_is_total_and_exclusive() {
        let inputs = vec![
            Ok(RecognitionResponse::not_recognized()),
            Ok(RecognitionResponse::recognized(vec![])),
            Ok(RecognitionResponse::recognized(vec![artwork("A")])),
            Ok(RecognitionResponse::recognized(vec![
                artwork("A"),
                artwork("B"),
                artwork("C"),
            ])),
            Err(RecognitionTransportError::Status(502)),
        ];
        let kinds: Vec<&str> = inputs
            .into_iter()
            .map(|input| RecognitionOutcome::classify(input).kind())
            .collect();
        assert_eq!(
            kinds,
            vec!["no_match", "no_match", "unique", "ambiguous", "transport_error"]
        );
    }

    #[test]
    fn candidates_need_two_artworks() {
        assert!(Candidates::new(vec![artwork("A")]).is_none());
        assert_eq!(
            Candidates::new(vec![artwork("A"), artwork("B")]).map(|c| c.len()),
            Some(2)
        );
    }
}
