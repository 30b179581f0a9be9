/// Status message left on the scan screen after a failed scan.
///
/// A message stays until the next successful scan or an explicit dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMessage {
    /// The artwork was not recognized.
    NoStory,
    /// Recognition could not complete (network, camera or image failure).
    RecognitionProblem,
}

impl ScanMessage {
    pub fn text(&self) -> &'static str {
        match self {
            ScanMessage::NoStory => "We don't have a story for this artwork.\nPlease try another.",
            ScanMessage::RecognitionProblem => {
                "A problem occurred while recognising the artwork.\nPlease check that your phone has an Internet connection and try again."
            }
        }
    }
}

impl std::fmt::Display for ScanMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
