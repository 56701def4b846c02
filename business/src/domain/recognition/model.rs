use super::matcher::MatchResult;

/// Result of one recognition request, handed to the transport layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionOutcome {
    pub extracted_text: String,
    pub result: MatchResult,
}
