/// Failures of the card scanning flow.
///
/// The `Display` text is the exact message surfaced to API clients, so
/// variants carry wire-level wording rather than i18n keys.
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("Missing image or mimeType in request body")]
    MissingInput,
    #[error("Claude API request failed: {0}")]
    UpstreamStatus(u16),
    #[error("No text content in Claude response")]
    EmptyResponse,
    #[error("Could not parse card data from AI response")]
    UnparsableResponse,
    #[error("{0}")]
    Unexpected(String),
}

impl CardError {
    /// Wraps an arbitrary failure message, falling back to a generic
    /// message when the source provides none.
    pub fn unexpected(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            CardError::Unexpected("Failed to scan card".to_string())
        } else {
            CardError::Unexpected(message)
        }
    }
}
