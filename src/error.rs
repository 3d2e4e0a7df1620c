use reqwest::StatusCode;

/// The topic was rejected before anything was sent
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a podcast topic.")]
    EmptyTopic,

    #[error("A podcast is already being generated.")]
    Busy,
}

/// Failures of a single podcast submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Unable to reach podcast backend: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-success status. Displays as the raw response body.
    #[error("{body}")]
    Status { status: StatusCode, body: String },

    #[error("Invalid response from podcast backend: {0}")]
    InvalidResponse(String),

    #[error("Failed to decode podcast audio: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Podcast backend returned neither audio nor a TTS error")]
    MissingAudio,
}
