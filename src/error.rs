//! Failure taxonomy for the UI widgets.
//!
//! Collaborators report failures as [`UiError`]; the controllers turn them
//! into a single log line and carry on. Nothing here reaches the host page.

/// Error raised by a browser collaborator or by configuration parsing.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// A required element is not present in the host markup.
    #[error("missing element: #{0}")]
    MissingElement(String),
    /// A DOM call threw.
    #[error("dom error: {0}")]
    Dom(String),
    /// The browser lacks the named API.
    #[error("unsupported browser api: {0}")]
    Unsupported(&'static str),
    /// The notification permission request failed.
    #[error("permission request failed: {0}")]
    Permission(String),
    /// Audio playback was rejected (autoplay policy, missing codec).
    #[error("playback failed: {0}")]
    Playback(String),
    /// `localStorage` is unavailable or refused the write.
    #[error("storage error: {0}")]
    Storage(String),
    /// The host configuration failed to parse or validate.
    #[error("invalid config: {0}")]
    Config(String),
    /// A push payload was not valid JSON of the expected shape.
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}
