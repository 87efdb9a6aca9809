/// Errors raised by the item-classification client
#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    /// No API key configured for the classification model
    #[error("detector API key is not configured")]
    MissingApiKey,

    /// The submitted data URI could not be parsed or decoded
    #[error("invalid image data URI: {0}")]
    InvalidDataUri(String),

    /// Transport-level failure talking to the model endpoint
    #[error("classification request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The model endpoint answered with a non-success status
    #[error("classification endpoint returned status {status}: {body}")]
    BadStatus { status: u16, body: String },

    /// The endpoint answered 200 but the envelope was not decodable
    #[error("malformed classification response: {0}")]
    MalformedResponse(String),
}
