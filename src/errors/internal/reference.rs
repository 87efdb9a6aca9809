/// Errors raised by the administrative-region reference client
#[derive(Debug, thiserror::Error)]
pub enum ReferenceFetchError {
    /// No base URL configured for the reference source
    #[error("reference-data base URL is not configured")]
    BaseUrlNotConfigured,

    /// Transport-level failure or undecodable body
    #[error("reference-data request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The reference source answered with a non-success status
    #[error("reference-data endpoint returned status {0}")]
    BadStatus(u16),
}
