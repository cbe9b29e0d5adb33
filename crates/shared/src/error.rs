use thiserror::Error;

/// Failure taxonomy for talking to the remote catalog service.
///
/// Everything here is locally recoverable by retrying the same operation;
/// the controller collapses all variants into a user-visible message.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Fetch(String),
    #[error("no pokémon named \"{0}\"")]
    NotFound(String),
    #[error("unexpected response shape: {0}")]
    MalformedResponse(String),
}
