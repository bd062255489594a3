use crate::document::Document;

/// Why a document could not be handed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The requested document does not exist.
    NotFound,
    /// The source could not be reached or refused the request.
    Unreachable(String),
    /// The source answered with something that is not a document.
    Malformed(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "document not found"),
            FetchError::Unreachable(reason) => write!(f, "document source unreachable: {reason}"),
            FetchError::Malformed(reason) => write!(f, "malformed document response: {reason}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Source of raw document extracts. Implementations own any network or
/// disk access, retries and timeouts.
pub trait DocumentProvider: Send + Sync {
    fn fetch(
        &self,
        title: &str,
    ) -> Result<Document, FetchError>;
}
