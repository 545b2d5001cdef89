use thiserror::Error;

/// Failure modes of the remote store.
///
/// Callers translate every one of these into a user-visible notice; none of
/// them is fatal to the page.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store responded with status {status}: {message}")]
    Http { status: u16, message: String },
    #[error("request did not reach the store: {0}")]
    Network(String),
    #[error("store response could not be decoded: {0}")]
    Decode(String),
    #[error("attached image could not be read: {0}")]
    ImageRead(String),
    #[error("realtime socket failed: {0}")]
    Socket(String),
}
