use derive_more::{Display, Error};
use mongodb::error::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// The store could not be reached: DNS, socket, server selection.
    Network,
    Other,
}

/// Failure talking to the document store, already classified so callers
/// never inspect driver-specific error names.
#[derive(Debug, Clone, Display, Error)]
#[display(fmt = "{}", message)]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub message: String,
}

impl StoreError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: StoreErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self {
            kind: StoreErrorKind::Other,
            message: message.into(),
        }
    }

    pub fn is_network(&self) -> bool {
        self.kind == StoreErrorKind::Network
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        let kind = match err.kind.as_ref() {
            ErrorKind::Io(_)
            | ErrorKind::ServerSelection { .. }
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. } => StoreErrorKind::Network,
            _ => StoreErrorKind::Other,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
