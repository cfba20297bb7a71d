// crates/valset-core/src/error.rs

use thiserror::Error;

/// Failures raised while driving the chain or checking emitted events.
#[derive(Debug, Error)]
pub enum ValsetError {
    /// Invalid harness configuration (zero epoch length, unreadable file, ...).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The chain collaborator rejected a height query or mine request.
    #[error("Chain error: {0}")]
    Chain(String),

    /// A boundary lies past the largest representable block number.
    #[error("Block number overflow: {0}")]
    Overflow(String),

    /// A log could not be decoded against its event interface.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Arguments could not be encoded into a log (wrong arity or type).
    #[error("Encode error: {0}")]
    Encode(String),

    /// The event name is not part of the contract interface.
    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    /// The event was emitted a different number of times than expected.
    #[error("Event {event}: expected {expected} occurrence(s), found {actual}")]
    CountMismatch {
        event: String,
        expected: usize,
        actual: usize,
    },

    /// A decoded event argument differs from the expected value.
    #[error("Event {event}: {label} at argument {position}: expected {expected}, got {actual}")]
    ArgumentMismatch {
        event: String,
        position: usize,
        label: String,
        expected: String,
        actual: String,
    },
}

impl From<toml::de::Error> for ValsetError {
    fn from(e: toml::de::Error) -> Self {
        ValsetError::Config(e.to_string())
    }
}

impl From<std::io::Error> for ValsetError {
    fn from(e: std::io::Error) -> Self {
        ValsetError::Config(e.to_string())
    }
}
