//! Error handling for jamlink
//!
//! Provides error types for the client model boundary:
//! - Sound card errors (device selection rejected by the model)
//! - Index errors (combo box positions that map to no known value)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Sound card error type
///
/// Returned by the client model when a device selection cannot be applied.
/// The model keeps the previously working device in that case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SoundCardError {
    /// The requested device index does not exist
    #[error("Device index {index} is out of range (only {count} devices available)")]
    InvalidDevice {
        /// The requested device index.
        index: usize,
        /// The number of devices the model knows about.
        count: usize,
    },

    /// The driver refused to open the device
    #[error("{name}: {reason}")]
    DriverFailure {
        /// The name of the device that failed.
        name: String,
        /// The reason reported by the driver.
        reason: String,
    },

    /// Generic sound card error
    #[error("{message}")]
    Other {
        /// The error message.
        message: String,
    },
}

impl SoundCardError {
    /// Create an error from a driver message
    pub fn other(message: impl Into<String>) -> Self {
        SoundCardError::Other {
            message: message.into(),
        }
    }
}

/// Main error type for jamlink
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sound card error
    #[error(transparent)]
    SoundCard(#[from] SoundCardError),

    /// A selector position that does not correspond to any value
    #[error("Invalid {kind} index: {index}")]
    InvalidIndex {
        /// The kind of value being selected.
        kind: &'static str,
        /// The rejected index.
        index: usize,
    },
}

impl Error {
    /// Check if this is a sound card error
    pub fn is_sound_card_error(&self) -> bool {
        matches!(self, Error::SoundCard(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_card_error_display() {
        let err = SoundCardError::InvalidDevice { index: 5, count: 2 };
        assert_eq!(
            err.to_string(),
            "Device index 5 is out of range (only 2 devices available)"
        );

        let err = SoundCardError::DriverFailure {
            name: "ASIO4ALL".to_string(),
            reason: "device busy".to_string(),
        };
        assert_eq!(err.to_string(), "ASIO4ALL: device busy");

        assert_eq!(SoundCardError::other("no driver").to_string(), "no driver");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = SoundCardError::other("gone").into();
        assert!(err.is_sound_card_error());
        assert_eq!(err.to_string(), "gone");

        let err = Error::InvalidIndex {
            kind: "audio quality",
            index: 7,
        };
        assert!(!err.is_sound_card_error());
        assert_eq!(err.to_string(), "Invalid audio quality index: 7");
    }
}
