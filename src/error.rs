//! Error types shared by every utility in the crate.
//!
//! Most functions in this crate are pure and infallible. The ones that can
//! fail return [`Result`], and every failure is one of the [`Error`] variants
//! below.
//!
//! ## Error Categories
//!
//! - **Argument errors**: bad construction parameters such as negative
//!   durations or an empty character set
//! - **Parse errors**: malformed emails, hex colors, byte sizes, or dates
//! - **Environment errors**: no secure random source, no async runtime,
//!   clipboard or storage failures
//!
//! The environment adapters ([`copy_to_clipboard`](crate::clipboard::copy_to_clipboard)
//! and [`LocalStorage`](crate::storage::LocalStorage)) catch their errors and log
//! them instead of returning them.
//!
//! ## Examples
//!
//! ```rust
//! use utilkit::{mask_email, Error};
//!
//! let result = mask_email("not-an-email");
//! assert!(matches!(result, Err(Error::InvalidEmail(_))));
//!
//! if let Err(err) = result {
//!     assert!(err.to_string().contains("not-an-email"));
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors returned by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A construction parameter was out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input was expected to be an email address
    #[error("Invalid email: {0:?}")]
    InvalidEmail(String),

    /// Input was expected to be a `#rrggbb` or `#rgb` color
    #[error("Invalid hex color: {0:?}")]
    InvalidHexColor(String),

    /// Input was expected to be a size such as `1.5 MB`
    #[error("Invalid byte size {input:?}: {msg}")]
    InvalidByteSize { input: String, msg: String },

    /// Input was expected to be a date or date-time
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// The host offers no cryptographically secure random source
    #[error("Secure random source unavailable: {0}")]
    UnavailableSecureRandom(String),

    /// A timer-backed wrapper was built outside of an async runtime
    #[error("Async runtime unavailable: {0}")]
    RuntimeUnavailable(String),

    /// JSON serialization or deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A storage backend failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// The clipboard could not be accessed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an invalid argument error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::Error;
    ///
    /// let err = Error::invalid_argument("delay must not be negative");
    /// assert!(err.to_string().contains("must not be negative"));
    /// ```
    pub fn invalid_argument<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidArgument(msg.to_string())
    }

    /// Creates an invalid email error carrying the rejected input.
    pub fn invalid_email(input: &str) -> Self {
        Error::InvalidEmail(input.to_string())
    }

    /// Creates an invalid hex color error carrying the rejected input.
    pub fn invalid_hex_color(input: &str) -> Self {
        Error::InvalidHexColor(input.to_string())
    }

    /// Creates an invalid byte size error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::Error;
    ///
    /// let err = Error::invalid_byte_size("12 XB", "unknown unit");
    /// assert!(err.to_string().contains("unknown unit"));
    /// ```
    pub fn invalid_byte_size(input: &str, msg: &str) -> Self {
        Error::InvalidByteSize {
            input: input.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an invalid date error carrying the rejected input.
    pub fn invalid_date(input: &str) -> Self {
        Error::InvalidDate(input.to_string())
    }

    /// Creates an error for a missing or failing secure random source.
    pub fn unavailable_secure_random<T: fmt::Display>(msg: T) -> Self {
        Error::UnavailableSecureRandom(msg.to_string())
    }

    /// Creates an error for timer-backed wrappers built outside a runtime.
    pub fn runtime_unavailable<T: fmt::Display>(msg: T) -> Self {
        Error::RuntimeUnavailable(msg.to_string())
    }

    /// Creates a serialization error.
    pub fn serialization<T: fmt::Display>(msg: T) -> Self {
        Error::Serialization(msg.to_string())
    }

    /// Creates a storage error.
    pub fn storage<T: fmt::Display>(msg: T) -> Self {
        Error::Storage(msg.to_string())
    }

    /// Creates a clipboard error.
    pub fn clipboard<T: fmt::Display>(msg: T) -> Self {
        Error::Clipboard(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io<T: fmt::Display>(msg: T) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = Error::invalid_byte_size("1.5 XB", "unknown unit \"XB\"");
        assert_eq!(
            err.to_string(),
            "Invalid byte size \"1.5 XB\": unknown unit \"XB\""
        );
    }

    #[test]
    fn test_from_serde_json() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = Error::from(parse);
        assert!(matches!(err, Error::Serialization(_)));
    }
}
