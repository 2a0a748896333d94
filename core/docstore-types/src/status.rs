//! The unified status value.

use crate::ErrorKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of an operation: an [`ErrorKind`] plus a diagnostic message.
///
/// ## Invariants
/// - An `Ok` status has an empty message.
/// - A failure status never has a blank message.
///
/// Both hold for every constructor, including deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "StatusRepr", into = "StatusRepr")]
pub struct Status {
    kind: ErrorKind,
    message: String,
}

impl Status {
    /// The success status.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            kind: ErrorKind::Ok,
            message: String::new(),
        }
    }

    /// Creates a status of the given kind.
    ///
    /// The message is dropped for [`ErrorKind::Ok`]. A blank message on a
    /// failure kind is replaced by the kind's name.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        if kind.is_ok() {
            return Self::ok();
        }
        let message = message.into();
        let message = if message.trim().is_empty() {
            kind.as_str().to_string()
        } else {
            message
        };
        Self { kind, message }
    }

    /// Convenience constructor for [`ErrorKind::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Convenience constructor for [`ErrorKind::DataLoss`].
    pub fn data_loss(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DataLoss, message)
    }

    /// Convenience constructor for [`ErrorKind::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unavailable, message)
    }

    /// Convenience constructor for [`ErrorKind::Unimplemented`].
    pub fn unimplemented(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unimplemented, message)
    }

    /// Convenience constructor for [`ErrorKind::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Convenience constructor for [`ErrorKind::Unknown`].
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unknown, message)
    }

    /// Convenience constructor for [`ErrorKind::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// The status kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The diagnostic message; empty for success.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.kind.is_ok()
    }

    /// Prepends `context` to the message. Success passes through untouched.
    #[must_use]
    pub fn with_context(self, context: impl fmt::Display) -> Self {
        if self.is_ok() {
            return self;
        }
        Self {
            kind: self.kind,
            message: format!("{context}: {}", self.message),
        }
    }

    /// Records `cause` as the reason for this status.
    ///
    /// A success status adopts `cause` outright. A successful `cause`, or one
    /// equal to `self`, is ignored so a status never lists itself as its own
    /// cause. Otherwise the kind is kept and the cause is appended to the
    /// message.
    #[must_use]
    pub fn caused_by(self, cause: Status) -> Self {
        if cause.is_ok() || self == cause {
            return self;
        }
        if self.is_ok() {
            return cause;
        }
        Self {
            kind: self.kind,
            message: format!("{}: caused by {cause}", self.message),
        }
    }

    /// Converts into a `Result`, `Ok(())` on success.
    pub fn into_result(self) -> crate::StatusResult<()> {
        if self.is_ok() { Ok(()) } else { Err(self) }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::ok()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            f.write_str("OK")
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for Status {}

#[derive(Serialize, Deserialize)]
struct StatusRepr {
    kind: ErrorKind,
    #[serde(default)]
    message: String,
}

impl From<StatusRepr> for Status {
    fn from(repr: StatusRepr) -> Self {
        Self::new(repr.kind, repr.message)
    }
}

impl From<Status> for StatusRepr {
    fn from(status: Status) -> Self {
        Self {
            kind: status.kind,
            message: status.message,
        }
    }
}
