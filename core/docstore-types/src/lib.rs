//! Core status types for docstore.
//!
//! This crate defines the engine-agnostic failure vocabulary shared by every
//! layer above the storage boundary:
//! - [`ErrorKind`], the closed taxonomy of status codes
//! - [`Status`], a kind paired with a human-readable message
//!
//! Storage adapters translate their native errors into [`Status`]; nothing
//! above them sees engine-specific error types.

mod kind;
mod status;

pub use kind::{ErrorKind, InvalidErrorKind, ParseErrorKind};
pub use status::Status;

/// Result type for operations that fail with a [`Status`].
pub type StatusResult<T> = std::result::Result<T, Status>;
