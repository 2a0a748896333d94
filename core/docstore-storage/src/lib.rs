//! Storage boundary for docstore.
//!
//! Storage engines report failures in their own vocabularies. This crate
//! reduces each of them to one ordered set of native categories and maps
//! that set onto the unified [`Status`](docstore_types::Status) model, so
//! code above the boundary never matches on engine-specific errors.
//!
//! # Architecture
//!
//! - [`NativeStatus`] is the seam an engine implements: a success test, one
//!   predicate per category and a diagnostic string
//! - [`translate`] is the pure mapping from a native status to a `Status`
//! - [`IntoStatus`] applies the mapping to `Result`s at call sites
//! - Adapters exist for [`EngineStatus`], `std::io::Error` and, with the
//!   `sqlite` feature, `rusqlite::Error`

mod engine_status;
mod io;
mod native;
#[cfg(feature = "sqlite")]
mod sqlite;
mod translate;

pub use engine_status::EngineStatus;
pub use native::{NativeCategory, NativeStatus};
pub use translate::{IntoStatus, kind_for, translate};
