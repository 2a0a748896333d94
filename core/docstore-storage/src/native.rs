//! The native status vocabulary shared by all storage engines.

use std::fmt;

/// Category of a native engine status.
///
/// The order of the variants is the order in which [`NativeStatus::category`]
/// tests the predicates. `Other` collects everything the engine reports that
/// fits none of the named categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NativeCategory {
    Ok,
    NotFound,
    Corruption,
    IoError,
    NotSupported,
    InvalidArgument,
    Other,
}

impl NativeCategory {
    /// Every category, in resolution order.
    pub const ALL: [NativeCategory; 7] = [
        Self::Ok,
        Self::NotFound,
        Self::Corruption,
        Self::IoError,
        Self::NotSupported,
        Self::InvalidArgument,
        Self::Other,
    ];
}

impl fmt::Display for NativeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "ok",
            Self::NotFound => "not found",
            Self::Corruption => "corruption",
            Self::IoError => "I/O error",
            Self::NotSupported => "not supported",
            Self::InvalidArgument => "invalid argument",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// A status value produced by a storage engine.
///
/// Engines answer one predicate per category. Only `is_ok` and `diagnostic`
/// are required; the category predicates default to `false`, which leaves an
/// engine that answers none of them in [`NativeCategory::Other`].
pub trait NativeStatus {
    fn is_ok(&self) -> bool;

    fn is_not_found(&self) -> bool {
        false
    }

    fn is_corruption(&self) -> bool {
        false
    }

    fn is_io_error(&self) -> bool {
        false
    }

    fn is_not_supported(&self) -> bool {
        false
    }

    fn is_invalid_argument(&self) -> bool {
        false
    }

    /// Renders the engine's own diagnostic text.
    fn diagnostic(&self) -> String;

    /// Names the engine in translated messages.
    fn origin(&self) -> &str {
        "storage engine"
    }

    /// Resolves the predicates to a single category; the first that holds wins.
    fn category(&self) -> NativeCategory {
        if self.is_ok() {
            NativeCategory::Ok
        } else if self.is_not_found() {
            NativeCategory::NotFound
        } else if self.is_corruption() {
            NativeCategory::Corruption
        } else if self.is_io_error() {
            NativeCategory::IoError
        } else if self.is_not_supported() {
            NativeCategory::NotSupported
        } else if self.is_invalid_argument() {
            NativeCategory::InvalidArgument
        } else {
            NativeCategory::Other
        }
    }
}
