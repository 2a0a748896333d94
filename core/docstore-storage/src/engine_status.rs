//! A native status for engines that report their category directly.

use crate::{NativeCategory, NativeStatus};
use std::fmt;

/// Status returned by an embedded key-value engine: a category and the
/// engine's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineStatus {
    category: NativeCategory,
    message: String,
}

impl EngineStatus {
    /// Creates a status in `category`. The message of a success is dropped.
    pub fn new(category: NativeCategory, message: impl Into<String>) -> Self {
        let message = match category {
            NativeCategory::Ok => String::new(),
            _ => message.into(),
        };
        Self { category, message }
    }

    #[must_use]
    pub const fn ok() -> Self {
        Self {
            category: NativeCategory::Ok,
            message: String::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(NativeCategory::NotFound, message)
    }

    pub fn corruption(message: impl Into<String>) -> Self {
        Self::new(NativeCategory::Corruption, message)
    }

    pub fn io_error(message: impl Into<String>) -> Self {
        Self::new(NativeCategory::IoError, message)
    }

    pub fn not_supported(message: impl Into<String>) -> Self {
        Self::new(NativeCategory::NotSupported, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(NativeCategory::InvalidArgument, message)
    }

    /// An engine-specific failure outside the named categories.
    pub fn other(message: impl Into<String>) -> Self {
        Self::new(NativeCategory::Other, message)
    }

    /// The raw message, without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for EngineStatus {
    fn default() -> Self {
        Self::ok()
    }
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.category {
            NativeCategory::Ok => return f.write_str("OK"),
            NativeCategory::NotFound => "NotFound",
            NativeCategory::Corruption => "Corruption",
            NativeCategory::IoError => "IO error",
            NativeCategory::NotSupported => "Not implemented",
            NativeCategory::InvalidArgument => "Invalid argument",
            NativeCategory::Other => "Unknown",
        };
        write!(f, "{prefix}: {}", self.message)
    }
}

impl std::error::Error for EngineStatus {}

impl NativeStatus for EngineStatus {
    fn is_ok(&self) -> bool {
        self.category == NativeCategory::Ok
    }

    fn is_not_found(&self) -> bool {
        self.category == NativeCategory::NotFound
    }

    fn is_corruption(&self) -> bool {
        self.category == NativeCategory::Corruption
    }

    fn is_io_error(&self) -> bool {
        self.category == NativeCategory::IoError
    }

    fn is_not_supported(&self) -> bool {
        self.category == NativeCategory::NotSupported
    }

    fn is_invalid_argument(&self) -> bool {
        self.category == NativeCategory::InvalidArgument
    }

    fn diagnostic(&self) -> String {
        self.to_string()
    }

    fn category(&self) -> NativeCategory {
        self.category
    }
}
