//! `std::io::Error` as a native status, for file-backed engines.

use crate::NativeStatus;
use std::io::{self, ErrorKind};

impl NativeStatus for io::Error {
    fn is_ok(&self) -> bool {
        false
    }

    fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    fn is_corruption(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidData | ErrorKind::UnexpectedEof)
    }

    // Every kind without a more specific category.
    fn is_io_error(&self) -> bool {
        !matches!(
            self.kind(),
            ErrorKind::NotFound
                | ErrorKind::InvalidData
                | ErrorKind::UnexpectedEof
                | ErrorKind::InvalidInput
                | ErrorKind::Unsupported
        )
    }

    fn is_not_supported(&self) -> bool {
        self.kind() == ErrorKind::Unsupported
    }

    fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }

    fn diagnostic(&self) -> String {
        self.to_string()
    }

    fn origin(&self) -> &str {
        "filesystem"
    }
}
