//! `rusqlite::Error` as a native status.
//!
//! SQLite result codes are folded into the native categories. Constraint
//! violations, schema changes and generic `SQLITE_ERROR` failures have no
//! named category and resolve to [`NativeCategory::Other`](crate::NativeCategory::Other).

use crate::NativeStatus;
use rusqlite::{Error, ErrorCode};

impl NativeStatus for Error {
    fn is_ok(&self) -> bool {
        false
    }

    fn is_not_found(&self) -> bool {
        matches!(self, Error::QueryReturnedNoRows)
            || self.sqlite_error_code() == Some(ErrorCode::NotFound)
    }

    fn is_corruption(&self) -> bool {
        matches!(
            self.sqlite_error_code(),
            Some(ErrorCode::DatabaseCorrupt | ErrorCode::NotADatabase)
        )
    }

    fn is_io_error(&self) -> bool {
        matches!(
            self.sqlite_error_code(),
            Some(
                ErrorCode::SystemIoFailure
                    | ErrorCode::DiskFull
                    | ErrorCode::CannotOpen
                    | ErrorCode::DatabaseBusy
                    | ErrorCode::DatabaseLocked
                    | ErrorCode::OutOfMemory
                    | ErrorCode::FileLockingProtocolFailed
            )
        )
    }

    fn is_not_supported(&self) -> bool {
        matches!(self, Error::InvalidQuery)
            || self.sqlite_error_code() == Some(ErrorCode::NoLargeFileSupport)
    }

    fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidParameterName(_)
                | Error::InvalidParameterCount(..)
                | Error::InvalidColumnIndex(_)
                | Error::InvalidColumnName(_)
                | Error::InvalidColumnType(..)
                | Error::InvalidPath(_)
                | Error::NulError(_)
        ) || matches!(
            self.sqlite_error_code(),
            Some(
                ErrorCode::ApiMisuse
                    | ErrorCode::ParameterOutOfRange
                    | ErrorCode::TypeMismatch
                    | ErrorCode::TooBig
            )
        )
    }

    fn diagnostic(&self) -> String {
        self.to_string()
    }

    fn origin(&self) -> &str {
        "SQLite"
    }
}
