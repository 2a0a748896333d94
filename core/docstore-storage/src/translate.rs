//! Native status → unified [`Status`] translation.

use crate::{NativeCategory, NativeStatus};
use docstore_types::{ErrorKind, Status};
use std::fmt;
use tracing::debug;

/// Maps a native category to its unified kind.
///
/// Corruption means the stored bytes are unusable, so it becomes `DataLoss`.
/// I/O failures are environmental and retryable, so they become
/// `Unavailable`. Anything unnamed becomes `Unknown`.
#[must_use]
pub const fn kind_for(category: NativeCategory) -> ErrorKind {
    match category {
        NativeCategory::Ok => ErrorKind::Ok,
        NativeCategory::NotFound => ErrorKind::NotFound,
        NativeCategory::Corruption => ErrorKind::DataLoss,
        NativeCategory::IoError => ErrorKind::Unavailable,
        NativeCategory::NotSupported => ErrorKind::Unimplemented,
        NativeCategory::InvalidArgument => ErrorKind::InvalidArgument,
        NativeCategory::Other => ErrorKind::Unknown,
    }
}

/// Translates a native engine status into a [`Status`].
///
/// Success yields [`Status::ok`]. A failure keeps the engine's diagnostic,
/// tagged with its origin: `"<origin> error: <diagnostic>"`.
pub fn translate<S: NativeStatus + ?Sized>(native: &S) -> Status {
    let category = native.category();
    if category == NativeCategory::Ok {
        return Status::ok();
    }
    Status::new(
        kind_for(category),
        format!("{} error: {}", native.origin(), native.diagnostic()),
    )
}

/// Translates the error side of a storage `Result`.
pub trait IntoStatus<T> {
    fn into_status(self) -> Result<T, Status>;

    /// Like [`into_status`](IntoStatus::into_status), with `context` prepended
    /// to the message.
    fn into_status_with<C: fmt::Display>(self, context: C) -> Result<T, Status>;
}

impl<T, E: NativeStatus> IntoStatus<T> for Result<T, E> {
    fn into_status(self) -> Result<T, Status> {
        self.map_err(|err| log_translated(&err))
    }

    fn into_status_with<C: fmt::Display>(self, context: C) -> Result<T, Status> {
        self.map_err(|err| log_translated(&err).with_context(context))
    }
}

fn log_translated<E: NativeStatus>(native: &E) -> Status {
    // An `Err` carrying a success status must still surface as a failure.
    let status = match translate(native) {
        status if status.is_ok() => Status::unknown(format!(
            "{} reported success for a failed operation",
            native.origin()
        )),
        status => status,
    };
    debug!(
        origin = native.origin(),
        category = %native.category(),
        kind = %status.kind(),
        "storage operation failed"
    );
    status
}
