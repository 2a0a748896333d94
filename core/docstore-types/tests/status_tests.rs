use docstore_types::{ErrorKind, Status};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ── Construction ──────────────────────────────────────────────────

#[test]
fn ok_has_no_message() {
    let status = Status::ok();
    assert!(status.is_ok());
    assert_eq!(status.kind(), ErrorKind::Ok);
    assert_eq!(status.message(), "");
}

#[test]
fn default_is_ok() {
    assert_eq!(Status::default(), Status::ok());
}

#[test]
fn ok_kind_drops_message() {
    let status = Status::new(ErrorKind::Ok, "ignored");
    assert_eq!(status, Status::ok());
}

#[test]
fn failure_keeps_message() {
    let status = Status::new(ErrorKind::NotFound, "key absent");
    assert!(!status.is_ok());
    assert_eq!(status.kind(), ErrorKind::NotFound);
    assert_eq!(status.message(), "key absent");
}

#[test]
fn blank_failure_message_falls_back_to_kind_name() {
    assert_eq!(Status::data_loss("").message(), "DataLoss");
    assert_eq!(Status::unavailable("   ").message(), "Unavailable");
}

#[test]
fn named_constructors_set_kind() {
    assert_eq!(Status::not_found("x").kind(), ErrorKind::NotFound);
    assert_eq!(Status::data_loss("x").kind(), ErrorKind::DataLoss);
    assert_eq!(Status::unavailable("x").kind(), ErrorKind::Unavailable);
    assert_eq!(Status::unimplemented("x").kind(), ErrorKind::Unimplemented);
    assert_eq!(Status::invalid_argument("x").kind(), ErrorKind::InvalidArgument);
    assert_eq!(Status::unknown("x").kind(), ErrorKind::Unknown);
    assert_eq!(Status::internal("x").kind(), ErrorKind::Internal);
}

// ── Display ───────────────────────────────────────────────────────

#[test]
fn display_ok() {
    assert_eq!(Status::ok().to_string(), "OK");
}

#[test]
fn display_failure() {
    assert_eq!(
        Status::data_loss("checksum mismatch").to_string(),
        "DataLoss: checksum mismatch"
    );
}

#[test]
fn status_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(Status::unknown("weird"));
    assert_eq!(err.to_string(), "Unknown: weird");
}

// ── Composition ───────────────────────────────────────────────────

#[test]
fn with_context_prefixes_message() {
    let status = Status::not_found("key absent").with_context("loading document");
    assert_eq!(status.kind(), ErrorKind::NotFound);
    assert_eq!(status.message(), "loading document: key absent");
}

#[test]
fn with_context_leaves_ok_alone() {
    assert_eq!(Status::ok().with_context("anything"), Status::ok());
}

#[test]
fn caused_by_appends_cause() {
    let status = Status::internal("flush failed").caused_by(Status::unavailable("disk full"));
    assert_eq!(status.kind(), ErrorKind::Internal);
    assert_eq!(
        status.message(),
        "flush failed: caused by Unavailable: disk full"
    );
}

#[test]
fn caused_by_on_ok_adopts_cause() {
    let cause = Status::data_loss("bad block");
    assert_eq!(Status::ok().caused_by(cause.clone()), cause);
}

#[test]
fn caused_by_ok_cause_is_ignored() {
    let status = Status::unknown("weird");
    assert_eq!(status.clone().caused_by(Status::ok()), status);
}

#[test]
fn caused_by_self_is_noop() {
    let status = Status::unknown("weird");
    assert_eq!(status.clone().caused_by(status.clone()), status);
}

#[test]
fn into_result() {
    assert_eq!(Status::ok().into_result(), Ok(()));
    let err = Status::not_found("gone");
    assert_eq!(err.clone().into_result(), Err(err));
}

// ── Serde ─────────────────────────────────────────────────────────

#[test]
fn serde_shape() {
    let json = serde_json::to_value(Status::data_loss("checksum mismatch")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "kind": "data_loss", "message": "checksum mismatch" })
    );
}

#[test]
fn serde_roundtrip() {
    let status = Status::unavailable("disk full");
    let json = serde_json::to_string(&status).unwrap();
    let parsed: Status = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, status);
}

#[test]
fn deserialize_enforces_invariants() {
    let ok: Status = serde_json::from_str(r#"{"kind":"ok","message":"stray"}"#).unwrap();
    assert_eq!(ok, Status::ok());

    let blank: Status = serde_json::from_str(r#"{"kind":"not_found"}"#).unwrap();
    assert_eq!(blank.message(), "NotFound");
}

// ── Properties ────────────────────────────────────────────────────

fn kind_strategy() -> impl Strategy<Value = ErrorKind> {
    prop::sample::select(ErrorKind::ALL.to_vec())
}

proptest! {
    /// Construction never yields a message-bearing Ok or a blank failure.
    #[test]
    fn construction_upholds_invariants(kind in kind_strategy(), message in ".{0,64}") {
        let status = Status::new(kind, message.clone());
        prop_assert_eq!(status.kind(), kind);
        if kind.is_ok() {
            prop_assert!(status.message().is_empty());
        } else {
            prop_assert!(!status.message().trim().is_empty());
            if !message.trim().is_empty() {
                prop_assert_eq!(status.message(), message.as_str());
            }
        }
    }
}
