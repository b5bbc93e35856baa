//! WASM-target tests for aura-types.
//!
//! Covers the pieces whose behaviour depends on the wasm32 build
//! (uuid/chrono `js` backends) via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use aura_types::config::*;
use aura_types::dataset::*;
use aura_types::message::*;
use aura_types::session::*;

#[wasm_bindgen_test]
fn message_ids_are_unique() {
    let a = Message::user("a");
    let b = Message::user("a");
    assert_ne!(a.id, b.id);
}

#[wasm_bindgen_test]
fn message_timestamp_parses() {
    let msg = Message::assistant("hi");
    assert!(chrono::DateTime::parse_from_rfc3339(&msg.timestamp).is_ok());
}

#[wasm_bindgen_test]
fn local_session_is_marked() {
    let session = Session::local("demo_user");
    assert!(session.is_local());
    assert_eq!(session.user_id, "demo_user");
}

#[wasm_bindgen_test]
fn upload_validation() {
    let limits = UploadConfig::default();
    assert!(DatasetUpload::new("sales.csv", vec![1]).validate(&limits).is_ok());
    assert!(DatasetUpload::new("sales.parquet", vec![1]).validate(&limits).is_err());
}

#[wasm_bindgen_test]
fn config_roundtrip() {
    let config = ClientConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(ClientConfig::from_json(&json).unwrap(), config);
}
