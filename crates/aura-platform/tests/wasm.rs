//! WASM-target tests for aura-platform (Node.js runtime).
//!
//! Covers the wire decoders against bodies shaped like the orchestrator's
//! and the timer clock, under wasm32-unknown-unknown via
//! `wasm-pack test --node`. The HTTP adapter itself needs a live backend.

use wasm_bindgen_test::*;

use aura_core::ports::ClockPort;
use aura_platform::gateway::wire::*;
use aura_platform::TimerClock;
use aura_types::plan::PlanMode;
use aura_types::ConsoleError;

const QUERY_BODY: &str = r#"{
    "request_id": "9b2f",
    "orchestration_plan": {
        "mode": "deep_dive",
        "reasoning": "Dataset present, user wants trends",
        "agents": ["data_harvester", "trend_analyst"],
        "execution_plan": [
            {"agent": "data_harvester", "task": "Load", "parameters": {}, "depends_on": []},
            {"agent": "trend_analyst", "task": "Find trends", "parameters": {"window": 7}, "depends_on": ["data_harvester"]}
        ]
    },
    "agent_responses": [
        {"agent": "data_harvester", "success": true, "data": {"rows": 1000}, "error": null},
        {"agent": "trend_analyst", "success": false, "data": null, "error": "no date column"}
    ],
    "success": true,
    "error": null
}"#;

#[wasm_bindgen_test]
fn query_response_decodes() {
    let resp = decode_query_response(QUERY_BODY).unwrap();
    assert_eq!(resp.request_id.as_deref(), Some("9b2f"));
    assert!(resp.success);
    assert_eq!(resp.plan.mode, Some(PlanMode::DeepDive));
    assert_eq!(resp.plan.agents, vec!["data_harvester", "trend_analyst"]);
    assert_eq!(resp.plan.execution_steps[1].depends_on, vec!["data_harvester"]);
    assert_eq!(resp.agent_responses.len(), 2);
    assert_eq!(resp.agent_responses[0].agent_name, "data_harvester");
    assert_eq!(resp.agent_responses[1].error_message.as_deref(), Some("no date column"));
}

#[wasm_bindgen_test]
fn failed_query_response_decodes_with_empty_plan() {
    let resp = decode_query_response(
        r#"{"request_id": "x", "orchestration_plan": {}, "agent_responses": [], "success": false, "error": "Failed to generate plan"}"#,
    )
    .unwrap();
    assert!(!resp.success);
    assert!(resp.plan.agents.is_empty());
    assert_eq!(resp.error.as_deref(), Some("Failed to generate plan"));
}

#[wasm_bindgen_test]
fn unknown_mode_is_dropped() {
    let resp = decode_query_response(
        r#"{"orchestration_plan": {"mode": "turbo", "reasoning": "r", "agents": []}, "success": true}"#,
    )
    .unwrap();
    assert!(resp.plan.mode.is_none());
}

#[wasm_bindgen_test]
fn dataset_decodes() {
    let ds = decode_dataset(
        r#"{"dataset_id": "d1", "filename": "sales.csv", "shape": [1000, 12], "columns": ["a", "b"], "preview": [{"a": 1}]}"#,
    )
    .unwrap();
    assert_eq!(ds.shape, (1000, 12));
    assert_eq!(ds.preview.len(), 1);
}

#[wasm_bindgen_test]
fn malformed_body_is_serialization_error() {
    let err = decode_dataset(r#"{"dataset_id": 5}"#).unwrap_err();
    assert!(matches!(err, ConsoleError::Serialization(_)));
}

#[wasm_bindgen_test]
fn session_grant_variants() {
    assert_eq!(decode_session(r#"{"session_id": "s1"}"#).unwrap().session_id.as_deref(), Some("s1"));
    assert!(decode_session(r#"{"session_id": ""}"#).unwrap().session_id.is_none());
    assert!(decode_session("{}").unwrap().session_id.is_none());
    assert!(decode_session("").unwrap().session_id.is_none());
}

#[wasm_bindgen_test]
fn approval_and_health_decode() {
    assert!(decode_approval(r#"{"success": true}"#).unwrap());
    let health = decode_health(r#"{"status": "healthy", "timestamp": "2024-01-01T00:00:00", "service": "MSME Agent Platform"}"#).unwrap();
    assert!(health.is_healthy());
}

#[wasm_bindgen_test]
async fn timer_clock_zero_returns() {
    TimerClock.sleep(0).await;
}
