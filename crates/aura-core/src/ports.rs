//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `aura-core` (pure Rust).
//! Implementations live in `aura-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use aura_types::{
    Result,
    dataset::{DatasetContext, DatasetUpload},
    plan::{AgentExecutionRecord, OrchestrationPlan},
};

// ─── Gateway Port ────────────────────────────────────────────

/// Answer to a session request. The id may be absent, in which
/// case the caller synthesizes one.
#[derive(Debug, Clone, Default)]
pub struct SessionGrant {
    pub session_id: Option<String>,
}

/// One turn's query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub text: String,
    pub session_id: String,
    pub user_id: String,
    pub dataset_id: Option<String>,
}

/// The single bulk response of a turn
#[derive(Debug, Clone)]
pub struct QueryResponse {
    pub request_id: Option<String>,
    pub plan: OrchestrationPlan,
    /// In the order the backend executed them
    pub agent_responses: Vec<AgentExecutionRecord>,
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Remote orchestrator service. Transport failures and non-2xx
/// responses are returned as errors, never as `success = false` bodies.
#[async_trait(?Send)]
pub trait GatewayPort {
    async fn create_session(&self, user_id: &str) -> Result<SessionGrant>;

    async fn send_query(&self, req: QueryRequest) -> Result<QueryResponse>;

    async fn upload_dataset(&self, upload: DatasetUpload) -> Result<DatasetContext>;

    /// Human-in-the-loop order confirmation
    async fn approve_order(&self, order_id: &str, session_id: &str) -> Result<bool>;

    async fn check_health(&self) -> Result<HealthStatus>;
}

// ─── Clock Port ──────────────────────────────────────────────

/// Suspension source for the staged reveal. Browser builds use real
/// timers; tests use a virtual clock that returns immediately.
#[async_trait(?Send)]
pub trait ClockPort {
    async fn sleep(&self, ms: u64);
}
