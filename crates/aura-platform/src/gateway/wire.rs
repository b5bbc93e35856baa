//! JSON shapes of the orchestrator API and their mapping to core types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use aura_core::ports::{HealthStatus, QueryRequest, QueryResponse, SessionGrant};
use aura_types::{
    Result,
    dataset::DatasetContext,
    plan::{AgentExecutionRecord, ExecutionStep, OrchestrationPlan, PlanMode},
};

// ─── Requests ────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ApiQueryRequest<'a> {
    query: &'a str,
    session_id: &'a str,
    user_id: &'a str,
    context: ApiQueryContext<'a>,
    parameters: Map<String, Value>,
}

#[derive(Serialize)]
struct ApiQueryContext<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    dataset_id: Option<&'a str>,
}

impl<'a> From<&'a QueryRequest> for ApiQueryRequest<'a> {
    fn from(req: &'a QueryRequest) -> Self {
        Self {
            query: &req.text,
            session_id: &req.session_id,
            user_id: &req.user_id,
            context: ApiQueryContext {
                dataset_id: req.dataset_id.as_deref(),
            },
            parameters: Map::new(),
        }
    }
}

#[derive(Serialize)]
pub struct ApiSessionRequest<'a> {
    pub user_id: &'a str,
}

#[derive(Serialize)]
pub struct ApiApprovalRequest<'a> {
    pub session_id: &'a str,
}

// ─── Responses ───────────────────────────────────────────────

#[derive(Deserialize)]
struct ApiQueryResponse {
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    orchestration_plan: ApiPlan,
    #[serde(default)]
    agent_responses: Vec<ApiAgentResponse>,
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize, Default)]
struct ApiPlan {
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    reasoning: String,
    #[serde(default)]
    agents: Vec<String>,
    #[serde(default)]
    execution_plan: Vec<ApiStep>,
}

#[derive(Deserialize)]
struct ApiStep {
    agent: String,
    #[serde(default)]
    task: String,
    #[serde(default)]
    parameters: Value,
    #[serde(default)]
    depends_on: Vec<String>,
}

#[derive(Deserialize)]
struct ApiAgentResponse {
    agent: String,
    success: bool,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct ApiDataset {
    dataset_id: String,
    filename: String,
    shape: (u64, u64),
    #[serde(default)]
    columns: Vec<String>,
    #[serde(default)]
    preview: Vec<Value>,
}

#[derive(Deserialize)]
struct ApiSession {
    #[serde(default)]
    session_id: Option<String>,
}

#[derive(Deserialize)]
struct ApiApproval {
    success: bool,
}

// ─── Decoders ────────────────────────────────────────────────

pub fn decode_query_response(body: &str) -> Result<QueryResponse> {
    let api: ApiQueryResponse = serde_json::from_str(body)?;
    let plan = api.orchestration_plan;
    Ok(QueryResponse {
        request_id: api.request_id,
        plan: OrchestrationPlan {
            reasoning: plan.reasoning,
            agents: plan.agents,
            execution_steps: plan
                .execution_plan
                .into_iter()
                .map(|s| ExecutionStep {
                    agent: s.agent,
                    task: s.task,
                    parameters: s.parameters,
                    depends_on: s.depends_on,
                })
                .collect(),
            mode: plan.mode.as_deref().and_then(parse_mode),
        },
        agent_responses: api
            .agent_responses
            .into_iter()
            .map(|r| AgentExecutionRecord {
                agent_name: r.agent,
                success: r.success,
                result_payload: r.data,
                error_message: r.error,
            })
            .collect(),
        success: api.success,
        error: api.error,
    })
}

pub fn decode_dataset(body: &str) -> Result<DatasetContext> {
    let api: ApiDataset = serde_json::from_str(body)?;
    Ok(DatasetContext {
        dataset_id: api.dataset_id,
        filename: api.filename,
        shape: api.shape,
        columns: api.columns,
        preview: api.preview,
    })
}

/// An empty body counts as a grant without an id.
pub fn decode_session(body: &str) -> Result<SessionGrant> {
    if body.trim().is_empty() {
        return Ok(SessionGrant::default());
    }
    let api: ApiSession = serde_json::from_str(body)?;
    Ok(SessionGrant {
        session_id: api.session_id.filter(|id| !id.is_empty()),
    })
}

pub fn decode_approval(body: &str) -> Result<bool> {
    let api: ApiApproval = serde_json::from_str(body)?;
    Ok(api.success)
}

pub fn decode_health(body: &str) -> Result<HealthStatus> {
    Ok(serde_json::from_str(body)?)
}

fn parse_mode(mode: &str) -> Option<PlanMode> {
    match mode {
        "cold_start" => Some(PlanMode::ColdStart),
        "deep_dive" => Some(PlanMode::DeepDive),
        "ad_hoc" => Some(PlanMode::AdHoc),
        other => {
            log::debug!("Unknown plan mode: {}", other);
            None
        }
    }
}
