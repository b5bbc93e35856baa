use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How the orchestrator classified the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanMode {
    ColdStart,
    DeepDive,
    AdHoc,
}

/// One planned unit of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionStep {
    pub agent: String,
    pub task: String,
    #[serde(default)]
    pub parameters: Value,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub depends_on: Vec<String>,
}

/// The orchestrator's plan for one turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestrationPlan {
    pub reasoning: String,
    /// Unique agent names, in the order the orchestrator chose
    pub agents: Vec<String>,
    #[serde(default)]
    pub execution_steps: Vec<ExecutionStep>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mode: Option<PlanMode>,
}

impl OrchestrationPlan {
    pub fn new(reasoning: impl Into<String>, agents: Vec<String>) -> Self {
        Self {
            reasoning: reasoning.into(),
            agents,
            execution_steps: Vec::new(),
            mode: None,
        }
    }

    pub fn contains_agent(&self, agent: &str) -> bool {
        self.agents.iter().any(|a| a == agent)
    }

    pub fn step_for(&self, agent: &str) -> Option<&ExecutionStep> {
        self.execution_steps.iter().find(|s| s.agent == agent)
    }
}

/// Outcome of a single agent, as delivered in the bulk turn response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentExecutionRecord {
    pub agent_name: String,
    pub success: bool,
    #[serde(default)]
    pub result_payload: Value,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_message: Option<String>,
}

impl AgentExecutionRecord {
    pub fn succeeded(agent: impl Into<String>, payload: Value) -> Self {
        Self {
            agent_name: agent.into(),
            success: true,
            result_payload: payload,
            error_message: None,
        }
    }

    pub fn failed(agent: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            agent_name: agent.into(),
            success: false,
            result_payload: Value::Null,
            error_message: Some(error.into()),
        }
    }
}

/// Lifecycle of an agent within one turn.
/// Ordered: a status only ever moves to a later rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Queued,
    Processing,
    Completed,
    Failed,
}

impl AgentStatus {
    fn rank(self) -> u8 {
        match self {
            AgentStatus::Queued => 0,
            AgentStatus::Processing => 1,
            AgentStatus::Completed | AgentStatus::Failed => 2,
        }
    }

    /// Whether moving from `self` to `next` goes forward.
    pub fn can_advance_to(self, next: AgentStatus) -> bool {
        next.rank() > self.rank()
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, AgentStatus::Completed | AgentStatus::Failed)
    }

    pub fn label(self) -> &'static str {
        match self {
            AgentStatus::Queued => "queued",
            AgentStatus::Processing => "processing",
            AgentStatus::Completed => "completed",
            AgentStatus::Failed => "failed",
        }
    }
}
