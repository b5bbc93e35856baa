use serde::{Deserialize, Serialize};

use crate::dataset::DatasetContext;
use crate::message::{ArtifactStatus, Message};
use crate::plan::{AgentStatus, OrchestrationPlan};
use crate::session::Session;

/// State transitions of the console.
/// The controller applies each one to its own state, then publishes it
/// so the presentation layer can project the same sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConsoleEvent {
    /// A session identity was adopted. `degraded` means it was
    /// synthesized locally because the gateway was unreachable.
    SessionReady { session: Session, degraded: bool },
    /// A turn began; the orchestrator is thinking
    TurnStarted { label: String },
    /// The current-step label changed mid-turn
    StepLabel { label: String },
    MessageAppended { message: Message },
    /// In-place mutation of an artifact message's progress (and optionally status)
    ArtifactUpdated {
        message_id: String,
        progress: u8,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        status: Option<ArtifactStatus>,
    },
    /// Every agent of the new plan starts out queued
    StatusesReset { agents: Vec<String> },
    AgentStatusChanged { agent: String, status: AgentStatus },
    /// The new plan became active; its card is `message_id`
    PlanActivated {
        plan: OrchestrationPlan,
        message_id: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        request_id: Option<String>,
    },
    /// Which agent the detail view should show; `None` is the plan overview
    FocusChanged { agent: Option<String> },
    /// The reveal finished
    TurnFinished,
    /// The turn's single query failed
    TurnFailed { error: String },
    DatasetLoaded { dataset: DatasetContext },
    UploadFailed { filename: String, error: String },
    /// Timeline, dataset, plan and statuses were cleared
    SessionReset,
}
