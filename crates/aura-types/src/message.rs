use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Who authored a timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Plain,
    Artifact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactStatus {
    Processing,
    Completed,
    Failed,
}

/// Structured, mutable progress state carried by an artifact message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactState {
    pub title: String,
    pub status: ArtifactStatus,
    /// 0..=100
    pub progress: u8,
    /// Set on plan cards only
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub agent_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub summary: Option<String>,
}

impl ArtifactState {
    /// A plan card at the start of a turn: processing, nothing done yet.
    pub fn plan_card(agent_names: Vec<String>) -> Self {
        Self {
            title: "Orchestration Plan".to_string(),
            status: ArtifactStatus::Processing,
            progress: 0,
            agent_names: Some(agent_names),
            payload: None,
            summary: None,
        }
    }

    /// A finished agent's result card.
    pub fn agent_result(
        agent: impl Into<String>,
        success: bool,
        payload: Value,
        error: Option<String>,
    ) -> Self {
        Self {
            title: agent.into(),
            status: if success {
                ArtifactStatus::Completed
            } else {
                ArtifactStatus::Failed
            },
            progress: 100,
            agent_names: None,
            payload: Some(payload),
            summary: error,
        }
    }

    pub fn failure(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: ArtifactStatus::Failed,
            progress: 0,
            agent_names: None,
            payload: None,
            summary: Some(summary.into()),
        }
    }
}

/// A single entry in the conversation timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// RFC 3339
    pub timestamp: String,
    pub kind: MessageKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub artifact: Option<ArtifactState>,
}

impl Message {
    fn new(sender: Sender, text: String, artifact: Option<ArtifactState>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            text,
            timestamp: chrono::Utc::now().to_rfc3339(),
            kind: if artifact.is_some() {
                MessageKind::Artifact
            } else {
                MessageKind::Plain
            },
            artifact,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text.into(), None)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text.into(), None)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Sender::System, text.into(), None)
    }

    pub fn artifact(sender: Sender, text: impl Into<String>, artifact: ArtifactState) -> Self {
        Self::new(sender, text.into(), Some(artifact))
    }

    pub fn is_artifact(&self) -> bool {
        self.kind == MessageKind::Artifact
    }
}
