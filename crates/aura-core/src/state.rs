//! Console state and its transition function.
//!
//! All mutation goes through [`ConsoleState::apply`], so the same event
//! sequence always yields the same state.

use aura_types::{
    dataset::DatasetContext,
    event::ConsoleEvent,
    session::Session,
};
use crate::plan::{ActivePlan, PlanTracker};
use crate::status::AgentStatusMap;
use crate::timeline::Timeline;

#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    pub session: Option<Session>,
    /// Session identity was synthesized offline
    pub degraded: bool,
    pub timeline: Timeline,
    pub dataset: Option<DatasetContext>,
    pub plan: PlanTracker,
    pub statuses: AgentStatusMap,
    pub thinking: bool,
    pub step_label: Option<String>,
    pub focused_agent: Option<String>,
    /// A mutating operation is in flight. Owned by the controller.
    pub busy: bool,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &ConsoleEvent) {
        match event {
            ConsoleEvent::SessionReady { session, degraded } => {
                self.session = Some(session.clone());
                self.degraded = *degraded;
            }
            ConsoleEvent::TurnStarted { label } => {
                self.thinking = true;
                self.step_label = Some(label.clone());
            }
            ConsoleEvent::StepLabel { label } => {
                self.step_label = Some(label.clone());
            }
            ConsoleEvent::MessageAppended { message } => {
                self.timeline.append(message.clone());
            }
            ConsoleEvent::ArtifactUpdated { message_id, progress, status } => {
                if !self.timeline.set_progress(message_id, *progress, *status) {
                    log::warn!("No artifact message {} to update", message_id);
                }
            }
            ConsoleEvent::StatusesReset { agents } => {
                self.statuses = AgentStatusMap::queued(agents.iter().cloned());
            }
            ConsoleEvent::AgentStatusChanged { agent, status } => {
                match self.statuses.advanced(agent, *status) {
                    Some(next) => self.statuses = next,
                    None => log::warn!(
                        "Ignoring status change of {} to {} (current: {:?})",
                        agent,
                        status.label(),
                        self.statuses.get(agent).map(|s| s.label())
                    ),
                }
            }
            ConsoleEvent::PlanActivated { plan, message_id, request_id } => {
                self.plan.activate(ActivePlan {
                    plan: plan.clone(),
                    message_id: message_id.clone(),
                    request_id: request_id.clone(),
                });
                self.focused_agent = None;
            }
            ConsoleEvent::FocusChanged { agent } => {
                self.focused_agent = agent.clone();
            }
            ConsoleEvent::TurnFinished | ConsoleEvent::TurnFailed { .. } => {
                self.thinking = false;
                self.step_label = None;
            }
            ConsoleEvent::DatasetLoaded { dataset } => {
                self.dataset = Some(dataset.clone());
            }
            ConsoleEvent::UploadFailed { .. } => {}
            ConsoleEvent::SessionReset => {
                self.timeline.clear();
                self.dataset = None;
                self.plan.clear();
                self.statuses = AgentStatusMap::empty();
                self.thinking = false;
                self.step_label = None;
                self.focused_agent = None;
            }
        }
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.session_id.as_str())
    }

    pub fn dataset_id(&self) -> Option<&str> {
        self.dataset.as_ref().map(|d| d.dataset_id.as_str())
    }
}
