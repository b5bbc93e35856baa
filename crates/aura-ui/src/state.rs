//! UI-level state that drives rendering.
//! Console data is mirrored by replaying bus events through the same
//! reducer the controller uses; only the pure-UI bits (selection, panel
//! flags, status line) are tracked here.

use serde::Serialize;
use aura_core::event_bus::EventBus;
use aura_core::state::ConsoleState;
use aura_types::{
    dataset::DatasetContext,
    event::ConsoleEvent,
    message::Message,
    plan::{AgentStatus, PlanMode},
};

/// State visible to the presentation layer
#[derive(Debug, Clone)]
pub struct UiState {
    /// Mirror of the controller's state
    pub console: ConsoleState,
    /// Agent the user picked; overrides focus
    pub selected_agent: Option<String>,
    pub show_sidebar: bool,
    pub show_detail_panel: bool,
    /// Status line text
    pub status_text: String,
    pub last_error: Option<String>,
    /// Sequence number of the next bus event this state expects
    next_seq: u64,
    /// Events another consumer drained before this state saw them
    pub missed_events: u64,
}

/// Flat, serializable snapshot handed to the page
#[derive(Debug, Serialize)]
pub struct UiView<'a> {
    pub session_id: Option<&'a str>,
    /// Running on a locally synthesized session
    pub offline: bool,
    pub messages: &'a [Message],
    pub thinking: bool,
    pub step_label: Option<&'a str>,
    pub dataset: Option<&'a DatasetContext>,
    pub plan: Option<PlanView<'a>>,
    pub plan_progress: Option<u8>,
    pub agents: Vec<AgentRow<'a>>,
    pub detail_agent: Option<&'a str>,
    pub show_sidebar: bool,
    pub show_detail_panel: bool,
    pub status_text: &'a str,
    pub last_error: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct PlanView<'a> {
    pub message_id: &'a str,
    pub reasoning: &'a str,
    pub agents: &'a [String],
    pub mode: Option<PlanMode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentRow<'a> {
    pub name: &'a str,
    pub status: AgentStatus,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            console: ConsoleState::new(),
            selected_agent: None,
            show_sidebar: true,
            show_detail_panel: false,
            status_text: "Ready".to_string(),
            last_error: None,
            next_seq: 0,
            missed_events: 0,
        }
    }

    /// Drain the bus into this projection. Returns whether anything changed.
    pub fn sync(&mut self, bus: &EventBus) -> bool {
        let batch = bus.drain_batch();
        if batch.first_seq > self.next_seq {
            let missed = batch.first_seq - self.next_seq;
            log::warn!("UI state missed {} console event(s); view may be stale", missed);
            self.missed_events += missed;
        }
        self.next_seq = batch.end_seq();
        if batch.is_empty() {
            return false;
        }
        self.process_events(batch.events);
        true
    }

    pub fn process_events(&mut self, events: Vec<ConsoleEvent>) {
        for event in events {
            self.console.apply(&event);
            match event {
                ConsoleEvent::SessionReady { degraded: true, .. } => {
                    self.status_text = "Offline mode".to_string();
                }
                ConsoleEvent::TurnStarted { label } => {
                    self.status_text = label;
                    self.last_error = None;
                }
                ConsoleEvent::StepLabel { label } => {
                    self.status_text = label;
                }
                ConsoleEvent::PlanActivated { .. } => {
                    self.selected_agent = None;
                    self.show_detail_panel = true;
                }
                ConsoleEvent::TurnFinished => {
                    self.status_text = "Ready".to_string();
                }
                ConsoleEvent::TurnFailed { error } => {
                    self.status_text = format!("Error: {}", error);
                    self.last_error = Some(error);
                }
                ConsoleEvent::DatasetLoaded { dataset } => {
                    self.status_text = format!("Dataset: {}", dataset.filename);
                }
                ConsoleEvent::UploadFailed { filename, error } => {
                    self.last_error = Some(format!("{}: {}", filename, error));
                }
                ConsoleEvent::SessionReset => {
                    self.selected_agent = None;
                    self.show_detail_panel = false;
                    self.status_text = "Ready".to_string();
                    self.last_error = None;
                }
                _ => {}
            }
        }
    }

    // ─── Intents ─────────────────────────────────────────────

    /// Pin the detail view to `agent`. Unknown agents are ignored.
    pub fn select_agent(&mut self, agent: &str) -> bool {
        if self.console.statuses.get(agent).is_none() {
            log::warn!("Cannot select unknown agent {}", agent);
            return false;
        }
        self.selected_agent = Some(agent.to_string());
        self.show_detail_panel = true;
        true
    }

    /// Back to following the reveal (or the plan overview).
    pub fn clear_selection(&mut self) {
        self.selected_agent = None;
    }

    pub fn toggle_sidebar(&mut self) {
        self.show_sidebar = !self.show_sidebar;
    }

    pub fn toggle_detail_panel(&mut self) {
        self.show_detail_panel = !self.show_detail_panel;
    }

    // ─── Derived ─────────────────────────────────────────────

    /// Agent whose details should be displayed; `None` means the plan overview.
    pub fn detail_agent(&self) -> Option<&str> {
        self.selected_agent
            .as_deref()
            .or(self.console.focused_agent.as_deref())
    }

    /// Latest result card for `agent`.
    pub fn result_for(&self, agent: &str) -> Option<&Message> {
        self.console.timeline.iter().rev().find(|m| {
            m.artifact
                .as_ref()
                .is_some_and(|a| a.agent_names.is_none() && a.title == agent)
        })
    }

    /// Plan card progress, if a plan is active.
    pub fn plan_progress(&self) -> Option<u8> {
        let id = self.console.plan.message_id()?;
        self.console
            .timeline
            .get(id)
            .and_then(|m| m.artifact.as_ref())
            .map(|a| a.progress)
    }

    pub fn is_busy(&self) -> bool {
        self.console.thinking
    }

    pub fn view(&self) -> UiView<'_> {
        let console = &self.console;
        UiView {
            session_id: console.session_id(),
            offline: console.degraded,
            messages: console.timeline.messages(),
            thinking: console.thinking,
            step_label: console.step_label.as_deref(),
            dataset: console.dataset.as_ref(),
            plan: console.plan.active().map(|a| PlanView {
                message_id: &a.message_id,
                reasoning: &a.plan.reasoning,
                agents: &a.plan.agents,
                mode: a.plan.mode,
            }),
            plan_progress: self.plan_progress(),
            agents: console
                .statuses
                .iter()
                .map(|(name, status)| AgentRow { name, status })
                .collect(),
            detail_agent: self.detail_agent(),
            show_sidebar: self.show_sidebar,
            show_detail_panel: self.show_detail_panel,
            status_text: &self.status_text,
            last_error: self.last_error.as_deref(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
