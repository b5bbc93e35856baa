//! Staged reveal — unbundles one bulk turn response into timed steps.
//!
//! The sequence for a plan with agents `a1..an` and records `r1..rm`:
//!
//! 1. open: statuses reset to queued, reasoning message, plan card, plan active
//! 2. for each record, in response order:
//!    - start: agent processing, step label names it (after a settle pause
//!      unless it is the first)
//!    - finish (after a work pause): final status, result card, plan card
//!      progress, focus on the agent. Progress counts each planned agent
//!      once; records outside the plan and repeats only add a card
//! 3. close (after a settle pause if any record was shown): planned agents
//!    with no record marked failed, thinking cleared, focus back to the
//!    overview, plan card completed at 100
//!
//! Each step is a batch of events applied with no suspension in between.
//! Pauses are described, not performed; the driver owns the clock. A
//! streaming backend would map its per-agent events onto the same steps.

use std::collections::VecDeque;

use aura_types::{
    config::PacingConfig,
    event::ConsoleEvent,
    message::{ArtifactState, ArtifactStatus, Message, Sender},
    plan::{AgentExecutionRecord, AgentStatus, OrchestrationPlan},
};
use crate::plan::plan_progress;
use crate::ports::QueryResponse;

/// Label shown while waiting on the orchestrator
pub const ORCHESTRATOR_LABEL: &str = "Orchestrator is planning...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// An agent is shown working
    Work,
    /// A result stays on screen before the next one starts
    Settle,
}

impl Pace {
    pub fn duration_ms(self, pacing: &PacingConfig) -> u64 {
        match self {
            Pace::Work => pacing.work_ms,
            Pace::Settle => pacing.settle_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealStep {
    /// Pause before applying `events`
    pub wait: Option<Pace>,
    pub events: Vec<ConsoleEvent>,
}

enum Phase {
    Open,
    Start,
    Finish(AgentExecutionRecord),
    Close,
    Done,
}

pub struct StagedReveal {
    plan: OrchestrationPlan,
    request_id: Option<String>,
    records: VecDeque<AgentExecutionRecord>,
    plan_card: Option<Message>,
    plan_message_id: String,
    /// Distinct planned agents with a revealed record; drives plan card progress
    finished: usize,
    /// Agents that have had a record revealed
    reported: Vec<String>,
    phase: Phase,
}

impl StagedReveal {
    pub fn new(response: QueryResponse) -> Self {
        let plan = response.plan;
        let card = Message::artifact(
            Sender::Assistant,
            format!("Executing plan with {} agent(s)", plan.agents.len()),
            ArtifactState::plan_card(plan.agents.clone()),
        );
        Self {
            plan_message_id: card.id.clone(),
            plan_card: Some(card),
            plan,
            request_id: response.request_id,
            records: response.agent_responses.into(),
            finished: 0,
            reported: Vec::new(),
            phase: Phase::Open,
        }
    }

    pub fn plan_message_id(&self) -> &str {
        &self.plan_message_id
    }

    pub fn total_agents(&self) -> usize {
        self.plan.agents.len()
    }

    fn open(&mut self) -> RevealStep {
        let mut events = vec![
            ConsoleEvent::StatusesReset {
                agents: self.plan.agents.clone(),
            },
            ConsoleEvent::MessageAppended {
                message: Message::assistant(self.plan.reasoning.clone()),
            },
        ];
        if let Some(card) = self.plan_card.take() {
            events.push(ConsoleEvent::MessageAppended { message: card });
        }
        events.push(ConsoleEvent::PlanActivated {
            plan: self.plan.clone(),
            message_id: self.plan_message_id.clone(),
            request_id: self.request_id.clone(),
        });
        RevealStep { wait: None, events }
    }

    fn start(&self, record: &AgentExecutionRecord) -> RevealStep {
        let agent = &record.agent_name;
        let mut events = Vec::with_capacity(2);
        if self.plan.contains_agent(agent) {
            events.push(ConsoleEvent::AgentStatusChanged {
                agent: agent.clone(),
                status: AgentStatus::Processing,
            });
        }
        events.push(ConsoleEvent::StepLabel {
            label: format!("{} is working...", agent),
        });
        RevealStep {
            wait: (!self.reported.is_empty()).then_some(Pace::Settle),
            events,
        }
    }

    fn finish(&mut self, record: AgentExecutionRecord) -> RevealStep {
        let agent = record.agent_name;
        if self.plan.contains_agent(&agent) && !self.reported.contains(&agent) {
            self.finished += 1;
        }
        self.reported.push(agent.clone());
        let mut events = Vec::with_capacity(4);
        if self.plan.contains_agent(&agent) {
            events.push(ConsoleEvent::AgentStatusChanged {
                agent: agent.clone(),
                status: if record.success {
                    AgentStatus::Completed
                } else {
                    AgentStatus::Failed
                },
            });
        }
        let text = if record.success {
            format!("{} finished", agent)
        } else {
            format!("{} failed", agent)
        };
        events.push(ConsoleEvent::MessageAppended {
            message: Message::artifact(
                Sender::Assistant,
                text,
                ArtifactState::agent_result(
                    agent.clone(),
                    record.success,
                    record.result_payload,
                    record.error_message,
                ),
            ),
        });
        events.push(ConsoleEvent::ArtifactUpdated {
            message_id: self.plan_message_id.clone(),
            progress: plan_progress(self.finished, self.total_agents()),
            status: None,
        });
        events.push(ConsoleEvent::FocusChanged { agent: Some(agent) });
        RevealStep {
            wait: Some(Pace::Work),
            events,
        }
    }

    fn close(&self) -> RevealStep {
        // Planned agents the backend never reported on did not run.
        let mut events: Vec<ConsoleEvent> = self
            .plan
            .agents
            .iter()
            .filter(|a| !self.reported.contains(a))
            .map(|a| ConsoleEvent::AgentStatusChanged {
                agent: a.clone(),
                status: AgentStatus::Failed,
            })
            .collect();
        events.extend([
            ConsoleEvent::TurnFinished,
            ConsoleEvent::FocusChanged { agent: None },
            ConsoleEvent::ArtifactUpdated {
                message_id: self.plan_message_id.clone(),
                progress: 100,
                status: Some(ArtifactStatus::Completed),
            },
        ]);
        RevealStep {
            wait: (!self.reported.is_empty()).then_some(Pace::Settle),
            events,
        }
    }
}

impl Iterator for StagedReveal {
    type Item = RevealStep;

    fn next(&mut self) -> Option<RevealStep> {
        match std::mem::replace(&mut self.phase, Phase::Done) {
            Phase::Open => {
                self.phase = Phase::Start;
                Some(self.open())
            }
            Phase::Start => match self.records.pop_front() {
                Some(record) => {
                    let step = self.start(&record);
                    self.phase = Phase::Finish(record);
                    Some(step)
                }
                None => {
                    self.phase = Phase::Close;
                    self.next()
                }
            },
            Phase::Finish(record) => {
                self.phase = Phase::Start;
                Some(self.finish(record))
            }
            Phase::Close => Some(self.close()),
            Phase::Done => None,
        }
    }
}
