//! Plan tracker — the active orchestration plan and its card.

use aura_types::plan::OrchestrationPlan;

#[derive(Debug, Clone, PartialEq)]
pub struct ActivePlan {
    pub plan: OrchestrationPlan,
    /// Timeline id of the plan card whose progress the reveal mutates
    pub message_id: String,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PlanTracker {
    active: Option<ActivePlan>,
}

impl PlanTracker {
    /// Supersede whatever plan was active.
    pub fn activate(&mut self, active: ActivePlan) {
        self.active = Some(active);
    }

    pub fn active(&self) -> Option<&ActivePlan> {
        self.active.as_ref()
    }

    pub fn plan(&self) -> Option<&OrchestrationPlan> {
        self.active.as_ref().map(|a| &a.plan)
    }

    pub fn message_id(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.message_id.as_str())
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

/// Plan-card progress after `finished` of `total` agents: a percentage
/// rounded half up, capped at 100. An empty plan is trivially done.
pub fn plan_progress(finished: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let pct = (200 * finished + total) / (2 * total);
    pct.min(100) as u8
}
