//! Agent status map.
//!
//! Immutable: every transition builds a new map, so a snapshot held by a
//! reader never changes under it. Keys are exactly the active plan's agents,
//! kept in plan order.

use std::rc::Rc;
use aura_types::plan::AgentStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct AgentStatusMap {
    entries: Rc<[(String, AgentStatus)]>,
}

impl AgentStatusMap {
    pub fn empty() -> Self {
        Self {
            entries: Rc::from(Vec::new()),
        }
    }

    /// Every agent queued. Duplicate names keep their first position.
    pub fn queued<I, S>(agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, AgentStatus)> = Vec::new();
        for agent in agents {
            let agent = agent.into();
            if !entries.iter().any(|(a, _)| *a == agent) {
                entries.push((agent, AgentStatus::Queued));
            }
        }
        Self {
            entries: entries.into(),
        }
    }

    pub fn get(&self, agent: &str) -> Option<AgentStatus> {
        self.entries
            .iter()
            .find(|(a, _)| a == agent)
            .map(|(_, s)| *s)
    }

    /// A copy with `agent` moved to `status`.
    ///
    /// Unknown agents and backward moves leave the map unchanged and
    /// return `None`.
    pub fn advanced(&self, agent: &str, status: AgentStatus) -> Option<Self> {
        let current = self.get(agent)?;
        if !current.can_advance_to(status) {
            return None;
        }
        let entries: Vec<(String, AgentStatus)> = self
            .entries
            .iter()
            .map(|(a, s)| {
                if a == agent {
                    (a.clone(), status)
                } else {
                    (a.clone(), *s)
                }
            })
            .collect();
        Some(Self {
            entries: entries.into(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, AgentStatus)> {
        self.entries.iter().map(|(a, s)| (a.as_str(), *s))
    }

    pub fn agents(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(a, _)| a.as_str())
    }

    pub fn count(&self, status: AgentStatus) -> usize {
        self.entries.iter().filter(|(_, s)| *s == status).count()
    }

    /// No agent is queued or processing.
    pub fn all_settled(&self) -> bool {
        self.entries.iter().all(|(_, s)| s.is_terminal())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AgentStatusMap {
    fn default() -> Self {
        Self::empty()
    }
}
