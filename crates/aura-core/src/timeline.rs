//! Message timeline — append-only, insertion-ordered conversation log.

use serde::Serialize;
use aura_types::message::{ArtifactState, ArtifactStatus, Message};

#[derive(Debug, Clone, Default, Serialize)]
pub struct Timeline {
    messages: Vec<Message>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn get(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Mutate the artifact of message `id` in place.
    /// Returns false if there is no such artifact message.
    pub fn update_artifact<F>(&mut self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut ArtifactState),
    {
        match self
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .and_then(|m| m.artifact.as_mut())
        {
            Some(artifact) => {
                f(artifact);
                true
            }
            None => false,
        }
    }

    /// Set progress and, if given, status of an artifact.
    pub fn set_progress(&mut self, id: &str, progress: u8, status: Option<ArtifactStatus>) -> bool {
        self.update_artifact(id, |a| {
            a.progress = progress.min(100);
            if let Some(status) = status {
                a.status = status;
            }
        })
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn artifact_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_artifact()).count()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
