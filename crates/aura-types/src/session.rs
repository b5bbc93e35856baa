use serde::{Deserialize, Serialize};

/// Identity of the conversation this console is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub user_id: String,
}

impl Session {
    pub fn new(session_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            user_id: user_id.into(),
        }
    }

    /// A locally generated identity, used when the gateway omits one
    /// or cannot be reached.
    pub fn local(user_id: impl Into<String>) -> Self {
        Self::new(
            format!("local-{}", uuid::Uuid::new_v4()),
            user_id,
        )
    }

    pub fn is_local(&self) -> bool {
        self.session_id.starts_with("local-")
    }
}
