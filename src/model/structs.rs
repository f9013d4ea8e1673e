use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Activities keyed by name, in the order the server sent them.
pub type ActivityMap = IndexMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Not clamped: a negative count means the server
    /// holds more participants than it allows.
    pub fn available_spots(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Current values of the signup form, read at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    pub fn new(email: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            activity: activity.into(),
        }
    }

    /// Presence check only. Whitespace counts as a value.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.activity.is_empty()
    }
}
