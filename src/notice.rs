//! Transient success/error notice shown above the signup form.

pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }

    /// Class list for the notice element, e.g. `message success`.
    pub fn class_name(&self) -> String {
        format!("message {}", self.severity.as_str())
    }
}

/// What the notice element currently shows. Hiding keeps the old text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeState {
    text: String,
    class_name: String,
}

impl NoticeState {
    pub fn show(&mut self, notice: &Notice) {
        self.text.clone_from(&notice.text);
        self.class_name = notice.class_name();
    }

    /// Idempotent. A stale countdown may hide a newer notice.
    pub fn hide(&mut self) {
        self.class_name = HIDDEN_CLASS.to_string();
    }

    pub fn is_visible(&self) -> bool {
        !self.class_name.is_empty() && self.class_name != HIDDEN_CLASS
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}
