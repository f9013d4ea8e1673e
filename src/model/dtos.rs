use serde::{Deserialize, Serialize};

/// Body of `POST /activities/{activity}/signup`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupAccepted {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body. FastAPI style servers also send `detail` as a list of
/// validation records, so it stays untyped here.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRejected {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

/// How the server answered a signup that reached it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupReply {
    Accepted { message: String },
    Rejected { status: u16, detail: Option<String> },
}

impl SignupReply {
    /// Builds the reply from a decoded JSON body and the response status.
    pub fn from_body(ok: bool, status: u16, body: serde_json::Value) -> serde_json::Result<Self> {
        if ok {
            let accepted: SignupAccepted = serde_json::from_value(body)?;
            Ok(SignupReply::Accepted {
                message: accepted.message.unwrap_or_default(),
            })
        } else {
            let rejected: SignupRejected = serde_json::from_value(body)?;
            let detail = match rejected.detail {
                Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
                _ => None,
            };
            Ok(SignupReply::Rejected { status, detail })
        }
    }
}
