//! API request and response types

use crate::content::Language;
use crate::state_machine::{BotState, Session};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One inbound chat message
#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    pub user_id: String,
    pub text: String,
    /// Display name reported by the transport
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Texts produced for the message, in send order
#[derive(Debug, Serialize)]
pub struct RepliesResponse {
    pub request_id: String,
    pub replies: Vec<String>,
}

/// Read-only view of a stored session
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub user_id: String,
    pub language: Option<Language>,
    pub state: BotState,
    pub previous: Option<BotState>,
    pub form_in_progress: bool,
    pub last_active: DateTime<Utc>,
}

impl From<Session> for SessionView {
    fn from(session: Session) -> Self {
        Self {
            user_id: session.user_id.to_string(),
            language: session.language,
            state: session.state,
            previous: session.previous,
            form_in_progress: !session.form.is_empty(),
            last_active: session.last_active,
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
