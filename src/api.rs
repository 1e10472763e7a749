//! HTTP API
//!
//! Inbound messages arrive from the transport bridge as JSON; the replies
//! come back in the response and are also pushed through the messenger.

mod handlers;
mod types;

pub use handlers::create_router;
pub use types::*;

use crate::runtime::SessionManager;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self { sessions }
    }
}
