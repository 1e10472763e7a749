//! Outbound message delivery
//!
//! The bot only needs `send(user, text)`. Failures are reported to the
//! caller, which logs them; nothing here retries.

use crate::state_machine::UserId;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum SendError {
    #[error("transport rejected message with HTTP {status}")]
    Rejected { status: u16 },
    #[error("transport request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// Delivers a text to a user over the chat transport
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, user_id: &UserId, text: &str) -> Result<(), SendError>;
}

#[async_trait]
impl<T: Messenger + ?Sized> Messenger for Arc<T> {
    async fn send(&self, user_id: &UserId, text: &str) -> Result<(), SendError> {
        (**self).send(user_id, text).await
    }
}

// ============================================================================
// Logging wrapper
// ============================================================================

/// Logs every delivery with its duration
pub struct LoggingMessenger {
    inner: Arc<dyn Messenger>,
}

impl LoggingMessenger {
    pub fn new(inner: Arc<dyn Messenger>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Messenger for LoggingMessenger {
    async fn send(&self, user_id: &UserId, text: &str) -> Result<(), SendError> {
        let start = std::time::Instant::now();
        let result = self.inner.send(user_id, text).await;
        let duration = start.elapsed();

        match &result {
            Ok(()) => tracing::debug!(
                user_id = %user_id,
                duration_ms = %duration.as_millis(),
                chars = text.chars().count(),
                "Message sent"
            ),
            Err(e) => tracing::warn!(
                user_id = %user_id,
                duration_ms = %duration.as_millis(),
                error = %e,
                "Message send failed"
            ),
        }
        result
    }
}

// ============================================================================
// Adapters
// ============================================================================

#[derive(Serialize)]
struct OutboundMessage<'a> {
    user_id: &'a str,
    text: &'a str,
}

/// Posts each message as JSON to a transport bridge
pub struct WebhookMessenger {
    client: Client,
    url: String,
}

impl WebhookMessenger {
    pub fn new(url: impl Into<String>) -> Result<Self, SendError> {
        let client = Client::builder().timeout(WEBHOOK_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl Messenger for WebhookMessenger {
    async fn send(&self, user_id: &UserId, text: &str) -> Result<(), SendError> {
        let response = self
            .client
            .post(&self.url)
            .json(&OutboundMessage {
                user_id: user_id.as_str(),
                text,
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SendError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

/// Used when no transport bridge is configured; replies are only returned
/// over the HTTP API and written to the log
pub struct LogOnlyMessenger;

#[async_trait]
impl Messenger for LogOnlyMessenger {
    async fn send(&self, user_id: &UserId, text: &str) -> Result<(), SendError> {
        tracing::info!(user_id = %user_id, text = %text, "Outbound message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_webhook_is_an_error() {
        // Port 9 (discard) on localhost refuses connections; behind an HTTP
        // proxy the proxy answers with an error status instead
        let messenger = WebhookMessenger::new("http://127.0.0.1:9/send").unwrap();
        let result = messenger.send(&UserId::new("u1"), "hello").await;
        assert!(
            matches!(result, Err(SendError::Network(_) | SendError::Rejected { .. })),
            "{result:?}"
        );
    }

    #[tokio::test]
    async fn logging_wrapper_passes_through() {
        let messenger = LoggingMessenger::new(Arc::new(LogOnlyMessenger));
        assert!(messenger.send(&UserId::new("u1"), "hello").await.is_ok());
    }
}
