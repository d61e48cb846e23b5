use reqwest::Client;
use serde::Serialize;

use spotter_app::services::{Notification, Notifier};
use spotter_core::ApplicationError;

#[derive(Debug, Serialize)]
struct PushRequest<'a> {
    tokens: &'a [String],
    notification: &'a Notification,
}

/// Forwards notifications to an HTTP push gateway as a JSON POST.
#[derive(Debug, Clone)]
pub struct PushGatewayNotifier {
    client: Client,
    url: String,
}

impl PushGatewayNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl Notifier for PushGatewayNotifier {
    async fn notify(&self, tokens: &[String], notification: &Notification) -> Result<(), ApplicationError> {
        self.client
            .post(&self.url)
            .json(&PushRequest {
                tokens,
                notification,
            })
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| ApplicationError::Infrastructure(format!("push gateway: {e}")))?;

        tracing::debug!(devices = tokens.len(), kind = ?notification.kind, "Push delivered.");
        Ok(())
    }
}
