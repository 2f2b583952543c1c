//! HTTP mail transport
//!
//! Posts the message as JSON to a transactional-mail API and expects an
//! `{"id": ..., "status": ...}` reply.

use async_trait::async_trait;
use tracing::debug;

use super::{EmailMessage, Mailer, SendReceipt};
use crate::error::{AppError, Result};

pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpMailer {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt> {
        let mut request = self.client.post(&self.endpoint).json(message);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Mail(format!("mail API unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Mail(format!(
                "mail API returned {}: {}",
                status, body
            )));
        }

        let receipt: SendReceipt = response
            .json()
            .await
            .map_err(|e| AppError::Mail(format!("unexpected mail API reply: {}", e)))?;
        debug!(id = %receipt.id, status = %receipt.status, "Mail accepted by API");
        Ok(receipt)
    }
}
