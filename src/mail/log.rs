//! Logging mail transport
//!
//! Logs the envelope of each message instead of sending it. Used when no mail
//! API is configured. Bodies are never logged or kept, since they carry OTPs.

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::{EmailMessage, Mailer, SendReceipt};
use crate::error::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt> {
        let id = Uuid::new_v4().to_string();
        let recipients: Vec<&str> = message.to.iter().map(|a| a.address.as_str()).collect();
        info!(
            id = %id,
            to = ?recipients,
            subject = %message.subject,
            "Mail API not configured, message logged only"
        );

        Ok(SendReceipt {
            id,
            status: "logged".to_string(),
        })
    }
}
