//! Mail Module
//!
//! Outgoing message shape and the transports that deliver it.

mod http;
mod log;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use self::http::HttpMailer;
pub use self::log::LogMailer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
}

/// A rendered message ready for delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub html: String,
    pub subject: String,
    pub text: String,
    pub to: Vec<Address>,
    pub sender: String,
}

impl EmailMessage {
    /// Builds a message for a single recipient.
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        subject: impl Into<String>,
        html: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            html: html.into(),
            subject: subject.into(),
            text: text.into(),
            to: vec![Address {
                address: recipient.into(),
            }],
            sender: sender.into(),
        }
    }
}

/// What the transport reports back for an accepted message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub id: String,
    pub status: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Hands the message to the transport.
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt>;
}
