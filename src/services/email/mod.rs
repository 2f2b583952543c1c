//! Email Service
//!
//! Renders transactional emails and hands them to a [`Mailer`]. Delivery
//! failures come back as an [`EmailStatus`], never as an error.

mod humanize;
mod template;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::error::Result;
use crate::mail::{EmailMessage, Mailer, SendReceipt};
use crate::models::EmailStatus;

pub use humanize::{humanize, relative_time};
pub use template::{EmailTemplates, RenderedTemplate};

pub struct EmailService {
    mailer: Arc<dyn Mailer>,
    templates: EmailTemplates,
    sender: String,
}

impl EmailService {
    pub fn new(mailer: Arc<dyn Mailer>, sender: impl Into<String>) -> Self {
        Self {
            mailer,
            templates: EmailTemplates::new(),
            sender: sender.into(),
        }
    }

    /// Sends the password-reset OTP to `email`.
    pub async fn send_reset_password_email(
        &self,
        email: &str,
        otp: &str,
        otp_expiry: DateTime<Utc>,
    ) -> EmailStatus {
        match self.deliver_reset_password(email, otp, otp_expiry).await {
            Ok(receipt) => {
                let status = EmailStatus::success(receipt.id, receipt.status);
                info!(?status, "Reset password email sent");
                status
            }
            Err(e) => {
                let status = EmailStatus::error(e.to_string());
                error!(?status, "Reset password email failed");
                status
            }
        }
    }

    async fn deliver_reset_password(
        &self,
        email: &str,
        otp: &str,
        otp_expiry: DateTime<Utc>,
    ) -> Result<SendReceipt> {
        let expires_in = relative_time(otp_expiry, Utc::now());
        let rendered = self.templates.reset_password(&expires_in, otp)?;

        let message = EmailMessage::new(
            self.sender.clone(),
            email,
            rendered.subject,
            rendered.html,
            rendered.text,
        );
        self.mailer.send(&message).await
    }
}
