//! Email templates
//!
//! Bodies live next to this file and are embedded at build time. HTML
//! templates are auto-escaped by extension; `.txt` ones are rendered raw.

use minijinja::{context, default_auto_escape_callback, Environment};

use crate::error::{AppError, Result};

const RESET_PASSWORD_SUBJECT: &str = "Reset your Placy password";

/// Subject and both bodies of a rendered email.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTemplate {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Renders the transactional email bodies.
pub struct EmailTemplates {
    env: Environment<'static>,
}

impl EmailTemplates {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        env.set_loader(embedded_template_loader);
        Self { env }
    }

    /// Password-reset email carrying the OTP and how long it stays valid.
    pub fn reset_password(&self, expires_in: &str, otp: &str) -> Result<RenderedTemplate> {
        let ctx = context! { otp => otp, expires_in => expires_in };

        Ok(RenderedTemplate {
            subject: RESET_PASSWORD_SUBJECT.to_string(),
            html: self.render("reset_password.html", &ctx)?,
            text: self.render("reset_password.txt", &ctx)?,
        })
    }

    fn render(&self, name: &str, ctx: &minijinja::Value) -> Result<String> {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(ctx))
            .map_err(|e| AppError::Internal(format!("failed to render {}: {}", name, e)))
    }
}

impl Default for EmailTemplates {
    fn default() -> Self {
        Self::new()
    }
}

fn embedded_template_loader(name: &str) -> std::result::Result<Option<String>, minijinja::Error> {
    let source = match name {
        "reset_password.html" => Some(include_str!("templates/reset_password.html")),
        "reset_password.txt" => Some(include_str!("templates/reset_password.txt")),
        _ => None,
    };
    Ok(source.map(str::to_string))
}
