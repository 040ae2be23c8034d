//! # lp-mail
//!
//! Outbound email delivery. [`Mailer`] is the seam the caller layer depends
//! on; [`ResendMailer`] delivers through the Resend HTTP API.

mod error;
mod resend;

pub use error::MailError;
pub use resend::ResendMailer;

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One message to deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    /// Plain-text body. Rendered as HTML with line breaks preserved.
    pub body: String,
    /// Deliver later instead of immediately.
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl OutboundEmail {
    /// # Errors
    ///
    /// Returns [`MailError::Invalid`] when the recipient, subject, or body is
    /// blank.
    pub fn validate(&self) -> Result<(), MailError> {
        for (field, value) in [
            ("to", &self.to),
            ("subject", &self.subject),
            ("body", &self.body),
        ] {
            if value.trim().is_empty() {
                return Err(MailError::Invalid(format!("{field} is required")));
            }
        }
        Ok(())
    }

    /// Body as minimal HTML: escaped text with newlines turned into `<br>`.
    #[must_use]
    pub fn html_body(&self) -> String {
        let mut html = String::with_capacity(self.body.len());
        for ch in self.body.chars() {
            match ch {
                '&' => html.push_str("&amp;"),
                '<' => html.push_str("&lt;"),
                '>' => html.push_str("&gt;"),
                '"' => html.push_str("&quot;"),
                '\n' => html.push_str("<br>"),
                '\r' => {}
                _ => html.push(ch),
            }
        }
        html
    }
}

/// Delivery receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentEmail {
    /// Provider message id, stored on the outreach record.
    pub id: String,
}

pub trait Mailer {
    fn send(&self, email: &OutboundEmail)
    -> impl Future<Output = Result<SentEmail, MailError>> + Send;
}
