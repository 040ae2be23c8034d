//! Resend HTTP API client.

use chrono::SecondsFormat;
use lp_config::ResendConfig;
use serde::{Deserialize, Serialize};

use crate::{MailError, Mailer, OutboundEmail, SentEmail};

/// [`Mailer`] backed by `POST {base_url}/emails`.
#[derive(Debug, Clone)]
pub struct ResendMailer {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    from: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: String,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    scheduled_at: Option<String>,
}

#[derive(Deserialize)]
struct SendResponse {
    id: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

impl ResendMailer {
    /// # Errors
    ///
    /// Returns [`MailError::NotConfigured`] without an API key, or
    /// [`MailError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ResendConfig) -> Result<Self, MailError> {
        if !config.is_configured() {
            return Err(MailError::NotConfigured(
                "resend.api_key is empty (set RESEND_API_KEY)".into(),
            ));
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("launchpad/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            from: config.from.clone(),
        })
    }
}

impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, MailError> {
        email.validate()?;
        let body = SendRequest {
            from: &self.from,
            to: [&email.to],
            subject: &email.subject,
            html: email.html_body(),
            text: &email.body,
            scheduled_at: email
                .scheduled_at
                .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        };

        let resp = self
            .http
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let sent: SendResponse = check_response(resp).await?.json().await?;
        tracing::info!(message_id = %sent.id, "email accepted");
        Ok(SentEmail { id: sent.id })
    }
}

async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, MailError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(1);
        return Err(MailError::RateLimited { retry_after_secs });
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        return Err(MailError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_api_key() {
        let err = ResendMailer::new(&ResendConfig::default()).unwrap_err();
        assert!(matches!(err, MailError::NotConfigured(_)));
    }
}
