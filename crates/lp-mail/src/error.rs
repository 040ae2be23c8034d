use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("mail API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("mail API rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("mailer not configured: {0}")]
    NotConfigured(String),

    /// The message was rejected locally before any request was made.
    #[error("invalid email: {0}")]
    Invalid(String),
}
