//! Shared HTTP response handling for provider clients.

use serde::Deserialize;

use crate::error::ProviderError;

/// Anthropic error envelope: `{"type":"error","error":{"type":..,"message":..}}`.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map non-success responses to [`ProviderError`].
///
/// 429 becomes [`ProviderError::RateLimited`], 401 becomes
/// [`ProviderError::Unauthorized`], and any other non-2xx status becomes
/// [`ProviderError::Api`] carrying the provider's error message when the body
/// has one, or the raw body otherwise.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(ProviderError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ProviderError::Unauthorized);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or(body);
        return Err(ProviderError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
