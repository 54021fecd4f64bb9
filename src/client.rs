//! HTTP client for the wallet pre-generation endpoint.
//!
//! The endpoint contract: `POST <endpoint>` with `{ handle, type }`, success
//! response `{ success: true, wallet: { address } }`, failure response
//! `{ success: false, error }` or a non-2xx status with an optional JSON
//! `{ error }` body. Error messages prefer the body's `error` field so the
//! results table shows what the endpoint actually said.

use crate::types::HandleType;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Errors produced while calling the wallet endpoint.
///
/// Every variant's `Display` is suitable for the per-item `error_message`
/// shown in the results table.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request could not be sent or the response body could not be read
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Endpoint answered 2xx but reported failure in the body
    #[error("{message}")]
    Rejected { message: String },

    /// Endpoint answered 2xx claiming success but without wallet data
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Endpoint URL could not be parsed
    #[error("invalid endpoint URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

#[derive(Debug, Serialize)]
struct GenerateWalletRequest<'a> {
    handle: &'a str,
    #[serde(rename = "type")]
    kind: HandleType,
}

#[derive(Debug, Deserialize)]
struct GenerateWalletResponse {
    #[serde(default)]
    success: bool,
    wallet: Option<WalletInfo>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WalletInfo {
    address: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for the wallet pre-generation endpoint
#[derive(Debug, Clone)]
pub struct WalletApiClient {
    http_client: Client,
    endpoint: Url,
}

impl WalletApiClient {
    /// Create a client with default configuration
    pub fn new(endpoint: &str) -> Result<Self, ApiError> {
        Self::with_config(endpoint, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(endpoint: &str, config: ClientConfig) -> Result<Self, ApiError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            endpoint: Url::parse(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Request a pre-generated wallet for one handle, returning its address.
    pub async fn generate_wallet(
        &self,
        handle: &str,
        kind: HandleType,
    ) -> Result<String, ApiError> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&GenerateWalletRequest { handle, kind })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response.text().await.ok()));
        }

        let body: GenerateWalletResponse = response.json().await?;
        match body {
            GenerateWalletResponse {
                success: true,
                wallet: Some(wallet),
                ..
            } => Ok(wallet.address),
            GenerateWalletResponse { error: Some(message), .. } => {
                Err(ApiError::Rejected { message })
            }
            GenerateWalletResponse { success: true, wallet: None, .. } => Err(
                ApiError::InvalidResponse("success reported without wallet data".to_string()),
            ),
            _ => Err(ApiError::Rejected {
                message: "endpoint returned unsuccessful response".to_string(),
            }),
        }
    }

    /// Build the error for a non-2xx response, preferring the body's `error`
    /// field over the generic status message.
    fn status_error(status: StatusCode, body: Option<String>) -> ApiError {
        let from_body = body
            .as_deref()
            .and_then(|text| serde_json::from_str::<ErrorBody>(text).ok())
            .and_then(|parsed| parsed.error);

        ApiError::Status {
            status: status.as_u16(),
            message: from_body
                .unwrap_or_else(|| format!("request failed with status {}", status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateWalletRequest {
            handle: "@alice",
            kind: HandleType::Telegram,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "handle": "@alice", "type": "TELEGRAM" })
        );
    }

    #[test]
    fn test_status_error_prefers_body_error_field() {
        let err = WalletApiClient::status_error(
            StatusCode::TOO_MANY_REQUESTS,
            Some("{\"error\":\"rate limited\"}".to_string()),
        );
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn test_status_error_generic_for_unparseable_body() {
        let err = WalletApiClient::status_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("<html>oops</html>".to_string()),
        );
        assert_eq!(err.to_string(), "request failed with status 500");

        let err = WalletApiClient::status_error(StatusCode::BAD_GATEWAY, None);
        assert_eq!(err.to_string(), "request failed with status 502");
    }

    #[test]
    fn test_invalid_endpoint_url() {
        assert!(matches!(
            WalletApiClient::new("not a url"),
            Err(ApiError::UrlParse(_))
        ));
    }

    #[test]
    fn test_response_missing_success_flag_defaults_to_failure() {
        let body: GenerateWalletResponse =
            serde_json::from_str("{\"wallet\":{\"address\":\"0x1\"}}").unwrap();
        assert!(!body.success);
    }
}
