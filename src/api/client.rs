//! Training portal REST client

use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Ack, ApiResponse, ErrorBody};

/// Error produced by any portal request.
///
/// Views never see this directly; stores reduce it to a display string via
/// [`ApiError::user_message`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded {status}: {}", message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// The server-supplied message, if the failure carried one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Reduce to a display string: the server message when present,
    /// otherwise the per-operation fallback. Raw transport errors are
    /// never surfaced to the user.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(|m| m.to_string())
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

/// HTTP client for the training portal REST API
pub struct PortalClient {
    http_client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl PortalClient {
    /// Create a new portal client for the given base URL
    /// (e.g., "https://portal.hospital.example/api")
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .user_agent("Trainhub/0.1.0")
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            http_client,
            base_url,
            token: RwLock::new(None),
        }
    }

    /// Store the bearer token used for subsequent requests
    pub async fn set_token(&self, token: String) {
        *self.token.write().await = Some(token);
    }

    pub async fn clear_token(&self) {
        *self.token.write().await = None;
    }

    /// Get the portal base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Send a request, attaching the bearer token when one is set, and map
    /// a non-success status to [`ApiError::Api`] with the server's message.
    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ApiError> {
        let url = self.endpoint_url(endpoint);
        let mut request = self
            .http_client
            .request(method, &url)
            .header("Accept", "application/json");

        if let Some(token) = self.token.read().await.as_deref() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body.message,
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(ApiError::Decode)
    }

    /// Unwrap the `{success, data, message}` envelope; `success: false` on a
    /// 2xx response is still a failure
    fn envelope<T>(response: ApiResponse<T>) -> Result<T, ApiError> {
        if response.success {
            Ok(response.data)
        } else {
            Err(ApiError::Api {
                status: StatusCode::OK.as_u16(),
                message: response.message,
            })
        }
    }

    /// GET an enveloped payload
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = self.send(Method::GET, endpoint, None).await?;
        let envelope: ApiResponse<T> = Self::decode(response).await?;
        Self::envelope(envelope)
    }

    /// GET a payload with no envelope guarantee (dual-shape endpoints)
    pub(crate) async fn get_raw<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = self.send(Method::GET, endpoint, None).await?;
        Self::decode(response).await
    }

    /// POST a JSON body, unwrap the envelope
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).expect("request body serialization");
        let response = self.send(Method::POST, endpoint, Some(body)).await?;
        let envelope: ApiResponse<T> = Self::decode(response).await?;
        Self::envelope(envelope)
    }

    /// PUT a JSON body, unwrap the envelope
    pub(crate) async fn put_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).expect("request body serialization");
        let response = self.send(Method::PUT, endpoint, Some(body)).await?;
        let envelope: ApiResponse<T> = Self::decode(response).await?;
        Self::envelope(envelope)
    }

    /// DELETE, expecting a bare `{success}` acknowledgement
    pub(crate) async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        let response = self.send(Method::DELETE, endpoint, None).await?;
        let ack: Ack = Self::decode(response).await?;
        if ack.success {
            Ok(())
        } else {
            Err(ApiError::Api {
                status: StatusCode::OK.as_u16(),
                message: ack.message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joining() {
        let client = PortalClient::new("https://portal.hospital.test/api/");
        assert_eq!(
            client.endpoint_url("/departments"),
            "https://portal.hospital.test/api/departments"
        );
        assert_eq!(
            client.endpoint_url("trainings/t1"),
            "https://portal.hospital.test/api/trainings/t1"
        );
    }

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = ApiError::Api {
            status: 422,
            message: Some("Employee number already exists".to_string()),
        };
        assert_eq!(
            err.user_message("Failed to create user"),
            "Employee number already exists"
        );
    }

    #[test]
    fn test_user_message_falls_back_without_one() {
        let err = ApiError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Failed to create user"), "Failed to create user");
    }

    #[test]
    fn test_not_found_detection() {
        let err = ApiError::Api {
            status: 404,
            message: None,
        };
        assert!(err.is_not_found());
    }
}
