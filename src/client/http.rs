//! HTTP implementation of `AuthService`.
//!
//! One POST per call, JSON in and out, fixed 10 second timeout, no retry.
//! Login expects `200 OK`, signup expects `201 Created`; anything else is an
//! error even if it is another 2xx.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde::Serialize;

use super::service::{AuthService, ClientError};
use super::types::{LoginRequest, Session, SignupRequest};

/// Per-request timeout applied to every call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpAuthService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAuthService {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        expected: StatusCode,
    ) -> Result<Session, ClientError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        info!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| network_error(&e))?;

        let status = response.status();
        debug!("{} response status: {}", endpoint, status);

        let bytes = response.bytes().await.map_err(|e| network_error(&e))?;

        if status != expected {
            let message = String::from_utf8_lossy(&bytes).trim().to_string();
            warn!("{} failed: {} - {}", endpoint, status, message);
            return Err(ClientError::Api {
                status: status.as_u16(),
                status_line: status.to_string(),
                message,
            });
        }

        serde_json::from_slice::<Session>(&bytes).map_err(|e| {
            warn!("{} returned an undecodable body: {}", endpoint, e);
            ClientError::Parse(e.to_string())
        })
    }
}

fn network_error(e: &reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Network(format!(
            "request timed out after {}s",
            REQUEST_TIMEOUT.as_secs()
        ))
    } else {
        ClientError::Network(e.to_string())
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    fn name(&self) -> &str {
        "http"
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session, ClientError> {
        self.post("login", request, StatusCode::OK).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<Session, ClientError> {
        self.post("signup", request, StatusCode::CREATED).await
    }
}
