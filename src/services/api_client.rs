// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No view state here: each method is one request against the QuickAid backend
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::models::{
    AcceptSosRequest, AuthResponse, ErrorBody, LoginRequest, SignupRequest, SosSearchResponse,
    StatusResponse,
};
use crate::services::api_error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.backend_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        log::info!("🔐 Login for phone ending {}", phone_tail(&request.phone));
        let response = Request::post(&self.url("/volunteer/login"))
            .json(request)?
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        log::info!("📝 Signup for {} ({} skills)", request.name, request.skills.len());
        let response = Request::post(&self.url("/volunteer/signup"))
            .json(request)?
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn volunteer_status(&self, volunteer_id: &str) -> Result<StatusResponse, ApiError> {
        let url = self.url(&format!("/volunteer/status/{}", volunteer_id));
        let response = Request::post(&url).send().await?;
        read_json(response).await
    }

    pub async fn search_sos(&self, volunteer_id: &str) -> Result<SosSearchResponse, ApiError> {
        let url = self.url(&format!("/volunteer/sosSearch/{}", volunteer_id));
        let response = Request::get(&url).send().await?;
        read_json(response).await
    }

    pub async fn accept_sos(&self, sos_id: &str, volunteer_id: &str) -> Result<(), ApiError> {
        log::info!("🙋 Accepting SOS {}", sos_id);
        let url = self.url(&format!("/victim/sos/{}/accept", sos_id));
        let body = AcceptSosRequest {
            volunteer_id: volunteer_id.to_string(),
        };
        let response = Request::post(&url).json(&body)?.send().await?;
        ensure_ok(response).await
    }

    pub async fn complete_sos(&self, sos_id: &str) -> Result<(), ApiError> {
        log::info!("🏁 Completing SOS {}", sos_id);
        let url = self.url(&format!("/victim/sos/{}/completed", sos_id));
        let response = Request::post(&url).send().await?;
        ensure_ok(response).await
    }
}

/// Non-2xx responses become `ApiError::Http` carrying the body's `message`
async fn http_error(response: Response) -> ApiError {
    let status = response.status();
    log::warn!("⚠️ HTTP {} from {}", status, response.url());
    let body = response.json::<ErrorBody>().await.unwrap_or_default();
    ApiError::Http {
        status,
        message: body.message,
    }
}

pub(crate) async fn ensure_ok(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(http_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

fn phone_tail(phone: &str) -> &str {
    let start = phone.len().saturating_sub(4);
    phone.get(start..).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalised() {
        let client = ApiClient::with_base_url("https://api.quickaid.test/");
        assert_eq!(client.url("/volunteer/login"), "https://api.quickaid.test/volunteer/login");
    }

    #[test]
    fn phone_tail_masks_number() {
        assert_eq!(phone_tail("9876543210"), "3210");
        assert_eq!(phone_tail("12"), "12");
    }
}
