//! Platform API client implementation
//!
//! Wraps every outgoing request with the credential lifecycle: attach a
//! bearer token, detect expiry from the decoded token payload before sending,
//! and run the refresh exchange transparently when needed. Refresh is
//! single-flight: concurrent requests that all notice an expired token await
//! one exchange instead of racing their own.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use super::api::{AuthApi, DetailApi, ListingApi, ModerationApi};
use super::models::{
    ContentEntry, Credential, Initiative, Metrics, TokenErrorResponse, TokenResponse, User,
    UserPicture,
};
use super::pagination::{ContentFilterParams, InitiativeFilterParams, ListParams};
use super::session::CredentialStore;
use super::token;
use crate::error::{ApiError, Result};

/// HTTP timeout applied to every request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Scope requested on the password grant. `offline_access` is what makes the
/// issuer hand back a refresh token.
const LOGIN_SCOPE: &str = "openid profile email offline_access";

/// Platform API client
pub struct PlatformClient {
    http: HttpClient,
    api_url: String,
    issuer_url: String,
    client_id: String,
    client_secret: String,
    store: Arc<dyn CredentialStore>,
    /// Serializes refresh exchanges across concurrent requests
    refresh_gate: Mutex<()>,
}

impl PlatformClient {
    /// Create a new platform client over an injected credential store.
    pub fn new(
        api_url: impl Into<String>,
        issuer_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        store: Arc<dyn CredentialStore>,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            api_url: api_url.into(),
            issuer_url: issuer_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            store,
            refresh_gate: Mutex::new(()),
        })
    }

    /// Resolve the bearer token for an outgoing request.
    ///
    /// Returns `None` when nothing is stored: the request goes out without an
    /// Authorization header and the server decides. A stored token whose
    /// decoded expiry has passed forces the refresh exchange to complete (or
    /// fail) before the request proceeds; on failure the store is cleared and
    /// the caller gets a session-expired error.
    async fn bearer_token(&self) -> Result<Option<String>> {
        let Some(credential) = self.store.load()? else {
            return Ok(None);
        };
        if !token::is_expired(&credential.access_token) {
            return Ok(Some(credential.access_token));
        }

        // Whoever holds the gate performs the exchange; callers queued behind
        // re-read the store and usually find a fresh token already there.
        let _gate = self.refresh_gate.lock().await;

        let Some(credential) = self.store.load()? else {
            return Ok(None);
        };
        if !token::is_expired(&credential.access_token) {
            return Ok(Some(credential.access_token));
        }

        debug!("access token expired, exchanging refresh token");
        match self.refresh_exchange(&credential.refresh_token).await {
            Ok(tokens) => {
                let refreshed = Credential::from(tokens);
                self.store.store(&refreshed)?;
                Ok(Some(refreshed.access_token))
            }
            Err(err) => {
                debug!("refresh exchange failed: {err}");
                self.store.clear()?;
                Err(ApiError::SessionExpired.into())
            }
        }
    }

    /// One refresh attempt per expired-token detection, no retries.
    async fn refresh_exchange(&self, refresh_token: &str) -> Result<TokenResponse> {
        self.token_exchange(&[
            ("grant_type", "refresh_token"),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    /// Form-encoded exchange against `{issuer}/token`.
    async fn token_exchange(&self, form: &[(&str, &str)]) -> Result<TokenResponse> {
        let url = format!("{}/token", self.issuer_url);
        let response = self
            .http
            .post(&url)
            .form(form)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            return response.json::<TokenResponse>().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse token response: {}", e)).into()
            });
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<TokenErrorResponse>(&body)
            .ok()
            .and_then(TokenErrorResponse::message)
            .unwrap_or_else(|| format!("token endpoint returned {}", status));

        Err(ApiError::AuthRejected(message).into())
    }

    /// Make an authenticated API request
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        // Credential work happens before dispatch so the request never goes
        // out with a token already known to be expired.
        let bearer = self.bearer_token().await?;

        let url = format!("{}{}", self.api_url, path);
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(bearer) = bearer {
            request = request.header("Authorization", format!("Bearer {}", bearer));
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let message = Self::error_message(response)
                    .await
                    .unwrap_or_else(|| path.to_string());
                Err(ApiError::NotFound(message).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let message = Self::error_message(response)
                    .await
                    .unwrap_or_else(|| "Bad request".to_string());
                Err(ApiError::BadRequest(message).into())
            }
            status if status.is_server_error() => {
                let message = Self::error_message(response)
                    .await
                    .unwrap_or_else(|| format!("Server error: {}", status));
                Err(ApiError::ServerError(message).into())
            }
            _ => {
                let message = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(message).into())
            }
        }
    }

    /// Extract the server's message from a failure payload.
    ///
    /// Resource endpoints wrap errors as `{"error": {"message": ...}}`; that
    /// message is what gets shown to the user.
    async fn error_message(response: reqwest::Response) -> Option<String> {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: ErrorDetail,
        }

        #[derive(Deserialize)]
        struct ErrorDetail {
            message: String,
        }

        let text = response.text().await.ok()?;
        match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => Some(body.error.message),
            Err(_) if text.trim().is_empty() => None,
            Err(_) => Some(text),
        }
    }
}

#[async_trait]
impl AuthApi for PlatformClient {
    async fn login(&self, username: &str, password: &str) -> Result<Credential> {
        let tokens = self
            .token_exchange(&[
                ("grant_type", "password"),
                ("client_id", &self.client_id),
                ("client_secret", &self.client_secret),
                ("username", username),
                ("password", password),
                ("scope", LOGIN_SCOPE),
            ])
            .await?;

        let credential = Credential::from(tokens);
        self.store.store(&credential)?;
        Ok(credential)
    }

    fn logout(&self) -> Result<()> {
        self.store.clear()
    }
}

#[async_trait]
impl ListingApi for PlatformClient {
    async fn list_users(&self, params: Option<&ListParams>) -> Result<Vec<User>> {
        let query = params.cloned().unwrap_or_default().to_query_params();
        self.request(Method::GET, "/users", &query).await
    }

    async fn list_initiatives(
        &self,
        params: Option<&ListParams>,
        filters: Option<&InitiativeFilterParams>,
    ) -> Result<Vec<Initiative>> {
        let mut query = params.cloned().unwrap_or_default().to_query_params();
        query.extend(filters.cloned().unwrap_or_default().to_query_params());
        self.request(Method::GET, "/initiatives", &query).await
    }

    async fn list_content(
        &self,
        filters: &ContentFilterParams,
        params: Option<&ListParams>,
    ) -> Result<Vec<ContentEntry>> {
        let mut query = params.cloned().unwrap_or_default().to_query_params();
        query.extend(filters.to_query_params());
        self.request(Method::GET, "/external", &query).await
    }
}

#[async_trait]
impl DetailApi for PlatformClient {
    async fn get_user(&self, user_id: &str) -> Result<User> {
        let path = format!("/users/{}", user_id);
        self.request(Method::GET, &path, &[]).await
    }

    async fn get_user_picture(&self, user_id: &str) -> Result<UserPicture> {
        let path = format!("/users/{}/picture-get-url", user_id);
        self.request(Method::GET, &path, &[]).await
    }

    async fn get_initiative(&self, initiative_id: &str) -> Result<Initiative> {
        let path = format!("/initiatives/{}", initiative_id);
        self.request(Method::GET, &path, &[]).await
    }

    async fn get_metrics(&self) -> Result<Metrics> {
        self.request(Method::GET, "/metrics", &[]).await
    }
}

#[async_trait]
impl ModerationApi for PlatformClient {
    async fn verify_user(&self, user_id: &str) -> Result<User> {
        let path = format!("/users/{}/verify", user_id);
        self.request(Method::PUT, &path, &[]).await
    }

    async fn delete_user(&self, user_id: &str) -> Result<User> {
        let path = format!("/users/{}", user_id);
        self.request(Method::DELETE, &path, &[]).await
    }

    async fn approve_content(&self, content_id: &str) -> Result<ContentEntry> {
        let path = format!("/external/{}/approve", content_id);
        self.request(Method::PUT, &path, &[]).await
    }

    async fn reject_content(&self, content_id: &str) -> Result<ContentEntry> {
        let path = format!("/external/{}/reject", content_id);
        self.request(Method::PUT, &path, &[]).await
    }
}
