//! HTTP client for the Ping! server.
//!
//! Three endpoints are consumed: login, sign-up and logout. Every request is
//! sent with credentials so the server's session cookie travels along; on the
//! web target this maps to fetch's `credentials: include`, natively to a
//! cookie store on the client. Failures are never retried here; callers
//! surface [`ApiError::user_message`] in a toast and leave the user to try
//! again.

use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ServerConfig;
use crate::hooks::AvatarSelection;
use crate::state::User;

/// Fallback toast text for failures without a usable server message.
pub const GENERIC_ERROR: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status. `message` carries the
    /// `{message}` field of the body when one could be decoded.
    #[error("server returned {status}")]
    Server {
        status: StatusCode,
        message: Option<String>,
    },
    /// The request never produced a usable response (connection refused,
    /// malformed body, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// The text shown to the user: the server's own message when present,
    /// otherwise a fixed fallback. All failures are treated uniformly
    /// regardless of status code.
    pub fn user_message(&self) -> &str {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } => message,
            _ => GENERIC_ERROR,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Everything the sign-up form collects. Turned into a multipart body; the
/// avatar part is omitted entirely when no file was selected.
#[derive(Debug, Default)]
pub struct SignupForm {
    pub avatar: Option<AvatarSelection>,
    pub name: String,
    pub bio: String,
    pub username: String,
    pub password: String,
}

impl SignupForm {
    fn into_multipart(self) -> Result<Form, ApiError> {
        let mut form = Form::new()
            .text("name", self.name)
            .text("bio", self.bio)
            .text("username", self.username)
            .text("password", self.password);
        if let Some(avatar) = self.avatar {
            let part = Part::bytes(avatar.bytes)
                .file_name(avatar.file_name)
                .mime_str(avatar.mime)?;
            form = form.part("avatar", part);
        }
        Ok(form)
    }
}

/// Thin client over the fixed `/api/v1/user` endpoints. Cheap to clone;
/// provided once through context at the app root.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ServerConfig,
}

impl ApiClient {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            http: build_http(),
            config,
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let request = self
            .http
            .post(self.config.api_url("/user/login"))
            .json(&LoginRequest { username, password });
        read_json(with_credentials(request).send().await?).await
    }

    pub async fn sign_up(&self, form: SignupForm) -> Result<AuthResponse, ApiError> {
        let request = self
            .http
            .post(self.config.api_url("/user/new"))
            .multipart(form.into_multipart()?);
        read_json(with_credentials(request).send().await?).await
    }

    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        let request = self.http.get(self.config.api_url("/user/logout"));
        read_json(with_credentials(request).send().await?).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        let message = response
            .json::<MessageResponse>()
            .await
            .ok()
            .map(|body| body.message);
        Err(ApiError::Server { status, message })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("default reqwest client")
}

#[cfg(target_arch = "wasm32")]
fn build_http() -> reqwest::Client {
    reqwest::Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
