//! REST client for the remote user-directory API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `HttpUserApi` returns
//! `ApiError::Unavailable`, since the endpoints are only reached from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; callers decide whether a failure
//! becomes a notification, a kept form, or a propagated login error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Credentials, User, UserPage};
use crate::config::ClientConfig;

/// Failure taxonomy for remote calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Bad credentials or an expired/invalid bearer token.
    #[error("not authorized (status {0})")]
    Unauthorized(u16),
    /// Edit/delete target is missing server-side.
    #[error("record not found")]
    NotFound,
    /// Any other non-2xx response.
    #[error("request failed: {0}")]
    Status(u16),
    /// Request could not complete.
    #[error("network error: {0}")]
    Network(String),
    /// Response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Map a non-2xx HTTP status onto the error taxonomy.
pub fn status_error(status: u16) -> ApiError {
    match status {
        401 | 403 => ApiError::Unauthorized(status),
        404 => ApiError::NotFound,
        _ => ApiError::Status(status),
    }
}

/// The four remote endpoints the UI depends on.
///
/// Futures are `?Send` because browser fetches are tied to the JS event loop.
#[async_trait(?Send)]
pub trait UserApi: Send + Sync {
    /// `POST /login`, returning the bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError>;
    /// `GET /users?page={page}`.
    async fn list_users(&self, page: u32, token: Option<&str>) -> Result<UserPage, ApiError>;
    /// `PUT /users/{id}` with the full record as body.
    async fn update_user(&self, user: &User, token: Option<&str>) -> Result<(), ApiError>;
    /// `DELETE /users/{id}`.
    async fn delete_user(&self, id: u64, token: Option<&str>) -> Result<(), ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(base: &str) -> String {
    format!("{base}/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn users_page_endpoint(base: &str, page: u32) -> String {
    format!("{base}/users?page={page}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(base: &str, id: u64) -> String {
    format!("{base}/users/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// `UserApi` backed by browser `fetch`.
#[derive(Clone, Debug)]
pub struct HttpUserApi {
    base_url: String,
    api_key: Option<String>,
}

impl HttpUserApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base_url: config.api_base.clone(), api_key: config.api_key.clone() }
    }

    #[cfg(feature = "hydrate")]
    fn decorate(&self, mut builder: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
        if let Some(key) = self.api_key.as_deref() {
            builder = builder.header("x-api-key", key);
        }
        if let Some(token) = token {
            builder = builder.header("Authorization", &bearer_header(token));
        }
        builder
    }
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn ensure_ok(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() { Ok(()) } else { Err(status_error(resp.status())) }
}

#[async_trait(?Send)]
impl UserApi for HttpUserApi {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = login_endpoint(&self.base_url);
            let resp = self
                .decorate(gloo_net::http::Request::post(&url), None)
                .json(credentials)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            ensure_ok(&resp)?;
            let body: super::types::LoginResponse =
                resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.token)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &self.base_url, &self.api_key);
            Err(ApiError::Unavailable)
        }
    }

    async fn list_users(&self, page: u32, token: Option<&str>) -> Result<UserPage, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = users_page_endpoint(&self.base_url, page);
            let resp = self
                .decorate(gloo_net::http::Request::get(&url), token)
                .send()
                .await
                .map_err(network_error)?;
            ensure_ok(&resp)?;
            resp.json::<UserPage>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (page, token);
            Err(ApiError::Unavailable)
        }
    }

    async fn update_user(&self, user: &User, token: Option<&str>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = user_endpoint(&self.base_url, user.id);
            let resp = self
                .decorate(gloo_net::http::Request::put(&url), token)
                .json(user)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            ensure_ok(&resp)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, token);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_user(&self, id: u64, token: Option<&str>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = user_endpoint(&self.base_url, id);
            let resp = self
                .decorate(gloo_net::http::Request::delete(&url), token)
                .send()
                .await
                .map_err(network_error)?;
            ensure_ok(&resp)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, token);
            Err(ApiError::Unavailable)
        }
    }
}
