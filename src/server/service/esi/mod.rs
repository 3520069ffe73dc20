//! Authenticated ESI requests made on behalf of the signed in character.
//!
//! Failures are reported as [`EsiError`] and never retried, the client polls again on its own
//! schedule.

pub mod fleet;
pub mod names;
pub mod wallet;

use dioxus_logger::tracing;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::server::error::{esi::EsiError, Error};

/// HTTP client for the ESI routes not covered by `eve_esi`.
#[derive(Clone, Debug)]
pub struct EsiApi {
    http: reqwest::Client,
    base_url: String,
}

impl EsiApi {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds the client sending `user_agent` with every request.
    pub fn with_user_agent(user_agent: &str, base_url: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self::new(http, base_url))
    }

    fn request(&self, method: Method, path: &str, access_token: Option<&str>) -> RequestBuilder {
        let request = self
            .http
            .request(method, format!("{}{}", self.base_url, path));

        match access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<Response, EsiError> {
        tracing::debug!(endpoint = %path, "Sending ESI request");

        request
            .send()
            .await
            .map_err(|err| EsiError::RequestFailed {
                endpoint: path.to_string(),
                reason: err.to_string(),
            })
    }

    async fn parse<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, EsiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(EsiError::UpstreamApiError {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| EsiError::RequestFailed {
                endpoint: path.to_string(),
                reason: err.to_string(),
            })
    }

    /// GET request, `None` when ESI answers 404.
    pub(crate) async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: &str,
    ) -> Result<Option<T>, EsiError> {
        let response = self
            .send(path, self.request(Method::GET, path, Some(access_token)))
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(Self::parse(path, response).await?))
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: &str,
    ) -> Result<T, EsiError> {
        let response = self
            .send(path, self.request(Method::GET, path, Some(access_token)))
            .await?;

        Self::parse(path, response).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, EsiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(path, self.request(Method::POST, path, None).json(body))
            .await?;

        Self::parse(path, response).await
    }
}
