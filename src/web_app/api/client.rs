// web_app/api/client.rs - HTTP client for the upstream media API
//
// One method per upstream call. Non-2xx responses are turned into
// `ApiError`, using the `message` field of a JSON error body when the
// server sends one.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config::AppConfig;
use crate::web_app::model::{Credentials, Media, MediaSummary, NewComment, RatingSubmission, User};
use crate::web_app::search::{LookupError, MediaLookup};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Not authorized")]
    Unauthorized,
    #[error("Media not found")]
    NotFound,
    #[error("Upstream API returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Invalid media API url: {0}")]
    InvalidBaseUrl(String),
}

impl From<ApiError> for LookupError {
    fn from(err: ApiError) -> Self {
        LookupError::new(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct MediaApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl MediaApiClient {
    /// Client with default reqwest settings
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Client configured from `AppConfig` (timeout and bearer token)
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.api_timeout).build()?;
        let api = Self::with_client(client, config.media_api_url.clone())?;
        Ok(match &config.media_api_token {
            Some(token) => api.with_token(token.clone()),
            None => api,
        })
    }

    fn with_client(client: Client, base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(base_url));
        }
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            _ => {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ErrorBody>(&body)
                    .ok()
                    .and_then(|b| b.message)
                    .unwrap_or_else(|| {
                        status.canonical_reason().unwrap_or("unknown error").to_string()
                    });
                Err(ApiError::Status {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        Ok(Self::check(response).await?.json::<T>().await?)
    }

    /// All media matching `term`; a blank term lists everything
    pub async fn fetch_medias(&self, term: &str) -> Result<Vec<MediaSummary>, ApiError> {
        let mut request = self.request(Method::GET, "/medias");
        if !term.trim().is_empty() {
            request = request.query(&[("search", term)]);
        }
        Self::decode(request.send().await?).await
    }

    pub async fn fetch_media(&self, id: i64) -> Result<Media, ApiError> {
        let response = self
            .request(Method::GET, &format!("/medias/{}", id))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn submit_comment(&self, comment: &NewComment) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, "/comments")
            .json(comment)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn rate_media(&self, id: i64, rating: RatingSubmission) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, &format!("/medias/{}/rating", id))
            .json(&rating)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let response = self
            .request(Method::POST, "/auth/login")
            .json(credentials)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn sign_up(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let response = self
            .request(Method::POST, "/auth/signup")
            .json(credentials)
            .send()
            .await?;
        Self::decode(response).await
    }
}

impl MediaLookup for MediaApiClient {
    async fn search(&self, term: &str) -> Result<Vec<MediaSummary>, LookupError> {
        self.fetch_medias(term).await.map_err(LookupError::from)
    }
}
