// web_app/server_fns.rs - Leptos server function declarations
//
// The browser never talks to the upstream media API directly. Each call
// goes through one of these server functions; the #[server] macro
// generates the HTTP stub for the client and the real body for the
// server, where `MediaApiClient` does the work.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
fn client() -> Result<crate::web_app::api::MediaApiClient, ServerFnError> {
    use crate::web_app::api::{upstream, MediaApiClient};

    // Context first (tests), then the process-wide client
    if let Some(client) = use_context::<MediaApiClient>() {
        return Ok(client);
    }
    if let Some(client) = upstream::get_client() {
        return Ok(client);
    }

    tracing::error!("Media API client could not be resolved");
    Err(ServerFnError::new("Media API client not available"))
}

/// Upstream client acting for the signed-in user when a token is given
#[cfg(feature = "ssr")]
fn client_for(token: Option<String>) -> Result<crate::web_app::api::MediaApiClient, ServerFnError> {
    let client = client()?;
    Ok(match token {
        Some(token) => client.with_token(token),
        None => client,
    })
}

#[cfg(feature = "ssr")]
fn upstream_error(action: &str, err: crate::web_app::api::ApiError) -> ServerFnError {
    tracing::error!("{} failed: {}", action, err);
    ServerFnError::new(err.to_string())
}

/// Media matching a search term (blank lists everything)
#[server(FetchMedias, "/api")]
pub async fn fetch_medias(term: String) -> Result<Vec<MediaSummary>, ServerFnError> {
    tracing::info!("Search request: term='{}'", term);

    let results = client()?
        .fetch_medias(&term)
        .await
        .map_err(|e| upstream_error("Search", e))?;

    tracing::info!("Search successful: found {} results", results.len());
    Ok(results)
}

/// A single media record with its comments
#[server(FetchMedia, "/api")]
pub async fn fetch_media(id: i64) -> Result<Media, ServerFnError> {
    client()?
        .fetch_media(id)
        .await
        .map_err(|e| upstream_error("Fetch media", e))
}

/// Search settings from the server configuration, defaults when none is provided
#[server(FetchSearchSettings, "/api")]
pub async fn search_settings() -> Result<SearchSettings, ServerFnError> {
    Ok(use_context::<SearchSettings>().unwrap_or_default())
}

/// Post a comment as the user owning `token` (the server token otherwise)
#[server(SubmitComment, "/api")]
pub async fn submit_comment(comment: NewComment, token: Option<String>) -> Result<(), ServerFnError> {
    tracing::info!("Comment on media {}", comment.upload_id);

    client_for(token)?
        .submit_comment(&comment)
        .await
        .map_err(|e| upstream_error("Submit comment", e))
}

#[server(RateMedia, "/api")]
pub async fn rate_media(id: i64, rating: u8, token: Option<String>) -> Result<(), ServerFnError> {
    client_for(token)?
        .rate_media(id, RatingSubmission::new(rating))
        .await
        .map_err(|e| upstream_error("Rate media", e))
}

#[server(Login, "/api")]
pub async fn login(credentials: Credentials) -> Result<User, ServerFnError> {
    tracing::info!("Login attempt for '{}'", credentials.username);

    client()?
        .login(&credentials)
        .await
        .map_err(|e| upstream_error("Login", e))
}

#[server(SignUp, "/api")]
pub async fn sign_up(credentials: Credentials) -> Result<User, ServerFnError> {
    tracing::info!("Sign-up attempt for '{}'", credentials.username);

    client()?
        .sign_up(&credentials)
        .await
        .map_err(|e| upstream_error("Sign up", e))
}

/// `MediaLookup` backed by the `fetch_medias` server function
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerLookup;

impl crate::web_app::search::MediaLookup for ServerLookup {
    async fn search(
        &self,
        term: &str,
    ) -> Result<Vec<MediaSummary>, crate::web_app::search::LookupError> {
        fetch_medias(term.to_string()).await.map_err(Into::into)
    }
}

/// Message to show the user for a failed server call
pub fn error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}
