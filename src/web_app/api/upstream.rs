// web_app/api/upstream.rs - Process-wide upstream API client
//
// The server binary builds one `MediaApiClient` at startup and registers
// it here so server functions can reach it without threading it through
// every call.

use std::sync::Mutex;
use std::sync::OnceLock;

use super::client::MediaApiClient;

static CLIENT: OnceLock<MediaApiClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<MediaApiClient>> = Mutex::new(None);

/// Initialize the global upstream client
pub fn init_client(client: MediaApiClient) {
    tracing::info!("Initializing media API client for {}", client.base_url());
    if CLIENT.set(client).is_err() {
        tracing::warn!("Media API client already initialized");
    }
}

/// Point server functions at a different upstream (tests)
pub fn set_test_client(client: MediaApiClient) {
    let mut guard = TEST_CLIENT_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(client);
}

/// Get the global upstream client
pub fn get_client() -> Option<MediaApiClient> {
    {
        let guard = TEST_CLIENT_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Media API client has not been initialized");
    }
    client
}
