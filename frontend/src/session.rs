//! Session bootstrap on first load, and logout.

use serde_json::Value;
use tracing::info;

use crate::api::{ApiClient, Transport};
use crate::storage::TokenStore;

#[derive(Clone, Debug, PartialEq)]
pub enum BootstrapOutcome {
    Home,
    Login(RefreshFailure),
}

/// Failure payload of the silent renewal, handed to the login page as
/// navigation state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RefreshFailure {
    pub body: Value,
}

impl RefreshFailure {
    /// Text the login page can show: the server `message`, or the body itself
    /// when the server answered with a bare string (e.g. a login URL).
    pub fn notice(&self) -> Option<String> {
        match &self.body {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            Value::Object(map) => map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        }
    }
}

/// One refresh call per mount, no retry.
pub async fn bootstrap<T: Transport, S: TokenStore>(api: &ApiClient<T, S>) -> BootstrapOutcome {
    match api.refresh_session().await {
        Ok(_) => BootstrapOutcome::Home,
        Err(err) => {
            info!("no session to resume: {err}");
            BootstrapOutcome::Login(RefreshFailure { body: err.body() })
        }
    }
}

/// Client-only logout; the server is not told.
pub fn logout(tokens: &impl TokenStore) {
    tokens.clear();
    info!("logged out");
}
