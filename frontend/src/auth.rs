//! Login and signup submission.
//!
//! Both return a ready-to-display error string; the pages only decide where to
//! navigate.

use crate::api::{ApiClient, Transport};
use crate::error::ApiError;
use crate::models::Credentials;
use crate::storage::TokenStore;

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl LoginForm {
    fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

impl SignupForm {
    pub fn check(&self) -> Result<Credentials, String> {
        if self.password != self.confirm_password {
            return Err(PASSWORD_MISMATCH.to_string());
        }
        Ok(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

pub async fn login<T: Transport, S: TokenStore>(
    api: &ApiClient<T, S>,
    form: &LoginForm,
) -> Result<(), String> {
    api.login(&form.credentials())
        .await
        .map_err(|err| describe(&err, "Login failed", "Server unreachable"))
}

/// Password confirmation is checked before anything goes on the wire.
pub async fn signup<T: Transport, S: TokenStore>(
    api: &ApiClient<T, S>,
    form: &SignupForm,
) -> Result<(), String> {
    let credentials = form.check()?;
    api.signup(&credentials)
        .await
        .map_err(|err| describe(&err, "Signup failed", "Server not reachable"))
}

fn describe(err: &ApiError, fallback: &str, unreachable: &str) -> String {
    match err {
        ApiError::Unreachable(_) => unreachable.to_string(),
        _ => err.server_message().unwrap_or_else(|| fallback.to_string()),
    }
}
