//! HTTP client for the budgeting backend.
//!
//! Every backend capability is one method on [`ApiClient`]. Calls that need the
//! session credential go through `send_authorized`, which owns the
//! single place where a rejected token triggers a silent renewal.

use gloo_net::http::Request;
use serde_json::Value;
use tracing::{debug, info, warn};
use web_sys::RequestCredentials;

use crate::config::ApiConfig;
use crate::error::{ApiError, TransportError};
use crate::models::{
    Credentials, DashboardSnapshot, NewCategory, NewExpense, RecordId, TokenResponse,
};
use crate::storage::TokenStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Value,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and hands back whatever status the server answered with.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `fetch` based transport. Cookies are always included so the refresh cookie
/// travels with every call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .credentials(RequestCredentials::Include);

        if !request.query.is_empty() {
            builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let sent = match &request.body {
            Some(body) => builder.json(body).map_err(transport_error)?.send().await,
            None => builder.send().await,
        };
        let response = sent.map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        Ok(HttpResponse {
            status,
            body: decode_body(&text),
        })
    }
}

fn transport_error(err: gloo_net::Error) -> TransportError {
    TransportError(err.to_string())
}

fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

pub struct ApiClient<T, S> {
    config: ApiConfig,
    transport: T,
    tokens: S,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(config: ApiConfig, transport: T, tokens: S) -> Self {
        Self {
            config,
            transport,
            tokens,
        }
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    /// Silent renewal using the refresh cookie. A token in the response body
    /// replaces the stored one.
    pub async fn refresh_session(&self) -> Result<Value, ApiError> {
        let response = self.send(self.request(Method::Post, "jwt/refresh")).await?;
        if let Some(token) = response.body.get("access_token").and_then(Value::as_str) {
            self.tokens.save(token);
        }
        Ok(response.body)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.authenticate("accounts/login", credentials).await
    }

    pub async fn signup(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.authenticate("accounts/signup", credentials).await
    }

    pub async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        let response = self
            .send_authorized(self.request(Method::Get, "home"))
            .await?;
        Ok(serde_json::from_value(response.body)?)
    }

    pub async fn add_category(&self, category_name: &str) -> Result<Value, ApiError> {
        let payload = NewCategory {
            category_name: category_name.to_string(),
        };
        let mut request = self.request(Method::Post, "budget/category/add");
        request.body = Some(serde_json::to_value(&payload)?);
        let response = self.send_authorized(request).await?;
        info!("category added: {category_name}");
        Ok(response.body)
    }

    pub async fn add_expense(&self, expense: &NewExpense) -> Result<Value, ApiError> {
        let mut request = self.request(Method::Post, "budget/expense/add");
        request.body = Some(serde_json::to_value(expense)?);
        debug!("sending expense payload: {:?}", request.body);
        let response = self.send_authorized(request).await?;
        Ok(response.body)
    }

    pub async fn delete_expense(&self, id: &RecordId) -> Result<(), ApiError> {
        let mut request = self.request(Method::Delete, "budget/expense/delete");
        request.query.push(("pid".to_string(), id.to_string()));
        self.send_authorized(request).await?;
        Ok(())
    }

    async fn authenticate(&self, path: &str, credentials: &Credentials) -> Result<(), ApiError> {
        let mut request = self.request(Method::Post, path);
        request.body = Some(serde_json::to_value(credentials)?);
        let response = self.send(request).await?;
        if response.status != 201 {
            return Err(ApiError::Unknown {
                status: response.status,
                body: response.body,
            });
        }

        let token: TokenResponse = serde_json::from_value(response.body)?;
        self.tokens.save(&token.access_token);
        info!("signed in as {}", credentials.username);
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: self.config.url(path),
            query: Vec::new(),
            bearer: None,
            body: None,
        }
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.send(request).await.map_err(|err| {
            warn!("{method:?} {url} failed: {err}");
            ApiError::from(err)
        })?;

        if response.is_success() {
            debug!("{method:?} {url} -> {}", response.status);
            Ok(response)
        } else {
            warn!("{method:?} {url} rejected with {}", response.status);
            Err(ApiError::from_status(response.status, response.body))
        }
    }

    /// Sends with the stored bearer token. A 401 triggers one silent renewal
    /// and, if that produced a fresh token, one replay of the request.
    async fn send_authorized(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut first = request.clone();
        first.bearer = self.bearer();

        match self.send(first).await {
            Err(err) if err.is_unauthorized() => {
                info!("access token rejected, attempting silent renewal");
                match self.renew().await {
                    Some(token) => {
                        let mut retry = request;
                        retry.bearer = Some(token);
                        self.send(retry).await
                    }
                    None => Err(err),
                }
            }
            other => other,
        }
    }

    async fn renew(&self) -> Option<String> {
        match self.refresh_session().await {
            Ok(body) => body
                .get("access_token")
                .and_then(Value::as_str)
                .map(str::to_string),
            Err(err) => {
                info!("silent renewal failed: {err}");
                None
            }
        }
    }

    fn bearer(&self) -> Option<String> {
        let token = self.tokens.load();
        if token.is_none() {
            warn!("no access token found");
        }
        token
    }
}

#[cfg(test)]
impl<T, S> ApiClient<T, S> {
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }
}
