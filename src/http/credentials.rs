//! Request credentials
//!
//! The YouTube Data API accepts either an API key (public, read-only data)
//! or an OAuth 2.0 bearer token (data owned by the authenticated channel).
//! Token acquisition is out of scope for this crate; callers obtain a token
//! elsewhere and hand it in here.

use reqwest::RequestBuilder;

/// Credential applied to every outgoing request
#[derive(Clone)]
pub enum Credentials {
    /// API key, sent as the `key` query parameter
    ApiKey(String),
    /// OAuth 2.0 access token, sent as a `Bearer` Authorization header
    BearerToken(String),
}

impl Credentials {
    /// Apply this credential to a request
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            Credentials::ApiKey(key) => req.query(&[("key", key.as_str())]),
            Credentials::BearerToken(token) => req.bearer_auth(token),
        }
    }
}

// Manual Debug so a key or token never ends up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::ApiKey(_) => f.write_str("Credentials::ApiKey(..)"),
            Credentials::BearerToken(_) => f.write_str("Credentials::BearerToken(..)"),
        }
    }
}
