//! Access tokens and the OAuth flows that acquire them.
//!
//! Spotify supports four authorization flows. Each one produces a token that renders itself as an `Authorization`
//! header value through the [Token] trait, which is all the [endpoint wrappers](crate::client::SpotifyClient) need.
//!
//! - [Client credentials](AuthToken::new): app-only access using the client ID and secret. There's no refresh token;
//!   request a new token once the old one expires.
//! - [Authorization code](RefreshableAuthToken::new): user access using the client ID and secret, with a refresh
//!   token.
//! - [Authorization code with PKCE](PkceRefreshableAuthToken::new): user access without the client secret, with a
//!   rotating refresh token.
//! - [Implicit grant](ScopedAuthToken::new): user access where the token is handed to the application in a redirect;
//!   no network call is involved.
//!
//! None of the tokens refresh themselves when they expire. Check [AuthToken::is_expired] and call `refresh`
//! explicitly. A failed refresh leaves the token exactly as it was.

mod authorization_code;
mod client_credentials;
mod implicit_grant;
mod pkce;

pub use self::{authorization_code::RefreshableAuthToken, pkce::PkceRefreshableAuthToken};

use std::time::{Duration, SystemTime};

use base64::{engine::general_purpose::STANDARD, Engine};
use log::debug;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Deserialize;
use url::form_urlencoded;

use crate::{
    client::SpotifyClient,
    error::{Error, Result},
    scope::Scope,
    validate::{Validate, ValidationMode},
};

const BEARER: &str = "Bearer";
const REDACTED: &str = "<redacted>";

/// Anything that can authorize a request to the Web API.
pub trait Token {
    /// The value of the `Authorization` header, e.g. `Bearer <access token>`.
    fn authorization(&self) -> String;
}

/// A plain access token, as issued by the client credentials flow.
///
/// The access token is left out of the `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    access_token: String,
    token_type: String,
    expires_in: u64,
    created_at: SystemTime,
}

/// An access token together with the scopes the user granted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedAuthToken {
    token: AuthToken,
    scope: Vec<String>,
    scope_string: String,
}

/// A successful response from the token endpoint.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    expires_in: u64,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

impl AuthToken {
    fn from_response(response: &TokenResponse) -> Self {
        Self {
            access_token: response.access_token.clone(),
            token_type: response.token_type.clone(),
            expires_in: response.expires_in,
            created_at: SystemTime::now(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// How many seconds after its creation the token expires.
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn expires_at(&self) -> SystemTime {
        self.created_at + Duration::from_secs(self.expires_in)
    }

    pub fn is_expired(&self) -> bool {
        SystemTime::now() >= self.expires_at()
    }
}

impl Token for AuthToken {
    fn authorization(&self) -> String {
        format!("{} {}", BEARER, self.access_token)
    }
}

impl Validate for AuthToken {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        if !mode.is_strict() {
            return Ok(());
        }

        if self.token_type != BEARER {
            return Err(Error::validation("AuthToken", "token_type", "token type is not Bearer"));
        }

        Ok(())
    }
}

impl ScopedAuthToken {
    fn from_response(response: &TokenResponse) -> Self {
        let scope_string = response.scope.clone().unwrap_or_default();

        Self {
            token: AuthToken::from_response(response),
            scope: split_scope(&scope_string),
            scope_string,
        }
    }

    pub fn auth_token(&self) -> &AuthToken {
        &self.token
    }

    pub fn access_token(&self) -> &str {
        self.token.access_token()
    }

    /// The granted scopes, in the order the accounts service listed them.
    pub fn scope(&self) -> &[String] {
        &self.scope
    }

    /// The granted scopes as the raw space-separated string.
    pub fn scope_string(&self) -> &str {
        &self.scope_string
    }

    /// The granted scopes this library knows about. Unknown scopes are skipped.
    pub fn scopes(&self) -> impl Iterator<Item = Scope> + '_ {
        self.scope.iter().filter_map(|scope| scope.parse().ok())
    }
}

impl Token for ScopedAuthToken {
    fn authorization(&self) -> String {
        self.token.authorization()
    }
}

impl Validate for ScopedAuthToken {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        if !mode.is_strict() {
            return Ok(());
        }

        self.token.validate(mode)
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("access_token", &REDACTED)
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // keep secrets out of the logs
        f.debug_struct("TokenResponse")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| REDACTED))
            .finish_non_exhaustive()
    }
}

fn split_scope(scope_string: &str) -> Vec<String> {
    scope_string
        .split(' ')
        .filter(|scope| !scope.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Headers authenticating the application with its client ID and secret.
fn basic_authorization_headers(client_id: &str, client_secret: &str) -> Result<HeaderMap> {
    let credentials = STANDARD.encode(format!("{client_id}:{client_secret}"));
    let value = HeaderValue::from_str(&format!("Basic {credentials}"))
        .map_err(|err| Error::basic(format!("Invalid client credentials header: {err}")))?;

    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, value);
    Ok(headers)
}

/// Send a form to the token endpoint and decode the response, refusing any token that isn't a bearer token.
async fn request_token(client: &SpotifyClient, headers: HeaderMap, form: &[(&str, &str)]) -> Result<TokenResponse> {
    let payload = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(form)
        .finish();

    let response = client.post_authorization(headers, payload).await?;
    let token_response: TokenResponse = serde_json::from_str(response.body())?;
    debug!("Got token response: {token_response:?}");

    if token_response.token_type != BEARER {
        return Err(Error::basic(format!(
            "token_type is not Bearer, got '{}'",
            token_response.token_type
        )));
    }

    Ok(token_response)
}
