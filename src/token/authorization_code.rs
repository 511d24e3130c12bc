//! The authorization code flow.
//!
//! [Spotify documentation on the authorization code
//! flow.](https://developer.spotify.com/documentation/web-api/tutorials/code-flow)

use log::debug;
use reqwest::header::HeaderMap;

use super::{basic_authorization_headers, request_token, AuthToken, ScopedAuthToken, Token};
use crate::{
    client::SpotifyClient,
    error::{Error, Result},
    validate::{Validate, ValidationMode},
};

/// A user access token that can be refreshed using the application's client ID and secret.
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshableAuthToken {
    token: ScopedAuthToken,
    refresh_token: String,
}

impl std::fmt::Debug for RefreshableAuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshableAuthToken")
            .field("token", &self.token)
            .field("refresh_token", &super::REDACTED)
            .finish()
    }
}

impl RefreshableAuthToken {
    /// Exchange an authorization code for an access and refresh token.
    ///
    /// The redirect URI must be the same one given in the
    /// [authorization request](crate::authorize::AuthorizationRequest::code_url).
    pub async fn new(
        client: &SpotifyClient,
        code: &str,
        redirect_uri: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Result<Self> {
        debug!("Exchanging authorization code for access token");

        let headers = basic_authorization_headers(client_id, client_secret)?;
        let token_response = request_token(
            client,
            headers,
            &[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri),
            ],
        )
        .await?;

        let refresh_token = token_response
            .refresh_token
            .clone()
            .ok_or_else(|| Error::basic("Token response is missing the refresh token"))?;

        Ok(Self {
            token: ScopedAuthToken::from_response(&token_response),
            refresh_token,
        })
    }

    /// Request a new access token using the refresh token.
    ///
    /// The refresh token is replaced only if the accounts service returns a new one. On failure the token is left
    /// unchanged.
    pub async fn refresh(&mut self, client: &SpotifyClient, client_id: &str, client_secret: &str) -> Result<()> {
        debug!("Refreshing access token");

        let headers = basic_authorization_headers(client_id, client_secret)?;
        let token_response = refresh_request(client, headers, &self.refresh_token, None).await?;

        self.token = ScopedAuthToken::from_response(&token_response);
        if let Some(refresh_token) = token_response.refresh_token {
            self.refresh_token = refresh_token;
        }

        Ok(())
    }

    pub fn scoped_token(&self) -> &ScopedAuthToken {
        &self.token
    }

    pub fn auth_token(&self) -> &AuthToken {
        self.token.auth_token()
    }

    pub fn access_token(&self) -> &str {
        self.token.access_token()
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn scope(&self) -> &[String] {
        self.token.scope()
    }

    pub fn is_expired(&self) -> bool {
        self.token.auth_token().is_expired()
    }
}

impl Token for RefreshableAuthToken {
    fn authorization(&self) -> String {
        self.token.authorization()
    }
}

impl Validate for RefreshableAuthToken {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        self.token.validate(mode)
    }
}

/// Send a refresh token grant, optionally identifying the client by its ID in the form.
pub(super) async fn refresh_request(
    client: &SpotifyClient,
    headers: HeaderMap,
    refresh_token: &str,
    client_id: Option<&str>,
) -> Result<super::TokenResponse> {
    let mut form = vec![("grant_type", "refresh_token"), ("refresh_token", refresh_token)];
    if let Some(client_id) = client_id {
        form.push(("client_id", client_id));
    }

    request_token(client, headers, &form).await
}
