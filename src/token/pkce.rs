//! The authorization code flow with proof key for code exchange.
//!
//! [Spotify documentation on the authorization code with PKCE
//! flow.](https://developer.spotify.com/documentation/web-api/tutorials/code-pkce-flow)

use log::debug;
use reqwest::header::HeaderMap;

use super::{authorization_code::refresh_request, request_token, AuthToken, ScopedAuthToken, Token, TokenResponse};
use crate::{
    client::SpotifyClient,
    error::{Error, Result},
    validate::{Validate, ValidationMode},
};

/// A user access token that can be refreshed with only the application's client ID.
///
/// Every refresh rotates the refresh token.
#[derive(Clone, PartialEq, Eq)]
pub struct PkceRefreshableAuthToken {
    token: ScopedAuthToken,
    refresh_token: String,
}

impl std::fmt::Debug for PkceRefreshableAuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PkceRefreshableAuthToken")
            .field("token", &self.token)
            .field("refresh_token", &super::REDACTED)
            .finish()
    }
}

impl PkceRefreshableAuthToken {
    /// Exchange an authorization code for an access and refresh token.
    ///
    /// The code verifier is the one whose [challenge](crate::authorize::PkceVerifier::challenge) was sent in the
    /// authorization request. No client secret is involved.
    pub async fn new(
        client: &SpotifyClient,
        code: &str,
        redirect_uri: &str,
        client_id: &str,
        code_verifier: &str,
    ) -> Result<Self> {
        debug!("Exchanging authorization code for access token with PKCE");

        let token_response = request_token(
            client,
            HeaderMap::new(),
            &[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri),
                ("client_id", client_id),
                ("code_verifier", code_verifier),
            ],
        )
        .await?;

        let refresh_token = required_refresh_token(&token_response)?;
        Ok(Self {
            token: ScopedAuthToken::from_response(&token_response),
            refresh_token,
        })
    }

    /// Request a new access token, replacing both the access and the refresh token.
    ///
    /// On failure the token is left unchanged.
    pub async fn refresh(&mut self, client: &SpotifyClient, client_id: &str) -> Result<()> {
        debug!("Refreshing access token with PKCE");

        let token_response = refresh_request(client, HeaderMap::new(), &self.refresh_token, Some(client_id)).await?;
        let refresh_token = required_refresh_token(&token_response)?;

        self.token = ScopedAuthToken::from_response(&token_response);
        self.refresh_token = refresh_token;

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

impl Token for PkceRefreshableAuthToken {
    fn authorization(&self) -> String {
        self.token.authorization()
    }
}

impl Validate for PkceRefreshableAuthToken {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        self.token.validate(mode)
    }
}

fn required_refresh_token(token_response: &TokenResponse) -> Result<String> {
    token_response
        .refresh_token
        .clone()
        .ok_or_else(|| Error::basic("Token response is missing the refresh token"))
}
