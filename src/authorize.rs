//! Building the URL a user visits to authorize the application.
//!
//! The authorization code, PKCE and implicit grant flows all begin by sending the user to Spotify's authorize page.
//! Once the user accepts, Spotify redirects them to the application's redirect URI with either an authorization code
//! (in the query) or an access token (in the fragment), along with the `state` sent in the request.
//!
//! ```no_run
//! # use spotibind::{authorize::{AuthorizationRequest, PkceVerifier}, client::SpotifyClient, scope::Scope,
//! #     token::PkceRefreshableAuthToken};
//! # async fn foo() -> spotibind::Result<()> {
//! let client = SpotifyClient::new();
//! let verifier = PkceVerifier::generate();
//!
//! let request = AuthorizationRequest::new("client ID", "http://localhost/callback")
//!     .scopes([Scope::UserReadPrivate, Scope::UserTopRead])
//!     .pkce(&verifier);
//!
//! // send the user to this URL
//! let url = request.code_url(&client);
//!
//! // once they're redirected back, extract the code and the state from the redirect URL
//! # let (code, state) = ("", "");
//! request.verify_state(state)?;
//!
//! let token = PkceRefreshableAuthToken::new(
//!     &client,
//!     code,
//!     "http://localhost/callback",
//!     "client ID",
//!     verifier.as_str(),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use log::debug;
use rand::{distributions::Alphanumeric, Rng};
use reqwest::Url;
use sha2::{Digest, Sha256};

use crate::{
    client::SpotifyClient,
    error::{BasicError, Result},
    scope::{Scope, ToScopesString},
};

const RANDOM_STATE_LENGTH: usize = 16;
const PKCE_VERIFIER_LENGTH: usize = 128;

/// A request for the user to authorize the application.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    client_id: String,
    redirect_uri: String,
    state: String,
    scopes: Option<String>,
    show_dialog: bool,
    code_challenge: Option<String>,
}

/// A PKCE code verifier.
///
/// The verifier stays with the application. Its [challenge](Self::challenge) goes in the authorization request and the
/// verifier itself in the token request.
#[derive(Clone, PartialEq, Eq)]
pub struct PkceVerifier(String);

impl AuthorizationRequest {
    /// A new request with a random state, no scopes and no PKCE challenge.
    pub fn new<C, R>(client_id: C, redirect_uri: R) -> Self
    where
        C: Into<String>,
        R: Into<String>,
    {
        Self {
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            state: random_string(RANDOM_STATE_LENGTH),
            scopes: None,
            show_dialog: false,
            code_challenge: None,
        }
    }

    pub fn scopes<T>(self, scopes: T) -> Self
    where
        T: IntoIterator<Item = Scope>,
    {
        Self {
            scopes: Some(scopes.to_scopes_string()),
            ..self
        }
    }

    /// Whether to make the user approve the application again even if they already have.
    pub fn show_dialog(self, show_dialog: bool) -> Self {
        Self { show_dialog, ..self }
    }

    /// Use the given state instead of a random one.
    pub fn state<S>(self, state: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            state: state.into(),
            ..self
        }
    }

    pub fn pkce(self, verifier: &PkceVerifier) -> Self {
        Self {
            code_challenge: Some(verifier.challenge()),
            ..self
        }
    }

    pub fn get_state(&self) -> &str {
        &self.state
    }

    /// The authorize URL for the authorization code flow, with or without PKCE.
    pub fn code_url(&self, client: &SpotifyClient) -> Url {
        self.authorize_url(client, "code")
    }

    /// The authorize URL for the implicit grant flow.
    pub fn token_url(&self, client: &SpotifyClient) -> Url {
        self.authorize_url(client, "token")
    }

    /// Check the state returned in the redirect matches the one sent in this request.
    pub fn verify_state(&self, state: &str) -> Result<()> {
        if state == self.state {
            Ok(())
        } else {
            Err(BasicError::StateMismatch.into())
        }
    }

    fn authorize_url(&self, client: &SpotifyClient, response_type: &str) -> Url {
        let mut query_params = vec![
            ("response_type", response_type),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("client_id", self.client_id.as_str()),
            ("state", self.state.as_str()),
        ];

        if let Some(scopes) = self.scopes.as_deref() {
            query_params.push(("scope", scopes));
        }

        if self.show_dialog {
            // spotify's default for show_dialog is false if it's not specified
            query_params.push(("show_dialog", "true"));
        }

        if let Some(code_challenge) = self.code_challenge.as_deref() {
            query_params.extend([("code_challenge_method", "S256"), ("code_challenge", code_challenge)]);
        }

        let mut url = client.authorize_url().clone();
        url.query_pairs_mut().extend_pairs(query_params);

        debug!("Built authorize URL: {url}");
        url
    }
}

impl PkceVerifier {
    /// Generate a new random verifier of the maximum allowed length.
    pub fn generate() -> Self {
        Self(random_string(PKCE_VERIFIER_LENGTH))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The S256 code challenge: the unpadded base64url encoding of the verifier's SHA-256 digest.
    pub fn challenge(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        URL_SAFE_NO_PAD.encode(digest)
    }
}

impl From<String> for PkceVerifier {
    fn from(verifier: String) -> Self {
        Self(verifier)
    }
}

impl std::fmt::Debug for PkceVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PkceVerifier(<redacted>)")
    }
}

fn random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
