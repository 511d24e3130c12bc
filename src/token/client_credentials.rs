//! The client credentials flow.
//!
//! [Spotify documentation on the client credentials
//! flow.](https://developer.spotify.com/documentation/web-api/tutorials/client-credentials-flow)

use log::debug;

use super::{basic_authorization_headers, request_token, AuthToken};
use crate::{client::SpotifyClient, error::Result};

impl AuthToken {
    /// Request an app-only access token using the application's client ID and secret.
    ///
    /// The token cannot be refreshed; request a new one once it expires.
    ///
    /// ```no_run
    /// # use spotibind::{client::SpotifyClient, token::{AuthToken, Token}};
    /// # async fn foo() -> spotibind::Result<()> {
    /// let client = SpotifyClient::new();
    /// let token = AuthToken::new(&client, "client ID", "client secret").await?;
    ///
    /// let artist = client.artist(&token, "0OdUWJ0sBjDrqHygGUXeCF").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(client: &SpotifyClient, client_id: &str, client_secret: &str) -> Result<Self> {
        debug!("Requesting access token for client credentials flow");

        let headers = basic_authorization_headers(client_id, client_secret)?;
        let token_response = request_token(client, headers, &[("grant_type", "client_credentials")]).await?;

        Ok(Self::from_response(&token_response))
    }
}
