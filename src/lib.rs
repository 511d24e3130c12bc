//! A typed, asynchronous client for the [Spotify Web API](https://developer.spotify.com/documentation/web-api).
//!
//! The crate has three layers:
//!
//! - [token]: access tokens from the OAuth flows Spotify supports, and [authorize] for building the URL a user visits
//!   to grant the application access.
//! - [client]: [SpotifyClient](client::SpotifyClient), which sends requests, classifies failed responses into typed
//!   [errors](error::Error) and wraps the API endpoints.
//! - [model]: the objects the API returns, each with a [validation](validate) step that can be strict or lenient.
//!
//! # Usage
//!
//! ```no_run
//! use spotibind::{client::SpotifyClient, token::AuthToken, validate::ValidationMode};
//!
//! # async fn foo() -> spotibind::Result<()> {
//! let client = SpotifyClient::builder()
//!     .validation_mode(ValidationMode::Strict)
//!     .build()?;
//!
//! let token = AuthToken::new(&client, "client ID", "client secret").await?;
//! let album = client.album(&token, "4aawyAB9vmqN3uQ7FjRGTy", Some("FI")).await?;
//!
//! println!("{} has {} tracks", album.album.name, album.tracks.total);
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns [Error], which is one of three kinds: a basic error (transport, decoding,
//! validation or an unexpected status), an authentication error from the accounts service, or an error object from
//! the Web API. See the [error module](error) for how each is produced.
//!
//! # Crate features
//!
//! - `native-tls` (default): use the system's native TLS implementation.
//! - `rustls-tls`: use `rustls` instead.

pub mod authorize;
pub mod client;
pub mod error;
pub mod model;
pub mod query;
pub mod scope;
pub mod token;
pub mod validate;

mod util;

pub use crate::error::{Error, Result};

/// Traits needed to call the methods of tokens and API objects.
pub mod prelude {
    pub use crate::{token::Token, validate::Validate};
}
