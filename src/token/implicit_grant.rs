//! The implicit grant flow.
//!
//! The accounts service hands the access token to the application in the fragment of the redirect URI. There is no
//! token request and no refresh token.
//!
//! [Spotify documentation on the implicit grant
//! flow.](https://developer.spotify.com/documentation/web-api/tutorials/implicit-flow)

use std::time::SystemTime;

use super::{AuthToken, ScopedAuthToken, BEARER};

impl ScopedAuthToken {
    /// Wrap an access token received through the implicit grant flow.
    ///
    /// The creation time is stamped as now. `scope` is the list of scopes that were requested, since the redirect
    /// doesn't repeat them.
    ///
    /// ```
    /// # use spotibind::token::{ScopedAuthToken, Token};
    /// let token = ScopedAuthToken::new("access token", 3600, ["user-read-private", "user-top-read"]);
    ///
    /// assert_eq!(token.authorization(), "Bearer access token");
    /// assert_eq!(token.scope_string(), "user-read-private user-top-read");
    /// ```
    pub fn new<S, I, T>(access_token: S, expires_in: u64, scope: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let scope: Vec<String> = scope
            .into_iter()
            .map(Into::into)
            .filter(|scope: &String| !scope.is_empty())
            .collect();

        Self {
            token: AuthToken {
                access_token: access_token.into(),
                token_type: BEARER.to_owned(),
                expires_in,
                created_at: SystemTime::now(),
            },
            scope_string: scope.join(" "),
            scope,
        }
    }
}
