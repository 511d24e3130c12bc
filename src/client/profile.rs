//! User profile endpoints.

use super::SpotifyClient;
use crate::{
    error::Result,
    model::user::{PrivateUser, PublicUser},
    token::Token,
};

impl SpotifyClient {
    /// Get the profile of the user the token belongs to.
    ///
    /// Requires a user token. The `user-read-private` and `user-read-email` scopes fill in the private fields.
    pub async fn current_user_profile<K>(&self, token: &K) -> Result<PrivateUser>
    where
        K: Token + ?Sized,
    {
        self.get_object(token, "me".to_owned()).await
    }

    pub async fn user_profile<K>(&self, token: &K, user_id: &str) -> Result<PublicUser>
    where
        K: Token + ?Sized,
    {
        self.get_object(token, format!("users/{user_id}")).await
    }
}
