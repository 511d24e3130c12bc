//! Podcast episode endpoints.

use serde::Deserialize;

use super::{ensure_id_count, SpotifyClient};
use crate::{
    error::Result,
    model::episode::FullEpisode,
    query::with_query_parameters,
    token::Token,
    validate::Collection,
};

const MAX_EPISODE_IDS: usize = 50;

#[derive(Deserialize)]
struct Episodes {
    episodes: Vec<Option<FullEpisode>>,
}

impl From<Episodes> for Vec<Option<FullEpisode>> {
    fn from(episodes: Episodes) -> Self {
        episodes.episodes
    }
}

impl SpotifyClient {
    /// Get a single episode.
    ///
    /// With a user token the user's country takes priority over the given market. Without either, the episode is
    /// considered unavailable.
    pub async fn episode<K>(&self, token: &K, id: &str, market: Option<&str>) -> Result<FullEpisode>
    where
        K: Token + ?Sized,
    {
        let path = with_query_parameters(&format!("episodes/{id}"), [("market", market.unwrap_or_default())])?;
        self.get_object(token, path).await
    }

    /// Get several episodes at once. At most 50 IDs are allowed.
    ///
    /// The items are in the order of the given IDs. An ID Spotify doesn't know has `None` in its place.
    pub async fn episodes<K>(
        &self,
        token: &K,
        ids: &[&str],
        market: Option<&str>,
    ) -> Result<Collection<Option<FullEpisode>>>
    where
        K: Token + ?Sized,
    {
        ensure_id_count(ids, MAX_EPISODE_IDS, "Episode IDs")?;

        let ids = ids.join(",");
        let path = with_query_parameters("episodes", [("ids", ids.as_str()), ("market", market.unwrap_or_default())])?;
        self.get_collection::<Episodes, _, _>(token, path).await
    }
}
