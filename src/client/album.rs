//! Album endpoints.
//!
//! [Spotify documentation on album endpoints.](https://developer.spotify.com/documentation/web-api/reference/get-an-album)

use serde::Deserialize;

use super::{ensure_id_count, page_limit, SpotifyClient};
use crate::{
    error::Result,
    model::{album::FullAlbum, page::Paging, track::SimplifiedTrack},
    query::with_query_parameters,
    token::Token,
    validate::Collection,
};

const MAX_ALBUM_IDS: usize = 20;

#[derive(Deserialize)]
struct Albums {
    albums: Vec<Option<FullAlbum>>,
}

impl From<Albums> for Vec<Option<FullAlbum>> {
    fn from(albums: Albums) -> Self {
        albums.albums
    }
}

impl SpotifyClient {
    /// Get a single album.
    ///
    /// If a market is given, only content playable in that market is returned and track relinking is applied.
    pub async fn album<K>(&self, token: &K, id: &str, market: Option<&str>) -> Result<FullAlbum>
    where
        K: Token + ?Sized,
    {
        let path = with_query_parameters(&format!("albums/{id}"), [("market", market.unwrap_or_default())])?;
        self.get_object(token, path).await
    }

    /// Get several albums at once. At most 20 IDs are allowed.
    ///
    /// The items are in the order of the given IDs. An ID Spotify doesn't know has `None` in its place.
    pub async fn albums<K>(
        &self,
        token: &K,
        ids: &[&str],
        market: Option<&str>,
    ) -> Result<Collection<Option<FullAlbum>>>
    where
        K: Token + ?Sized,
    {
        ensure_id_count(ids, MAX_ALBUM_IDS, "Album IDs")?;

        let ids = ids.join(",");
        let path = with_query_parameters("albums", [("ids", ids.as_str()), ("market", market.unwrap_or_default())])?;
        self.get_collection::<Albums, _, _>(token, path).await
    }

    /// Get a page of an album's tracks.
    pub async fn album_tracks<K>(
        &self,
        token: &K,
        id: &str,
        limit: Option<u32>,
        offset: u32,
        market: Option<&str>,
    ) -> Result<Paging<SimplifiedTrack>>
    where
        K: Token + ?Sized,
    {
        let limit = page_limit(limit)?;
        let offset = offset.to_string();
        let path = with_query_parameters(
            &format!("albums/{id}/tracks"),
            [
                ("limit", limit.as_str()),
                ("offset", offset.as_str()),
                ("market", market.unwrap_or_default()),
            ],
        )?;

        self.get_object(token, path).await
    }
}
