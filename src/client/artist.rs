//! Artist endpoints.
//!
//! [Spotify documentation on artist endpoints.](https://developer.spotify.com/documentation/web-api/reference/get-an-artist)

use std::fmt::Display;

use serde::Deserialize;

use super::{ensure_id_count, page_limit, SpotifyClient};
use crate::{
    error::Result,
    model::{album::SimplifiedAlbum, artist::FullArtist, page::Paging, track::FullTrack},
    query::with_query_parameters,
    token::Token,
    validate::Collection,
};

const MAX_ARTIST_IDS: usize = 50;

/// The relation between an artist and an album, used to filter an artist's albums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlbumGroup {
    Album,
    Single,
    AppearsOn,
    Compilation,
}

#[derive(Deserialize)]
struct Artists<T> {
    artists: Vec<T>,
}

#[derive(Deserialize)]
struct Tracks {
    tracks: Vec<FullTrack>,
}

impl Display for AlbumGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlbumGroup::Album => write!(f, "album"),
            AlbumGroup::Single => write!(f, "single"),
            AlbumGroup::AppearsOn => write!(f, "appears_on"),
            AlbumGroup::Compilation => write!(f, "compilation"),
        }
    }
}

impl<T> From<Artists<T>> for Vec<T> {
    fn from(artists: Artists<T>) -> Self {
        artists.artists
    }
}

impl From<Tracks> for Vec<FullTrack> {
    fn from(tracks: Tracks) -> Self {
        tracks.tracks
    }
}

impl SpotifyClient {
    pub async fn artist<K>(&self, token: &K, id: &str) -> Result<FullArtist>
    where
        K: Token + ?Sized,
    {
        self.get_object(token, format!("artists/{id}")).await
    }

    /// Get several artists at once. At most 50 IDs are allowed.
    ///
    /// The items are in the order of the given IDs. An ID Spotify doesn't know has `None` in its place.
    pub async fn artists<K>(&self, token: &K, ids: &[&str]) -> Result<Collection<Option<FullArtist>>>
    where
        K: Token + ?Sized,
    {
        ensure_id_count(ids, MAX_ARTIST_IDS, "Artist IDs")?;

        let ids = ids.join(",");
        let path = with_query_parameters("artists", [("ids", ids.as_str())])?;
        self.get_collection::<Artists<Option<FullArtist>>, _, _>(token, path).await
    }

    /// Get a page of an artist's albums.
    ///
    /// An empty `include_groups` returns albums of every group. If a country is given, only albums available in that
    /// country are returned.
    pub async fn artist_albums<K>(
        &self,
        token: &K,
        id: &str,
        include_groups: &[AlbumGroup],
        country: Option<&str>,
        limit: Option<u32>,
        offset: u32,
    ) -> Result<Paging<SimplifiedAlbum>>
    where
        K: Token + ?Sized,
    {
        let include_groups = include_groups
            .iter()
            .map(AlbumGroup::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let limit = page_limit(limit)?;
        let offset = offset.to_string();

        let path = with_query_parameters(
            &format!("artists/{id}/albums"),
            [
                ("include_groups", include_groups.as_str()),
                ("country", country.unwrap_or_default()),
                ("limit", limit.as_str()),
                ("offset", offset.as_str()),
            ],
        )?;

        self.get_object(token, path).await
    }

    /// Get an artist's top tracks in a country.
    pub async fn artist_top_tracks<K>(
        &self,
        token: &K,
        id: &str,
        country: Option<&str>,
    ) -> Result<Collection<FullTrack>>
    where
        K: Token + ?Sized,
    {
        let path = with_query_parameters(
            &format!("artists/{id}/top-tracks"),
            [("country", country.unwrap_or_default())],
        )?;

        self.get_collection::<Tracks, _, _>(token, path).await
    }

    /// Get artists similar to the given one, based on the listening history of Spotify's users.
    pub async fn artist_related_artists<K>(&self, token: &K, id: &str) -> Result<Collection<FullArtist>>
    where
        K: Token + ?Sized,
    {
        self.get_collection::<Artists<FullArtist>, _, _>(token, format!("artists/{id}/related-artists"))
            .await
    }
}
