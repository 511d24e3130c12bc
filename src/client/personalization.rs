//! The current user's top artists and tracks.
//!
//! Both endpoints require a user token with the `user-top-read` scope.

use std::fmt::Display;

use serde::de::DeserializeOwned;

use super::{page_limit, SpotifyClient};
use crate::{
    error::Result,
    model::{artist::FullArtist, page::Paging, track::FullTrack},
    query::with_query_parameters,
    token::Token,
    validate::Validate,
};

/// Over what time frame the affinities are computed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeRange {
    /// Approximately the last 4 weeks.
    ShortTerm,
    /// Approximately the last 6 months.
    #[default]
    MediumTerm,
    /// Several years of data.
    LongTerm,
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRange::ShortTerm => write!(f, "short_term"),
            TimeRange::MediumTerm => write!(f, "medium_term"),
            TimeRange::LongTerm => write!(f, "long_term"),
        }
    }
}

impl SpotifyClient {
    pub async fn top_artists<K>(
        &self,
        token: &K,
        limit: Option<u32>,
        offset: u32,
        time_range: TimeRange,
    ) -> Result<Paging<FullArtist>>
    where
        K: Token + ?Sized,
    {
        self.top(token, "artists", limit, offset, time_range).await
    }

    pub async fn top_tracks<K>(
        &self,
        token: &K,
        limit: Option<u32>,
        offset: u32,
        time_range: TimeRange,
    ) -> Result<Paging<FullTrack>>
    where
        K: Token + ?Sized,
    {
        self.top(token, "tracks", limit, offset, time_range).await
    }

    async fn top<T, K>(
        &self,
        token: &K,
        item_type: &str,
        limit: Option<u32>,
        offset: u32,
        time_range: TimeRange,
    ) -> Result<Paging<T>>
    where
        T: DeserializeOwned + Validate,
        K: Token + ?Sized,
    {
        let limit = page_limit(limit)?;
        let offset = offset.to_string();
        let time_range = time_range.to_string();

        let path = with_query_parameters(
            &format!("me/top/{item_type}"),
            [
                ("limit", limit.as_str()),
                ("offset", offset.as_str()),
                ("time_range", time_range.as_str()),
            ],
        )?;

        self.get_object(token, path).await
    }
}
