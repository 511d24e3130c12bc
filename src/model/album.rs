use serde::{Deserialize, Serialize};

use super::{
    artist::SimplifiedArtist, object_type::TYPE_ALBUM, page::Paging, track::SimplifiedTrack, Copyright, ExternalIds,
    ExternalUrls, Image, Restrictions,
};
use crate::{
    error::{Error, Result},
    validate::{ensure_in_range, ensure_object_type, ensure_one_of, Validate, ValidationMode},
};

pub(crate) const RELEASE_DATE_PRECISIONS: &[&str] = &["", "year", "month", "day"];

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifiedAlbum {
    /// Only present when the album is returned as part of an artist's albums.
    pub album_group: String,
    pub album_type: String,
    pub artists: Vec<SimplifiedArtist>,
    pub available_markets: Vec<String>,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub name: String,
    pub release_date: String,
    pub release_date_precision: String,
    pub restrictions: Restrictions,
    #[serde(rename = "type")]
    pub item_type: String,
    pub uri: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullAlbum {
    #[serde(flatten)]
    pub album: SimplifiedAlbum,
    pub copyrights: Vec<Copyright>,
    pub external_ids: ExternalIds,
    pub genres: Vec<String>,
    pub label: String,
    pub popularity: i64,
    pub tracks: Paging<SimplifiedTrack>,
}

impl Validate for SimplifiedAlbum {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        if !mode.is_strict() {
            return Ok(());
        }

        ensure_one_of(
            "SimplifiedAlbum",
            "album_group",
            &self.album_group,
            &["", "album", "single", "compilation", "appears_on"],
        )?;
        ensure_one_of(
            "SimplifiedAlbum",
            "album_type",
            &self.album_type,
            &["", "album", "single", "compilation"],
        )?;

        self.artists.validate(mode)?;
        self.external_urls.validate(mode)?;
        self.images.validate(mode)?;
        ensure_one_of(
            "SimplifiedAlbum",
            "release_date_precision",
            &self.release_date_precision,
            RELEASE_DATE_PRECISIONS,
        )?;
        self.restrictions.validate(mode)?;

        ensure_object_type("SimplifiedAlbum", &self.item_type, TYPE_ALBUM)
    }
}

impl Validate for FullAlbum {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        if !mode.is_strict() {
            return Ok(());
        }

        if !self.album.album_group.is_empty() {
            return Err(Error::validation("FullAlbum", "album_group", "album_group is not empty"));
        }

        self.copyrights.validate(mode)?;
        ensure_in_range("FullAlbum", "popularity", self.popularity, 0, 100)?;
        self.tracks.validate(mode)?;
        self.album.validate(mode)
    }
}
