use serde::{Deserialize, Serialize};

use super::{object_type::TYPE_ARTIST, ExternalUrls, Followers, Image};
use crate::{
    error::Result,
    validate::{ensure_in_range, ensure_object_type, Validate, ValidationMode},
};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifiedArtist {
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub uri: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullArtist {
    #[serde(flatten)]
    pub artist: SimplifiedArtist,
    pub followers: Followers,
    pub genres: Vec<String>,
    pub images: Vec<Image>,
    /// Between 0 and 100, 100 being the most popular.
    pub popularity: i64,
}

impl Validate for SimplifiedArtist {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        ensure_object_type("SimplifiedArtist", &self.item_type, TYPE_ARTIST)?;
        self.external_urls.validate(mode)
    }
}

impl Validate for FullArtist {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        self.followers.validate(mode)?;
        self.images.validate(mode)?;
        ensure_in_range("FullArtist", "popularity", self.popularity, 0, 100)?;
        self.artist.validate(mode)
    }
}
