use serde::{Deserialize, Serialize};

use super::{episode::SimplifiedEpisode, object_type::TYPE_SHOW, page::Paging, Copyright, ExternalUrls, Image};
use crate::{
    error::Result,
    validate::{ensure_non_negative, ensure_object_type, ensure_one_of, Validate, ValidationMode},
};

/// A podcast show without its episodes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifiedShow {
    pub available_markets: Vec<String>,
    pub copyrights: Vec<Copyright>,
    pub description: String,
    pub html_description: String,
    pub explicit: bool,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub is_externally_hosted: bool,
    pub languages: Vec<String>,
    pub media_type: String,
    pub name: String,
    pub publisher: String,
    pub total_episodes: i64,
    #[serde(rename = "type")]
    pub item_type: String,
    pub uri: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullShow {
    #[serde(flatten)]
    pub show: SimplifiedShow,
    pub episodes: Paging<SimplifiedEpisode>,
}

impl Validate for SimplifiedShow {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        if !mode.is_strict() {
            return Ok(());
        }

        self.copyrights.validate(mode)?;
        self.external_urls.validate(mode)?;
        self.images.validate(mode)?;
        ensure_one_of("SimplifiedShow", "media_type", &self.media_type, &["", "audio", "video", "mixed"])?;
        ensure_non_negative("SimplifiedShow", "total_episodes", self.total_episodes)?;

        ensure_object_type("SimplifiedShow", &self.item_type, TYPE_SHOW)
    }
}

impl Validate for FullShow {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        if !mode.is_strict() {
            return Ok(());
        }

        self.episodes.validate(mode)?;
        self.show.validate(mode)
    }
}
