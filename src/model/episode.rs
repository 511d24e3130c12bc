use serde::{Deserialize, Serialize};

use super::{
    album::RELEASE_DATE_PRECISIONS, object_type::TYPE_EPISODE, show::SimplifiedShow, ExternalUrls, Image, Restrictions,
    ResumePoint,
};
use crate::{
    error::Result,
    validate::{ensure_non_negative, ensure_object_type, ensure_one_of, Validate, ValidationMode},
};

/// A podcast episode without the show it belongs to.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifiedEpisode {
    pub audio_preview_url: Option<String>,
    pub description: String,
    pub html_description: String,
    pub duration_ms: i64,
    pub explicit: bool,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub is_externally_hosted: bool,
    pub is_playable: bool,
    pub languages: Vec<String>,
    pub name: String,
    pub release_date: String,
    pub release_date_precision: String,
    /// Only present with a user token that has the `user-read-playback-position` scope.
    pub resume_point: Option<ResumePoint>,
    pub restrictions: Restrictions,
    #[serde(rename = "type")]
    pub item_type: String,
    pub uri: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullEpisode {
    #[serde(flatten)]
    pub episode: SimplifiedEpisode,
    pub show: SimplifiedShow,
}

impl Validate for SimplifiedEpisode {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        if !mode.is_strict() {
            return Ok(());
        }

        ensure_non_negative("SimplifiedEpisode", "duration_ms", self.duration_ms)?;
        self.external_urls.validate(mode)?;
        self.images.validate(mode)?;
        ensure_one_of(
            "SimplifiedEpisode",
            "release_date_precision",
            &self.release_date_precision,
            RELEASE_DATE_PRECISIONS,
        )?;
        self.resume_point.validate(mode)?;
        self.restrictions.validate(mode)?;

        ensure_object_type("SimplifiedEpisode", &self.item_type, TYPE_EPISODE)
    }
}

impl Validate for FullEpisode {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        if !mode.is_strict() {
            return Ok(());
        }

        self.show.validate(mode)?;
        self.episode.validate(mode)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn full_episode() -> serde_json::Value {
        json!({
            "audio_preview_url": "https://p.scdn.co/mp3-preview/566fcc94708f39bcddc09e4ce84a8e5db8f07d4d",
            "description": "En ny tysk bok granskar för första gången Tredje rikets drogberoende.",
            "duration_ms": 1502795,
            "explicit": false,
            "external_urls": { "spotify": "https://open.spotify.com/episode/512ojhOuo1ktJprKbVcKyQ" },
            "href": "https://api.spotify.com/v1/episodes/512ojhOuo1ktJprKbVcKyQ",
            "id": "512ojhOuo1ktJprKbVcKyQ",
            "images": [],
            "is_externally_hosted": false,
            "is_playable": true,
            "languages": ["sv"],
            "name": "Tredje rikets knarkande granskas",
            "release_date": "2015-10-01",
            "release_date_precision": "day",
            "resume_point": { "fully_played": false, "resume_position_ms": 0 },
            "show": {
                "available_markets": ["SE"],
                "copyrights": [],
                "description": "Vi är där historien är.",
                "explicit": false,
                "external_urls": { "spotify": "https://open.spotify.com/show/38bS44xjbVVZ3No3ByF1dJ" },
                "href": "https://api.spotify.com/v1/shows/38bS44xjbVVZ3No3ByF1dJ",
                "id": "38bS44xjbVVZ3No3ByF1dJ",
                "images": [],
                "is_externally_hosted": false,
                "languages": ["sv"],
                "media_type": "audio",
                "name": "Vetenskapsradion Historia",
                "publisher": "Sveriges Radio",
                "type": "show",
                "uri": "spotify:show:38bS44xjbVVZ3No3ByF1dJ"
            },
            "type": "episode",
            "uri": "spotify:episode:512ojhOuo1ktJprKbVcKyQ"
        })
    }

    #[test]
    fn decodes_full_episode() {
        let episode: FullEpisode = serde_json::from_value(full_episode()).unwrap();

        assert_eq!(episode.episode.duration_ms, 1502795);
        assert_eq!(episode.show.publisher, "Sveriges Radio");
        assert!(episode.episode.resume_point.is_some());
        assert!(episode.validate(ValidationMode::Strict).is_ok());
    }

    #[test]
    fn negative_resume_position_when_strict() {
        let mut value = full_episode();
        value["resume_point"]["resume_position_ms"] = json!(-10);
        let episode: FullEpisode = serde_json::from_value(value).unwrap();

        assert!(episode.validate(ValidationMode::Lenient).is_ok());

        let err = episode.validate(ValidationMode::Strict).unwrap_err();
        assert!(err.message().contains("resume_position_ms"));
    }

    #[test]
    fn show_is_validated_before_episode() {
        let mut value = full_episode();
        value["show"]["media_type"] = json!("hologram");
        value["duration_ms"] = json!(-1);
        let episode: FullEpisode = serde_json::from_value(value).unwrap();

        let err = episode.validate(ValidationMode::Strict).unwrap_err();
        assert!(err.message().contains("media_type"));
    }
}
