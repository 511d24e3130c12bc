use serde::{Deserialize, Serialize};

use super::{
    album::SimplifiedAlbum, artist::SimplifiedArtist, object_type::TYPE_TRACK, ExternalIds, ExternalUrls, Restrictions,
};
use crate::{
    error::Result,
    validate::{ensure_in_range, ensure_object_type, Validate, ValidationMode},
};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifiedTrack {
    pub artists: Vec<SimplifiedArtist>,
    pub available_markets: Vec<String>,
    pub disc_number: i64,
    pub duration_ms: i64,
    pub explicit: bool,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    /// Only present when track relinking was applied for a given market.
    pub is_playable: Option<bool>,
    pub linked_from: Option<TrackLink>,
    pub restrictions: Restrictions,
    pub name: String,
    pub preview_url: Option<String>,
    pub track_number: i64,
    #[serde(rename = "type")]
    pub item_type: String,
    pub uri: String,
    pub is_local: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullTrack {
    #[serde(flatten)]
    pub track: SimplifiedTrack,
    pub album: SimplifiedAlbum,
    pub external_ids: ExternalIds,
    pub popularity: i64,
}

/// The original track a relinked track stands in for.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackLink {
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub uri: String,
}

impl Validate for SimplifiedTrack {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        self.artists.validate(mode)?;
        self.external_urls.validate(mode)?;
        self.linked_from.validate(mode)?;
        self.restrictions.validate(mode)?;
        ensure_object_type("SimplifiedTrack", &self.item_type, TYPE_TRACK)
    }
}

impl Validate for FullTrack {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        if !mode.is_strict() {
            return Ok(());
        }

        self.album.validate(mode)?;
        ensure_in_range("FullTrack", "popularity", self.popularity, 0, 100)?;
        self.track.validate(mode)
    }
}

impl Validate for TrackLink {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        ensure_object_type("TrackLink", &self.item_type, TYPE_TRACK)?;
        self.external_urls.validate(mode)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn relinked_track() {
        let track: SimplifiedTrack = serde_json::from_value(json!({
            "id": "6kLCHFM39wkFjOuyPGLGeQ",
            "is_playable": true,
            "linked_from": {
                "external_urls": { "spotify": "https://open.spotify.com/track/6ozxplTAjWO0BlUxN8ia0A" },
                "href": "https://api.spotify.com/v1/tracks/6ozxplTAjWO0BlUxN8ia0A",
                "id": "6ozxplTAjWO0BlUxN8ia0A",
                "type": "track",
                "uri": "spotify:track:6ozxplTAjWO0BlUxN8ia0A"
            },
            "name": "Heaven and Hell",
            "type": "track"
        }))
        .unwrap();

        assert_eq!(track.is_playable, Some(true));
        assert_eq!(track.linked_from.as_ref().unwrap().id, "6ozxplTAjWO0BlUxN8ia0A");
        assert!(track.validate(ValidationMode::Lenient).is_ok());
    }

    #[test]
    fn linked_track_type_is_checked() {
        let track = SimplifiedTrack {
            linked_from: Some(TrackLink {
                item_type: "episode".to_owned(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let err = track.validate(ValidationMode::Lenient).unwrap_err();
        assert!(err.message().contains("TrackLink"));
    }

    #[test]
    fn full_track_popularity_checked_when_strict() {
        let track = FullTrack {
            popularity: -3,
            ..Default::default()
        };

        assert!(track.validate(ValidationMode::Lenient).is_ok());
        assert!(track.validate(ValidationMode::Strict).is_err());
    }

    #[test]
    fn full_track_checks_nested_artists_when_strict() {
        let track: FullTrack = serde_json::from_value(json!({
            "album": { "album_type": "single", "type": "album" },
            "artists": [{ "name": "Somebody", "type": "playlist" }],
            "popularity": 50,
            "type": "track"
        }))
        .unwrap();

        assert!(track.validate(ValidationMode::Lenient).is_ok());
        assert!(track.track.validate(ValidationMode::Lenient).is_err());
        assert!(track.validate(ValidationMode::Strict).is_err());
    }
}
