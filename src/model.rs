//! Objects returned by the Web API.
//!
//! Every object mirrors the JSON the API sends. Missing fields decode to their defaults and fields the API may send
//! as `null` are `Option`s. Decoding checks only the shape; the documented invariants are checked by
//! [Validate](crate::validate::Validate), which every endpoint wrapper runs on the decoded object.
//!
//! Richer objects embed their simplified counterparts: a [FullAlbum](album::FullAlbum) holds a
//! [SimplifiedAlbum](album::SimplifiedAlbum) whose fields are flattened into the same JSON object.

pub mod album;
pub mod artist;
pub mod audio_features;
pub mod episode;
pub(crate) mod error;
pub mod object_type;
pub mod page;
pub mod show;
pub mod track;
pub mod user;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    error::{Error, Result},
    validate::{ensure_non_negative, ensure_one_of, Validate, ValidationMode},
};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
    pub height: Option<i64>,
    pub width: Option<i64>,
}

/// Follower information. The API always sends a null `href`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Followers {
    pub href: Option<String>,
    pub total: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Restrictions {
    pub reason: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Copyright {
    pub text: String,
    /// `C` for copyright, `P` for sound recording (performance) copyright.
    #[serde(rename = "type")]
    pub copyright_type: String,
}

/// Known external URLs, keyed by the service's name. Usually only `spotify` is present.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalUrls(pub HashMap<String, String>);

/// Known external identifiers, keyed by type: `isrc`, `ean` or `upc`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalIds(pub HashMap<String, String>);

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumePoint {
    pub fully_played: bool,
    pub resume_position_ms: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cursor {
    pub after: String,
}

/// Playback actions that are currently not allowed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Disallows {
    pub interrupting_playback: bool,
    pub pausing: bool,
    pub resuming: bool,
    pub seeking: bool,
    pub skipping_next: bool,
    pub skipping_prev: bool,
    pub toggling_repeat_context: bool,
    pub toggling_shuffle: bool,
    pub toggling_repeat_track: bool,
    pub transferring_playback: bool,
}

/// The context something is played in, such as an album or a playlist.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    #[serde(rename = "type")]
    pub context_type: String,
    pub href: String,
    pub external_urls: ExternalUrls,
    pub uri: String,
}

/// A category used to tag items in the browse view.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub href: String,
    pub icons: Vec<Image>,
    pub id: String,
    pub name: String,
}

/// A user's explicit content settings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplicitContent {
    pub filter_enabled: bool,
    pub filter_locked: bool,
}

impl ExternalUrls {
    pub fn spotify(&self) -> Option<&str> {
        self.0.get("spotify").map(String::as_str)
    }
}

impl ExternalIds {
    pub fn isrc(&self) -> Option<&str> {
        self.0.get("isrc").map(String::as_str)
    }

    pub fn ean(&self) -> Option<&str> {
        self.0.get("ean").map(String::as_str)
    }

    pub fn upc(&self) -> Option<&str> {
        self.0.get("upc").map(String::as_str)
    }
}

impl Validate for Image {
    fn validate(&self, _: ValidationMode) -> Result<()> {
        if let Some(height) = self.height {
            ensure_non_negative("Image", "height", height)?;
        }

        if let Some(width) = self.width {
            ensure_non_negative("Image", "width", width)?;
        }

        Ok(())
    }
}

impl Validate for Followers {
    fn validate(&self, _: ValidationMode) -> Result<()> {
        if self.href.as_deref().is_some_and(|href| !href.is_empty()) {
            return Err(Error::validation("Followers", "href", "href is not empty"));
        }

        ensure_non_negative("Followers", "total", self.total)
    }
}

impl Validate for Restrictions {
    fn validate(&self, _: ValidationMode) -> Result<()> {
        ensure_one_of(
            "Restrictions",
            "reason",
            &self.reason,
            &["", "market", "product", "explicit"],
        )
    }
}

impl Validate for Copyright {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        if !mode.is_strict() {
            return Ok(());
        }

        ensure_one_of("Copyright", "type", &self.copyright_type, &["", "C", "P"])
    }
}

impl Validate for ExternalUrls {
    fn validate(&self, _: ValidationMode) -> Result<()> {
        for (service, url) in &self.0 {
            if let Err(err) = Url::parse(url) {
                return Err(Error::validation(
                    "ExternalUrls",
                    "url",
                    format!("invalid URL for {service}: {err}"),
                ));
            }
        }

        Ok(())
    }
}

impl Validate for ResumePoint {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        if !mode.is_strict() {
            return Ok(());
        }

        ensure_non_negative("ResumePoint", "resume_position_ms", self.resume_position_ms)
    }
}

impl Validate for Context {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        if !mode.is_strict() {
            return Ok(());
        }

        ensure_one_of("Context", "type", &self.context_type, &["", "artist", "playlist", "album"])?;
        self.external_urls.validate(mode)
    }
}

impl Validate for Category {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        if !mode.is_strict() {
            return Ok(());
        }

        self.icons.validate(mode)
    }
}
