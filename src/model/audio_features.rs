use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::object_type::TYPE_AUDIO_FEATURES;
use crate::{
    error::{Error, Result},
    util::int_bool,
    validate::{ensure_in_range, ensure_non_negative, ensure_object_type, Validate, ValidationMode},
};

/// The key a track is in, as a pitch class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKey {
    C,
    CSharpDFlat,
    D,
    DSharpEFlat,
    E,
    F,
    FSharpGFlat,
    G,
    GSharpAFlat,
    A,
    ASharpBFlat,
    B,
}

/// Audio features of a single track.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioFeatures {
    pub acousticness: f64,
    pub analysis_url: String,
    pub danceability: f64,
    pub duration_ms: i64,
    pub energy: f64,
    pub id: String,
    pub instrumentalness: f64,
    /// The pitch class of the track's key, or -1 if no key was detected. See [AudioFeatures::track_key].
    pub key: i64,
    pub liveness: f64,
    /// Loudness in decibels, typically between -60 and 0.
    pub loudness: f64,
    /// `true` for major, `false` for minor. Sent as 1 or 0.
    #[serde(with = "int_bool")]
    pub mode: bool,
    pub speechiness: f64,
    pub tempo: f64,
    pub time_signature: i64,
    pub track_href: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub uri: String,
    pub valence: f64,
}

impl TrackKey {
    /// The key for a pitch class in standard pitch class notation.
    pub fn from_pitch_class(pitch_class: i64) -> Option<Self> {
        let key = match pitch_class {
            0 => TrackKey::C,
            1 => TrackKey::CSharpDFlat,
            2 => TrackKey::D,
            3 => TrackKey::DSharpEFlat,
            4 => TrackKey::E,
            5 => TrackKey::F,
            6 => TrackKey::FSharpGFlat,
            7 => TrackKey::G,
            8 => TrackKey::GSharpAFlat,
            9 => TrackKey::A,
            10 => TrackKey::ASharpBFlat,
            11 => TrackKey::B,
            _ => return None,
        };

        Some(key)
    }
}

impl Display for TrackKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TrackKey::C => "C",
            TrackKey::CSharpDFlat => "C♯/D♭",
            TrackKey::D => "D",
            TrackKey::DSharpEFlat => "D♯/E♭",
            TrackKey::E => "E",
            TrackKey::F => "F",
            TrackKey::FSharpGFlat => "F♯/G♭",
            TrackKey::G => "G",
            TrackKey::GSharpAFlat => "G♯/A♭",
            TrackKey::A => "A",
            TrackKey::ASharpBFlat => "A♯/B♭",
            TrackKey::B => "B",
        };

        f.write_str(name)
    }
}

impl AudioFeatures {
    pub fn track_key(&self) -> Option<TrackKey> {
        TrackKey::from_pitch_class(self.key)
    }
}

impl Validate for AudioFeatures {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        if !mode.is_strict() {
            return Ok(());
        }

        ensure_object_type("AudioFeatures", &self.item_type, TYPE_AUDIO_FEATURES)?;
        ensure_in_range("AudioFeatures", "acousticness", self.acousticness, 0.0, 1.0)?;
        ensure_in_range("AudioFeatures", "danceability", self.danceability, 0.0, 1.0)?;
        ensure_non_negative("AudioFeatures", "duration_ms", self.duration_ms)?;
        ensure_in_range("AudioFeatures", "energy", self.energy, 0.0, 1.0)?;
        ensure_in_range("AudioFeatures", "instrumentalness", self.instrumentalness, 0.0, 1.0)?;
        ensure_in_range("AudioFeatures", "key", self.key, 0, 11)?;
        ensure_in_range("AudioFeatures", "liveness", self.liveness, 0.0, 1.0)?;
        ensure_in_range("AudioFeatures", "speechiness", self.speechiness, 0.0, 1.0)?;

        if self.tempo < 0.0 {
            return Err(Error::validation(
                "AudioFeatures",
                "tempo",
                format!("{} is less than 0", self.tempo),
            ));
        }

        ensure_in_range("AudioFeatures", "valence", self.valence, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn features() -> serde_json::Value {
        json!({
            "acousticness": 0.00242,
            "analysis_url": "https://api.spotify.com/v1/audio-analysis/2takcwOaAZWiXQijPHIx7B",
            "danceability": 0.585,
            "duration_ms": 237040,
            "energy": 0.842,
            "id": "2takcwOaAZWiXQijPHIx7B",
            "instrumentalness": 0.00686,
            "key": 9,
            "liveness": 0.0866,
            "loudness": -5.883,
            "mode": 0,
            "speechiness": 0.0556,
            "tempo": 118.211,
            "time_signature": 4,
            "track_href": "https://api.spotify.com/v1/tracks/2takcwOaAZWiXQijPHIx7B",
            "type": "audio_features",
            "uri": "spotify:track:2takcwOaAZWiXQijPHIx7B",
            "valence": 0.428
        })
    }

    #[test]
    fn decodes_audio_features() {
        let features: AudioFeatures = serde_json::from_value(features()).unwrap();

        assert!(!features.mode);
        assert_eq!(features.track_key(), Some(TrackKey::A));
        assert!(features.validate(ValidationMode::Strict).is_ok());
    }

    #[test]
    fn mode_must_be_zero_or_one() {
        let mut value = features();
        value["mode"] = json!(2);

        assert!(serde_json::from_value::<AudioFeatures>(value).is_err());
    }

    #[test]
    fn key_names() {
        assert_eq!(TrackKey::CSharpDFlat.to_string(), "C♯/D♭");
        assert_eq!(TrackKey::from_pitch_class(11).unwrap().to_string(), "B");
        assert_eq!(TrackKey::from_pitch_class(-1), None);
        assert_eq!(TrackKey::from_pitch_class(12), None);
    }

    #[test]
    fn out_of_range_features_when_strict() {
        let mut value = features();
        value["energy"] = json!(1.5);
        let features: AudioFeatures = serde_json::from_value(value).unwrap();

        assert!(features.validate(ValidationMode::Lenient).is_ok());

        let err = features.validate(ValidationMode::Strict).unwrap_err();
        assert!(err.message().contains("energy"));
    }

    #[test]
    fn undetected_key_fails_strict_validation() {
        let mut value = features();
        value["key"] = json!(-1);
        let features: AudioFeatures = serde_json::from_value(value).unwrap();

        assert_eq!(features.track_key(), None);
        assert!(features.validate(ValidationMode::Strict).is_err());
    }
}
