//! Values of the `type` field that discriminates API objects.

pub const TYPE_ALBUM: &str = "album";
pub const TYPE_TRACK: &str = "track";
pub const TYPE_ARTIST: &str = "artist";
pub const TYPE_EPISODE: &str = "episode";
pub const TYPE_SHOW: &str = "show";
pub const TYPE_USER: &str = "user";
pub const TYPE_AUDIO_FEATURES: &str = "audio_features";
