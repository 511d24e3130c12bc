//! Authorization scopes an application can request from a user.
//!
//! [Spotify documentation on scopes.](https://developer.spotify.com/documentation/web-api/concepts/scopes)

use std::{fmt::Display, str::FromStr};

use crate::error::Error;

pub(crate) trait ToScopesString
where
    Self: IntoIterator<Item = Scope>,
{
    /// Join the scopes with spaces, as the authorize endpoint expects them.
    fn to_scopes_string(self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    UgcImageUpload,
    UserModifyPlaybackState,
    UserReadPlaybackState,
    UserReadCurrentlyPlaying,
    UserFollowModify,
    UserFollowRead,
    UserReadRecentlyPlayed,
    UserReadPlaybackPosition,
    UserTopRead,
    PlaylistReadCollaborative,
    PlaylistModifyPublic,
    PlaylistReadPrivate,
    PlaylistModifyPrivate,
    AppRemoteControl,
    Streaming,
    UserReadEmail,
    UserReadPrivate,
    UserLibraryModify,
    UserLibraryRead,
}

impl Scope {
    pub const ALL: [Scope; 19] = [
        Scope::UgcImageUpload,
        Scope::UserModifyPlaybackState,
        Scope::UserReadPlaybackState,
        Scope::UserReadCurrentlyPlaying,
        Scope::UserFollowModify,
        Scope::UserFollowRead,
        Scope::UserReadRecentlyPlayed,
        Scope::UserReadPlaybackPosition,
        Scope::UserTopRead,
        Scope::PlaylistReadCollaborative,
        Scope::PlaylistModifyPublic,
        Scope::PlaylistReadPrivate,
        Scope::PlaylistModifyPrivate,
        Scope::AppRemoteControl,
        Scope::Streaming,
        Scope::UserReadEmail,
        Scope::UserReadPrivate,
        Scope::UserLibraryModify,
        Scope::UserLibraryRead,
    ];

    /// The scope's name as the accounts service spells it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Scope::UgcImageUpload => "ugc-image-upload",
            Scope::UserModifyPlaybackState => "user-modify-playback-state",
            Scope::UserReadPlaybackState => "user-read-playback-state",
            Scope::UserReadCurrentlyPlaying => "user-read-currently-playing",
            Scope::UserFollowModify => "user-follow-modify",
            Scope::UserFollowRead => "user-follow-read",
            Scope::UserReadRecentlyPlayed => "user-read-recently-played",
            Scope::UserReadPlaybackPosition => "user-read-playback-position",
            Scope::UserTopRead => "user-top-read",
            Scope::PlaylistReadCollaborative => "playlist-read-collaborative",
            Scope::PlaylistModifyPublic => "playlist-modify-public",
            Scope::PlaylistReadPrivate => "playlist-read-private",
            Scope::PlaylistModifyPrivate => "playlist-modify-private",
            Scope::AppRemoteControl => "app-remote-control",
            Scope::Streaming => "streaming",
            Scope::UserReadEmail => "user-read-email",
            Scope::UserReadPrivate => "user-read-private",
            Scope::UserLibraryModify => "user-library-modify",
            Scope::UserLibraryRead => "user-library-read",
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| Error::basic(format!("Unknown scope: {s}")))
    }
}

impl<I> ToScopesString for I
where
    I: IntoIterator<Item = Scope>,
{
    fn to_scopes_string(self) -> String {
        self.into_iter()
            .map(Scope::as_str)
            .collect::<Vec<&str>>()
            .join(" ")
    }
}
