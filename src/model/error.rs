//! Wire shapes of the two error objects Spotify returns.

use serde::Deserialize;

/// The authentication error object the accounts service returns for rejected token requests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct AuthenticationErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: String,
}

/// The regular error object the Web API returns. The status is nested under the `error` key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct RestApiErrorResponse {
    pub error: RestApiErrorObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct RestApiErrorObject {
    pub status: u16,
    pub message: String,
}

/// The OAuth 2.0 error codes the accounts service uses.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthenticationErrorKind {
    InvalidRequest,
    InvalidClient,
    InvalidGrant,
    UnauthorizedClient,
    UnsupportedGrantType,
    InvalidScope,

    Other(String),
}

impl From<&str> for AuthenticationErrorKind {
    fn from(error: &str) -> Self {
        match error {
            "invalid_request" => Self::InvalidRequest,
            "invalid_client" => Self::InvalidClient,
            "invalid_grant" => Self::InvalidGrant,
            "unauthorized_client" => Self::UnauthorizedClient,
            "unsupported_grant_type" => Self::UnsupportedGrantType,
            "invalid_scope" => Self::InvalidScope,

            other => Self::Other(other.to_owned()),
        }
    }
}
