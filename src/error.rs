//! The error type every fallible operation in this crate returns.
//!
//! Errors come in three kinds, see [ErrorKind]:
//!
//! - [Basic](Error::Basic): anything that went wrong locally or on the wire. Malformed URLs, transport failures, JSON
//!   decode failures, unexpected status codes without a more specific builder and failed validations.
//! - [Authentication](Error::Authentication): the accounts service rejected a token request.
//! - [RestApi](Error::RestApi): the Web API rejected a resource request.
//!
//! Callers usually switch on [Error::kind] to decide whether to re-authenticate, treat the failure as a documented API
//! rejection or treat it as an internal condition.

use std::fmt::Display;

use thiserror::Error;

pub use crate::model::error::AuthenticationErrorKind;

use crate::{
    client::ApiResponse,
    model::error::{AuthenticationErrorResponse, RestApiErrorResponse},
};

pub type Result<T> = std::result::Result<T, Error>;

/// The kind of an [Error].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Basic,
    Authentication,
    RestApi,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Basic(#[from] BasicError),

    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    #[error(transparent)]
    RestApi(#[from] RestApiError),
}

/// A local, transport, decode or validation failure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BasicError {
    #[error("{0}")]
    Message(String),

    #[error("Unsupported HTTP method {0}")]
    UnsupportedMethod(reqwest::Method),

    #[error("Got HTTP code {status} instead of an accepted status, response body: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("HTTP transport failed: {source}")]
    Transport {
        /// The status code received before the failure, if the response got that far.
        status: Option<u16>,
        source: reqwest::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error("Invalid {field} in {object}: {reason}")]
    Validation {
        object: &'static str,
        field: &'static str,
        reason: String,
    },

    #[error("The given state does not match the original state")]
    StateMismatch,
}

/// The accounts service rejected a token request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Authentication failed with HTTP {http_status}: {error}: {error_description}")]
pub struct AuthenticationError {
    http_status: u16,
    error: String,
    error_description: String,
}

/// The Web API rejected a resource request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("REST API error {status}: {message}")]
pub struct RestApiError {
    http_status: u16,
    status: u16,
    message: String,
}

/// Selects how a rejected response is turned into an [Error].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorBuilder {
    /// Synthesize a [BasicError::UnexpectedStatus] carrying the status and the raw body.
    #[default]
    Basic,
    /// Decode the body as an authentication error object. Used for the token endpoint.
    Authentication,
    /// Decode the body as a regular error object. Used for resource endpoints.
    RestApi,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Basic => write!(f, "BasicError"),
            ErrorKind::Authentication => write!(f, "AuthenticationError"),
            ErrorKind::RestApi => write!(f, "RestAPIError"),
        }
    }
}

impl Error {
    /// Returns a new basic error with the given message.
    pub fn basic<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self::Basic(BasicError::Message(message.into()))
    }

    pub(crate) fn validation<S>(object: &'static str, field: &'static str, reason: S) -> Self
    where
        S: Into<String>,
    {
        Self::Basic(BasicError::Validation {
            object,
            field,
            reason: reason.into(),
        })
    }

    /// Build an authentication error from a rejected token endpoint response.
    ///
    /// If the body isn't a valid authentication error object, returns a basic error wrapping the decode failure
    /// instead.
    pub fn from_authentication_response(response: &ApiResponse) -> Self {
        match serde_json::from_str::<AuthenticationErrorResponse>(response.body()) {
            Ok(decoded) => Self::Authentication(AuthenticationError {
                http_status: response.status(),
                error: decoded.error,
                error_description: decoded.error_description,
            }),

            Err(err) => Self::Basic(BasicError::Json(err)),
        }
    }

    /// Build a REST API error from a rejected resource endpoint response.
    ///
    /// If the body isn't a valid error object, returns a basic error wrapping the decode failure instead.
    pub fn from_rest_api_response(response: &ApiResponse) -> Self {
        match serde_json::from_str::<RestApiErrorResponse>(response.body()) {
            Ok(decoded) => Self::RestApi(RestApiError {
                http_status: response.status(),
                status: decoded.error.status,
                message: decoded.error.message,
            }),

            Err(err) => Self::Basic(BasicError::Json(err)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Basic(_) => ErrorKind::Basic,
            Error::Authentication(_) => ErrorKind::Authentication,
            Error::RestApi(_) => ErrorKind::RestApi,
        }
    }

    /// A human-readable message describing the error.
    pub fn message(&self) -> String {
        match self {
            Error::Basic(basic) => basic.to_string(),
            Error::Authentication(auth) => auth.message().to_owned(),
            Error::RestApi(rest) => rest.message().to_owned(),
        }
    }

    /// The HTTP status code associated with this error, if there is one.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Error::Basic(BasicError::UnexpectedStatus { status, .. }) => Some(*status),
            Error::Basic(BasicError::Transport { status, .. }) => *status,
            Error::Basic(_) => None,
            Error::Authentication(auth) => Some(auth.http_status),
            Error::RestApi(rest) => Some(rest.http_status),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Basic(BasicError::Json(err))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Basic(BasicError::Url(err))
    }
}

impl AuthenticationError {
    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    /// The raw `error` field of the response.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn error_description(&self) -> &str {
        &self.error_description
    }

    /// The `error` field parsed into a known OAuth error kind.
    pub fn kind(&self) -> AuthenticationErrorKind {
        AuthenticationErrorKind::from(self.error.as_str())
    }

    fn message(&self) -> &str {
        if self.error_description.is_empty() {
            &self.error
        } else {
            &self.error_description
        }
    }
}

impl RestApiError {
    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    /// The status code reported inside the error object.
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_token_expired(&self) -> bool {
        self.message == "The access token expired"
    }

    pub fn is_permissions_missing(&self) -> bool {
        self.message == "Permissions missing"
    }
}

impl ErrorBuilder {
    /// Turn a rejected response into an error.
    pub fn build(self, response: &ApiResponse) -> Error {
        match self {
            ErrorBuilder::Basic => Error::Basic(BasicError::UnexpectedStatus {
                status: response.status(),
                body: response.body().to_owned(),
            }),
            ErrorBuilder::Authentication => Error::from_authentication_response(response),
            ErrorBuilder::RestApi => Error::from_rest_api_response(response),
        }
    }
}
