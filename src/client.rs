//! The HTTP request core and the endpoint wrappers built on it.
//!
//! [SpotifyClient] owns a single [reqwest::Client] and the base URLs it sends requests to. Cloning it is cheap and
//! every clone shares the same connection pool, so one instance can serve a whole application from any number of
//! tasks. It holds no other mutable state; tokens are passed in per call.
//!
//! Every endpoint wrapper goes through [SpotifyClient::request]: it resolves a relative path against the API base,
//! applies the baseline headers and the caller's headers, sends the request once and checks the response status
//! against the accepted set. A rejected response is turned into an [Error] by the request's [ErrorBuilder].
//!
//! ```no_run
//! # use spotibind::{client::SpotifyClient, error::ErrorBuilder};
//! # use reqwest::header::{self, HeaderValue};
//! # async fn foo() -> spotibind::Result<()> {
//! let client = SpotifyClient::new();
//!
//! let response = client
//!     .get("albums/4aawyAB9vmqN3uQ7FjRGTy")
//!     .header(header::AUTHORIZATION, HeaderValue::from_static("Bearer access token"))
//!     .accept([200])
//!     .error_builder(ErrorBuilder::RestApi)
//!     .send()
//!     .await?;
//!
//! println!("{}", response.body());
//! # Ok(())
//! # }
//! ```

mod album;
mod artist;
mod episode;
mod personalization;
mod profile;

pub use self::{artist::AlbumGroup, personalization::TimeRange};

use const_format::concatcp;
use log::{debug, warn};
use reqwest::{
    header::{self, HeaderMap, HeaderName, HeaderValue},
    Method, Url,
};
use serde::de::DeserializeOwned;

use crate::{
    error::{BasicError, Error, ErrorBuilder, Result},
    token::Token,
    validate::{Collection, Validate, ValidationMode},
};

const API_BASE_URL: &str = "https://api.spotify.com/v1/";

const ACCOUNTS_BASE_URL: &str = "https://accounts.spotify.com/";
const ACCOUNTS_AUTHORIZE_ENDPOINT: &str = concatcp!(ACCOUNTS_BASE_URL, "authorize");
const ACCOUNTS_API_TOKEN_ENDPOINT: &str = concatcp!(ACCOUNTS_BASE_URL, "api/token");

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 50;

/// The status code and the complete body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

/// A client for the Spotify Web API and accounts service. See the [module-level documentation](self).
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http_client: reqwest::Client,
    api_base_url: Url,
    token_url: Url,
    authorize_url: Url,
    validation_mode: ValidationMode,
}

/// Builder for [SpotifyClient].
#[derive(Debug, Default)]
pub struct SpotifyClientBuilder {
    http_client: Option<reqwest::Client>,
    api_base_url: Option<String>,
    token_url: Option<String>,
    authorize_url: Option<String>,
    validation_mode: ValidationMode,
}

/// A single resource request. Created with [SpotifyClient::request] or one of its shorthands.
#[derive(Debug)]
#[must_use = "requests do nothing unless sent"]
pub struct RequestBuilder<'a> {
    client: &'a SpotifyClient,
    method: Method,
    sub_path: String,
    headers: HeaderMap,
    body: Option<String>,
    accepted: Vec<u16>,
    error_builder: ErrorBuilder,
}

impl ApiResponse {
    pub fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }
}

impl Default for SpotifyClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SpotifyClient {
    /// Returns a new client with a default HTTP client and the official Spotify endpoints.
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
            // these are compile-time constants; parsing them cannot fail
            api_base_url: Url::parse(API_BASE_URL).expect("invalid API base URL constant"),
            token_url: Url::parse(ACCOUNTS_API_TOKEN_ENDPOINT).expect("invalid token endpoint constant"),
            authorize_url: Url::parse(ACCOUNTS_AUTHORIZE_ENDPOINT).expect("invalid authorize endpoint constant"),
            validation_mode: ValidationMode::default(),
        }
    }

    pub fn builder() -> SpotifyClientBuilder {
        SpotifyClientBuilder::default()
    }

    /// Returns a copy of this client that validates decoded objects with the given mode.
    ///
    /// The copy shares the underlying HTTP client, so this is cheap enough to do per call.
    pub fn with_validation_mode(&self, validation_mode: ValidationMode) -> Self {
        Self {
            validation_mode,
            ..self.clone()
        }
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.validation_mode
    }

    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    pub fn token_url(&self) -> &Url {
        &self.token_url
    }

    pub fn authorize_url(&self) -> &Url {
        &self.authorize_url
    }

    /// Begin a request to a path relative to the API base URL.
    ///
    /// By default any status code is accepted and no body is sent.
    pub fn request<S>(&self, method: Method, sub_path: S) -> RequestBuilder
    where
        S: Into<String>,
    {
        RequestBuilder {
            client: self,
            method,
            sub_path: sub_path.into(),
            headers: HeaderMap::new(),
            body: None,
            accepted: Vec::new(),
            error_builder: ErrorBuilder::default(),
        }
    }

    pub fn get<S>(&self, sub_path: S) -> RequestBuilder
    where
        S: Into<String>,
    {
        self.request(Method::GET, sub_path)
    }

    pub fn post<S>(&self, sub_path: S) -> RequestBuilder
    where
        S: Into<String>,
    {
        self.request(Method::POST, sub_path)
    }

    pub fn put<S>(&self, sub_path: S) -> RequestBuilder
    where
        S: Into<String>,
    {
        self.request(Method::PUT, sub_path)
    }

    pub fn delete<S>(&self, sub_path: S) -> RequestBuilder
    where
        S: Into<String>,
    {
        self.request(Method::DELETE, sub_path)
    }

    /// POST a form-encoded payload to the token endpoint.
    ///
    /// Only a 200 response is accepted; anything else is decoded as an
    /// [authentication error](crate::error::AuthenticationError).
    pub async fn post_authorization(&self, headers: HeaderMap, form_payload: String) -> Result<ApiResponse> {
        debug!("Posting token request to {}", self.token_url);

        self.execute(
            Method::POST,
            self.token_url.clone(),
            CONTENT_TYPE_FORM,
            headers,
            Some(form_payload),
            &[200],
            ErrorBuilder::Authentication,
        )
        .await
    }

    #[allow(clippy::too_many_arguments)]
    async fn execute(
        &self,
        method: Method,
        url: Url,
        content_type: &'static str,
        headers: HeaderMap,
        body: Option<String>,
        accepted: &[u16],
        error_builder: ErrorBuilder,
    ) -> Result<ApiResponse> {
        ensure_supported_method(&method)?;

        let mut request_headers = HeaderMap::new();
        request_headers.insert(header::ACCEPT, HeaderValue::from_static(CONTENT_TYPE_JSON));
        request_headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));

        // caller headers win on collision
        overlay_headers(&mut request_headers, headers);

        debug!("Sending {method} request to {url}");

        let mut request = self.http_client.request(method.clone(), url).headers(request_headers);
        if method != Method::GET {
            request = request.body(body.unwrap_or_default());
        }

        let response = request
            .send()
            .await
            .map_err(|source| BasicError::Transport { status: None, source })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|source| BasicError::Transport {
            status: Some(status),
            source,
        })?;

        let response = ApiResponse::new(status, body);
        debug!("Got {status} response");

        if accepted.is_empty() || accepted.contains(&status) {
            Ok(response)
        } else {
            warn!("Got {status} response, expected one of {accepted:?}");
            Err(error_builder.build(&response))
        }
    }

    /// GET an object from the API and validate it.
    async fn get_object<T, K>(&self, token: &K, sub_path: String) -> Result<T>
    where
        T: DeserializeOwned + Validate,
        K: Token + ?Sized,
    {
        let response = self.get_authorized(token, sub_path).await?;
        let object: T = serde_json::from_str(response.body())?;

        object.validate(self.validation_mode)?;
        Ok(object)
    }

    /// GET a list of objects wrapped in a JSON object and validate them, keeping the items if validation fails.
    async fn get_collection<W, T, K>(&self, token: &K, sub_path: String) -> Result<Collection<T>>
    where
        W: DeserializeOwned + Into<Vec<T>>,
        T: Validate,
        K: Token + ?Sized,
    {
        let response = self.get_authorized(token, sub_path).await?;
        let wrapper: W = serde_json::from_str(response.body())?;
        let collection = Collection::validated(wrapper.into(), self.validation_mode);

        if let Some(err) = collection.validation_error() {
            warn!("Collection response failed validation: {err}");
        }

        Ok(collection)
    }

    async fn get_authorized<K>(&self, token: &K, sub_path: String) -> Result<ApiResponse>
    where
        K: Token + ?Sized,
    {
        self.get(sub_path)
            .authorization(token)?
            .accept([200])
            .error_builder(ErrorBuilder::RestApi)
            .send()
            .await
    }
}

impl SpotifyClientBuilder {
    /// Use the given HTTP client. Timeouts, proxies and other transport settings are configured on it.
    pub fn http_client(self, http_client: reqwest::Client) -> Self {
        Self {
            http_client: Some(http_client),
            ..self
        }
    }

    /// Override the base URL resource paths are resolved against. Should end with a slash.
    pub fn api_base_url<S>(self, api_base_url: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            api_base_url: Some(api_base_url.into()),
            ..self
        }
    }

    /// Override the token endpoint URL.
    pub fn token_url<S>(self, token_url: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            token_url: Some(token_url.into()),
            ..self
        }
    }

    /// Override the authorize endpoint URL users are directed to.
    pub fn authorize_url<S>(self, authorize_url: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            authorize_url: Some(authorize_url.into()),
            ..self
        }
    }

    /// Set the mode decoded objects are validated with. Defaults to [ValidationMode::Lenient].
    pub fn validation_mode(self, validation_mode: ValidationMode) -> Self {
        Self {
            validation_mode,
            ..self
        }
    }

    /// Finalize the builder. Fails if any of the overridden URLs is invalid.
    pub fn build(self) -> Result<SpotifyClient> {
        let defaults = SpotifyClient::new();

        Ok(SpotifyClient {
            http_client: self.http_client.unwrap_or(defaults.http_client),
            api_base_url: parse_or(self.api_base_url, defaults.api_base_url)?,
            token_url: parse_or(self.token_url, defaults.token_url)?,
            authorize_url: parse_or(self.authorize_url, defaults.authorize_url)?,
            validation_mode: self.validation_mode,
        })
    }
}

impl<'a> RequestBuilder<'a> {
    /// Set a header, replacing any earlier value of the same header. Caller headers override the baseline `Accept`
    /// and `Content-Type` headers.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set several headers at once, replacing earlier values of the same headers. Every value of a multi-valued
    /// header is kept.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        overlay_headers(&mut self.headers, headers);
        self
    }

    /// Set the `Authorization` header from a token.
    pub fn authorization<K>(self, token: &K) -> Result<Self>
    where
        K: Token + ?Sized,
    {
        let value = HeaderValue::from_str(&token.authorization())
            .map_err(|err| Error::basic(format!("Invalid authorization header value: {err}")))?;

        Ok(self.header(header::AUTHORIZATION, value))
    }

    /// Set the JSON payload. Ignored for GET requests.
    pub fn body<S>(self, body: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            body: Some(body.into()),
            ..self
        }
    }

    /// Set the status codes considered successful. An empty set accepts every status.
    pub fn accept<I>(self, accepted: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        Self {
            accepted: accepted.into_iter().collect(),
            ..self
        }
    }

    /// Set how a rejected response is turned into an error. Defaults to [ErrorBuilder::Basic].
    pub fn error_builder(self, error_builder: ErrorBuilder) -> Self {
        Self { error_builder, ..self }
    }

    /// Send the request.
    pub async fn send(self) -> Result<ApiResponse> {
        ensure_supported_method(&self.method)?;
        let url = self.client.api_base_url.join(&self.sub_path)?;

        self.client
            .execute(
                self.method,
                url,
                CONTENT_TYPE_JSON,
                self.headers,
                self.body,
                &self.accepted,
                self.error_builder,
            )
            .await
    }
}

fn ensure_supported_method(method: &Method) -> Result<()> {
    if [Method::GET, Method::POST, Method::PUT, Method::DELETE].contains(method) {
        Ok(())
    } else {
        Err(BasicError::UnsupportedMethod(method.clone()).into())
    }
}

/// Copies the headers in `source` over `target`, dropping the values `target` had for the same names.
fn overlay_headers(target: &mut HeaderMap, source: HeaderMap) {
    let mut current = None;

    // the iterator yields a name only for the first value of a multi-valued header
    for (name, value) in source {
        if let Some(name) = name {
            target.remove(&name);
            current = Some(name);
        }

        if let Some(name) = &current {
            target.append(name.clone(), value);
        }
    }
}

fn parse_or(url: Option<String>, default: Url) -> Result<Url> {
    match url {
        Some(url) => Ok(Url::parse(&url)?),
        None => Ok(default),
    }
}

/// Resolves an optional page size to the value sent to the API.
fn page_limit(limit: Option<u32>) -> Result<String> {
    match limit {
        None => Ok(DEFAULT_LIMIT.to_string()),
        Some(limit) if (1..=MAX_LIMIT).contains(&limit) => Ok(limit.to_string()),
        Some(limit) => Err(Error::basic(format!(
            "Limit has to be between 1 and {MAX_LIMIT}, got {limit}"
        ))),
    }
}

fn ensure_id_count(ids: &[&str], max: usize, what: &str) -> Result<()> {
    if ids.len() > max {
        Err(Error::basic(format!("{what} cannot be longer than {max}, got {}", ids.len())))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints() {
        let client = SpotifyClient::new();

        assert_eq!(client.api_base_url().as_str(), "https://api.spotify.com/v1/");
        assert_eq!(client.token_url().as_str(), "https://accounts.spotify.com/api/token");
        assert_eq!(client.authorize_url().as_str(), "https://accounts.spotify.com/authorize");
        assert_eq!(client.validation_mode(), ValidationMode::Lenient);
    }

    #[test]
    fn sub_paths_resolve_under_version_prefix() {
        let client = SpotifyClient::new();
        let url = client.api_base_url().join("albums/x?market=FI").unwrap();

        assert_eq!(url.as_str(), "https://api.spotify.com/v1/albums/x?market=FI");
    }

    #[test]
    fn builder_rejects_invalid_urls() {
        assert!(SpotifyClient::builder().token_url("not a url").build().is_err());
    }

    #[test]
    fn validation_mode_copy_leaves_original() {
        let client = SpotifyClient::new();
        let strict = client.with_validation_mode(ValidationMode::Strict);

        assert_eq!(strict.validation_mode(), ValidationMode::Strict);
        assert_eq!(client.validation_mode(), ValidationMode::Lenient);
    }

    #[test]
    fn page_limit_defaults_and_bounds() {
        assert_eq!(page_limit(None).unwrap(), "20");
        assert_eq!(page_limit(Some(50)).unwrap(), "50");
        assert!(page_limit(Some(0)).is_err());
        assert!(page_limit(Some(51)).is_err());
    }

    #[test]
    fn overlay_keeps_every_value_of_a_header() {
        let mut target = HeaderMap::new();
        target.insert(header::ACCEPT, HeaderValue::from_static(CONTENT_TYPE_JSON));
        target.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let mut source = HeaderMap::new();
        source.append(header::ACCEPT, HeaderValue::from_static("text/plain"));
        source.append(header::ACCEPT, HeaderValue::from_static("text/html"));

        overlay_headers(&mut target, source);

        let accept = target.get_all(header::ACCEPT).iter().collect::<Vec<_>>();
        assert_eq!(accept, ["text/plain", "text/html"]);
        assert_eq!(target.get(header::CACHE_CONTROL).unwrap(), "no-cache");
    }

    #[test]
    fn headers_builder_keeps_multiple_values() {
        let client = SpotifyClient::new();

        let mut headers = HeaderMap::new();
        headers.append("x-trace", HeaderValue::from_static("a"));
        headers.append("x-trace", HeaderValue::from_static("b"));

        let request = client
            .get("me")
            .header(HeaderName::from_static("x-trace"), HeaderValue::from_static("old"))
            .headers(headers);

        assert_eq!(request.headers.get_all("x-trace").iter().count(), 2);
    }

    #[test]
    fn only_four_methods_are_supported() {
        assert!(ensure_supported_method(&Method::DELETE).is_ok());
        assert!(matches!(
            ensure_supported_method(&Method::PATCH),
            Err(Error::Basic(BasicError::UnsupportedMethod(_)))
        ));
    }

    #[test]
    fn id_count_is_bounded() {
        assert!(ensure_id_count(&["a"; 20], 20, "album IDs").is_ok());
        assert!(ensure_id_count(&["a"; 21], 20, "album IDs").is_err());
    }
}
