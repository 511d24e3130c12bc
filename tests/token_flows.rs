use serde_json::json;
use spotibind::{
    client::SpotifyClient,
    error::{AuthenticationErrorKind, Error, ErrorKind},
    token::{AuthToken, PkceRefreshableAuthToken, RefreshableAuthToken, Token},
};
use wiremock::{
    matchers::{body_string_contains, header, method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

// base64("id:secret")
const BASIC_CREDENTIALS: &str = "Basic aWQ6c2VjcmV0";

struct NoAuthorizationHeader;

impl wiremock::Match for NoAuthorizationHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

async fn client_for(server: &MockServer) -> SpotifyClient {
    SpotifyClient::builder()
        .api_base_url(format!("{}/v1/", server.uri()))
        .token_url(format!("{}/api/token", server.uri()))
        .build()
        .unwrap()
}

fn token_response(access_token: &str, token_type: &str, refresh_token: Option<&str>) -> ResponseTemplate {
    let mut body = json!({
        "access_token": access_token,
        "token_type": token_type,
        "expires_in": 3600,
        "scope": "user-read-private user-top-read"
    });

    if let Some(refresh_token) = refresh_token {
        body["refresh_token"] = json!(refresh_token);
    }

    ResponseTemplate::new(200).set_body_json(body)
}

#[tokio::test]
async fn client_credentials_yield_bearer_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", BASIC_CREDENTIALS))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(token_response("abc", "Bearer", None))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let token = AuthToken::new(&client, "id", "secret").await.unwrap();

    assert_eq!(token.authorization(), "Bearer abc");
    assert_eq!(token.expires_in(), 3600);
    assert!(!token.is_expired());
}

#[tokio::test]
async fn non_bearer_token_is_refused() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(token_response("abc", "MAC", None))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = AuthToken::new(&client, "id", "secret").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Basic);
    assert!(err.message().contains("Bearer"));
}

#[tokio::test]
async fn rejected_credentials_are_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "invalid_client" })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = AuthToken::new(&client, "id", "wrong").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(err.message(), "invalid_client");

    match err {
        Error::Authentication(err) => assert_eq!(err.kind(), AuthenticationErrorKind::InvalidClient),
        other => panic!("expected an authentication error, got {other:?}"),
    }
}

#[tokio::test]
async fn authorization_code_exchange_and_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", BASIC_CREDENTIALS))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=the-code"))
        .and(body_string_contains("redirect_uri=http%3A%2F%2Flocalhost%2Fcallback"))
        .respond_with(token_response("first", "Bearer", Some("refresh-1")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", BASIC_CREDENTIALS))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=refresh-1"))
        .respond_with(token_response("second", "Bearer", None))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let mut token = RefreshableAuthToken::new(&client, "the-code", "http://localhost/callback", "id", "secret")
        .await
        .unwrap();

    assert_eq!(token.access_token(), "first");
    assert_eq!(token.refresh_token(), "refresh-1");
    assert_eq!(token.scope(), ["user-read-private", "user-top-read"]);

    let debug = format!("{token:?}");
    assert!(!debug.contains("first"));
    assert!(!debug.contains("refresh-1"));

    token.refresh(&client, "id", "secret").await.unwrap();

    assert_eq!(token.authorization(), "Bearer second");
    // no new refresh token in the response, keep the old one
    assert_eq!(token.refresh_token(), "refresh-1");
}

#[tokio::test]
async fn failed_refresh_leaves_token_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .respond_with(token_response("first", "Bearer", Some("refresh-1")))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(token_response("second", "MAC", Some("refresh-2")))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let mut token = RefreshableAuthToken::new(&client, "the-code", "http://localhost/callback", "id", "secret")
        .await
        .unwrap();
    let before = token.clone();

    let err = token.refresh(&client, "id", "secret").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Basic);
    assert_eq!(token, before);
}

#[tokio::test]
async fn pkce_exchange_sends_verifier_without_secret() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(NoAuthorizationHeader)
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("client_id=id"))
        .and(body_string_contains("code_verifier=verifier"))
        .respond_with(token_response("first", "Bearer", Some("refresh-1")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(NoAuthorizationHeader)
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=refresh-1"))
        .and(body_string_contains("client_id=id"))
        .respond_with(token_response("second", "Bearer", Some("refresh-2")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let mut token = PkceRefreshableAuthToken::new(&client, "the-code", "http://localhost/callback", "id", "verifier")
        .await
        .unwrap();

    assert_eq!(token.refresh_token(), "refresh-1");

    token.refresh(&client, "id").await.unwrap();

    assert_eq!(token.access_token(), "second");
    assert_eq!(token.refresh_token(), "refresh-2");
    assert!(!format!("{token:?}").contains("refresh-2"));
}

#[tokio::test]
async fn pkce_refresh_without_refresh_token_fails_atomically() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .respond_with(token_response("first", "Bearer", Some("refresh-1")))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(token_response("second", "Bearer", None))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let mut token = PkceRefreshableAuthToken::new(&client, "the-code", "http://localhost/callback", "id", "verifier")
        .await
        .unwrap();
    let before = token.clone();

    let err = token.refresh(&client, "id").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Basic);
    assert_eq!(token, before);
}
