use reqwest::{
    header::{self, HeaderValue},
    Method,
};
use serde_json::json;
use spotibind::{
    client::SpotifyClient,
    error::{BasicError, Error, ErrorBuilder, ErrorKind},
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};
use wiremock::{
    matchers::{body_string, header as header_matcher, method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn client_for(server: &MockServer) -> SpotifyClient {
    SpotifyClient::builder()
        .api_base_url(format!("{}/v1/", server.uri()))
        .token_url(format!("{}/api/token", server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn rejected_status_without_builder_is_basic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/albums/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get("albums/missing").accept([200]).send().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Basic);
    assert_eq!(err.http_status(), Some(404));
    assert!(err.message().contains("404"));
    assert!(err.message().contains("not here"));
}

#[tokio::test]
async fn empty_accept_set_accepts_anything() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/anything"))
        .respond_with(ResponseTemplate::new(418).set_body_string("teapot"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.get("anything").send().await.unwrap();

    assert_eq!(response.status(), 418);
    assert_eq!(response.body(), "teapot");
}

#[tokio::test]
async fn rest_api_error_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "status": 401, "message": "The access token expired" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .get("me")
        .accept([200])
        .error_builder(ErrorBuilder::RestApi)
        .send()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RestApi);
    assert_eq!(err.message(), "The access token expired");

    match err {
        Error::RestApi(err) => {
            assert_eq!(err.http_status(), 401);
            assert_eq!(err.status(), 401);
            assert!(err.is_token_expired());
        }
        other => panic!("expected a REST API error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_rest_api_error_degrades_to_basic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .get("me")
        .accept([200])
        .error_builder(ErrorBuilder::RestApi)
        .send()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Basic);
}

#[tokio::test]
async fn unsupported_method_is_refused_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.request(Method::PATCH, "me").send().await.unwrap_err();

    assert!(matches!(err, Error::Basic(BasicError::UnsupportedMethod(_))));
}

#[tokio::test]
async fn method_is_checked_before_path() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let err = client.request(Method::PATCH, "http://[::1").send().await.unwrap_err();

    assert!(matches!(err, Error::Basic(BasicError::UnsupportedMethod(_))));
}

#[tokio::test]
async fn truncated_body_is_transport_error_with_status() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buffer = [0; 4096];
        let _ = socket.read(&mut buffer).await.unwrap();

        // promise more body than is sent, then hang up
        socket
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 100\r\n\r\nshort")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let client = SpotifyClient::builder()
        .api_base_url(format!("http://{address}/v1/"))
        .build()
        .unwrap();
    let err = client.get("me").accept([200]).send().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Basic);
    assert_eq!(err.http_status(), Some(200));
    assert!(matches!(
        err,
        Error::Basic(BasicError::Transport { status: Some(200), .. })
    ));
}

#[tokio::test]
async fn caller_headers_override_baseline() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/me/player/play"))
        .and(header_matcher("accept", "application/json"))
        .and(header_matcher("content-type", "text/plain"))
        .and(body_string("payload"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .put("me/player/play")
        .header(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"))
        .body("payload")
        .accept([204])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn get_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.get("me").body("ignored").accept([200]).send().await.unwrap();
}

#[tokio::test]
async fn token_endpoint_failure_is_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header_matcher("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "Invalid client secret"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .post_authorization(Default::default(), "grant_type=client_credentials".to_owned())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(err.message(), "Invalid client secret");
    assert_eq!(err.http_status(), Some(400));
}
