use giphy_ox::{Giphy, GiphyRequestError, ImageVariant, SearchConfiguration};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn client_for(server: &MockServer) -> Giphy {
    let config = SearchConfiguration::builder()
        .api_base(format!("{}/v1/gifs", server.uri()))
        .api_key("test-key")
        .build();
    Giphy::new(config)
}

#[tokio::test]
async fn sends_all_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("q", "funny cats"))
        .and(query_param("limit", "25"))
        .and(query_param("offset", "0"))
        .and(query_param("rating", "G"))
        .and(query_param("lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "1", "images": {"downsized_large": {"url": "http://x/1.gif"}}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search_images("funny cats")
        .await
        .expect("search should succeed");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "http://x/1.gif");
}

#[tokio::test]
async fn custom_variant_and_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .and(wiremock::matchers::header("user-agent", "giphy-ox-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "1", "images": {"original": {"url": "http://x/original.gif"}}}]
        })))
        .mount(&server)
        .await;

    let client = Giphy::builder()
        .config(
            SearchConfiguration::builder()
                .api_base(format!("{}/v1/gifs", server.uri()))
                .api_key("k")
                .build(),
        )
        .variant(ImageVariant::Original)
        .user_agent("giphy-ox-tests")
        .build();

    let results = client.search_images("x").await.expect("search should succeed");
    assert_eq!(results[0].url, "http://x/original.gif");
}

#[tokio::test]
async fn non_success_status_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "meta": {"status": 401, "msg": "No API key found in request."}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search("cats")
        .await
        .expect_err("401 should fail");

    assert_eq!(err.status(), Some(401));
    assert!(matches!(
        err,
        GiphyRequestError::ApiError { ref message, .. } if message == "No API key found in request."
    ));
}

#[tokio::test]
async fn non_json_body_is_invalid_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search("cats")
        .await
        .expect_err("html body should fail");

    assert!(matches!(err, GiphyRequestError::InvalidJson { ref body, .. } if body.contains("not json")));
}

#[tokio::test]
async fn missing_data_field_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"meta": {"status": 200}})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search_images("cats")
        .await
        .expect_err("missing data should fail");

    assert!(matches!(err, GiphyRequestError::MissingField(_)));
}

/// Base URL on a local port that nothing listens on.
fn closed_port_base() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/v1/gifs")
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let config = SearchConfiguration::builder()
        .api_base(closed_port_base())
        .api_key("test-key")
        .build();
    let client = Giphy::new(config);

    let err = client
        .search("cats")
        .await
        .expect_err("closed port should fail");

    assert!(matches!(err, GiphyRequestError::ReqwestError(_)), "got {err:?}");
    assert_eq!(err.status(), None);
}
