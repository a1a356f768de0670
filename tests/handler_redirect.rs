mod common;

use serde_json::json;

#[tokio::test]
async fn test_redirect_success() {
    let (server, repo) = common::create_test_server();
    repo.insert("aB3xQ9", "https://example.com").await;

    let response = server.get("/aB3xQ9").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/zzzzzz").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "zzzzzz");
}

#[tokio::test]
async fn test_redirect_unknown_long_code() {
    let (server, _repo) = common::create_test_server();

    server.get("/doesNotExist").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_empty_value_is_not_found() {
    let (server, repo) = common::create_test_server();
    repo.insert("empty1", "").await;

    server.get("/empty1").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let (server, repo) = common::create_test_server();
    repo.insert("AbCdEf", "https://example.com").await;

    server.get("/abcdef").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_does_not_validate_target() {
    let (server, repo) = common::create_test_server();
    repo.insert("rel123", "not-a-url").await;

    let response = server.get("/rel123").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "not-a-url");
}

#[tokio::test]
async fn test_shorten_then_redirect_round_trip() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "long_url": "https://example.com/some/long/path?q=1" }))
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();

    let redirect = server.get(short_url).await;

    assert_eq!(redirect.status_code(), 302);
    assert_eq!(
        redirect.header("location"),
        "https://example.com/some/long/path?q=1"
    );
}

#[tokio::test]
async fn test_two_links_resolve_independently() {
    let (server, _repo) = common::create_test_server();

    let mut paths = Vec::new();
    for url in ["https://one.example", "https://two.example"] {
        let json = server
            .post("/shorten")
            .json(&json!({ "long_url": url }))
            .await
            .json::<serde_json::Value>();
        paths.push((json["short_url"].as_str().unwrap().to_string(), url));
    }

    for (path, url) in paths {
        let response = server.get(&path).await;
        assert_eq!(response.status_code(), 302);
        assert_eq!(response.header("location"), url);
    }
}

#[tokio::test]
async fn test_redirect_encodes_control_characters() {
    let (server, repo) = common::create_test_server();
    repo.insert("nl1234", "https://example.com/a\nb").await;

    let response = server.get("/nl1234").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/a%0Ab");
}

#[tokio::test]
async fn test_redirect_encodes_space_and_non_ascii() {
    let (server, repo) = common::create_test_server();
    repo.insert("sp1234", "https://example.com/a b/ü").await;

    let response = server.get("/sp1234").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://example.com/a%20b/%C3%BC"
    );
}

#[tokio::test]
async fn test_shortened_url_with_newline_still_redirects() {
    let (server, _repo) = common::create_test_server();

    let json = server
        .post("/shorten")
        .json(&json!({ "long_url": "https://example.com/x\r\ny" }))
        .await
        .json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();

    let redirect = server.get(short_url).await;

    assert_eq!(redirect.status_code(), 302);
    assert_eq!(redirect.header("location"), "https://example.com/x%0D%0Ay");
}

#[tokio::test]
async fn test_redirect_store_unavailable() {
    let server = common::create_unreachable_store_server();

    let response = server.get("/aB3xQ9").await;

    assert_eq!(response.status_code(), 500);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "store_unavailable");
    assert!(!response.headers().contains_key("location"));
}

