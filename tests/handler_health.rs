mod common;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_route_wins_over_code_route() {
    let (server, repo) = common::create_test_server();
    repo.insert("health", "https://example.com").await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert!(response.json::<serde_json::Value>().get("checks").is_some());
}

#[tokio::test]
async fn test_health_endpoint_store_down() {
    let server = common::create_unreachable_store_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

