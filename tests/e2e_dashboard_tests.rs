//! End-to-end tests for the dashboard endpoints
//!
//! Covers the chart payload, the page shell and the status endpoint, all
//! served over the fixture tables.

mod common;

use common::{
    TestServer, FIXTURE_GENRES, MICHAEL_MANN, TOM_HANKS, TOP_KEYWORD, TOP_KEYWORD_COUNT,
};
use reqwest::StatusCode;
use serde_json::Value;

fn keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .expect("expected an object")
        .keys()
        .map(String::as_str)
        .collect()
}

// =============================================================================
// Chart payload
// =============================================================================

#[tokio::test]
async fn test_get_graphs_returns_every_panel() {
    let server = TestServer::spawn().await;

    let graphs = server.get_json("/get_graphs").await;

    let mut panels = keys(&graphs);
    panels.sort();
    assert_eq!(
        panels,
        vec![
            "genre_panel1",
            "genre_panel3",
            "genre_panel5",
            "panel1",
            "panel2",
            "panel3",
            "panel4",
            "panel5"
        ]
    );
    for panel in ["panel1", "panel2", "panel3", "panel4", "panel5"] {
        assert!(graphs[panel]["data"].is_array(), "{} has no data", panel);
        assert_eq!(graphs[panel]["layout"]["paper_bgcolor"], "#1f2833");
    }
}

#[tokio::test]
async fn test_genre_panels_cover_every_genre() {
    let server = TestServer::spawn().await;

    let graphs = server.get_json("/get_graphs").await;

    for panel in ["genre_panel1", "genre_panel5", "genre_panel3"] {
        assert_eq!(keys(&graphs[panel]), FIXTURE_GENRES.to_vec());
    }

    // Amelie has neither credits, keywords nor revenue
    for panel in ["genre_panel1", "genre_panel5", "genre_panel3"] {
        assert_eq!(graphs[panel]["Adventure"]["data"], Value::Array(vec![]));
    }
    assert_eq!(graphs["genre_panel5"]["Animation"]["data"][0]["type"], "sunburst");
}

#[tokio::test]
async fn test_keyword_panel_counts_genre_keyword_pairs() {
    let server = TestServer::spawn().await;

    let graphs = server.get_json("/get_graphs").await;

    let bar = &graphs["panel1"]["data"][0];
    assert_eq!(bar["type"], "bar");
    assert_eq!(bar["orientation"], "h");
    assert_eq!(bar["y"][0], TOP_KEYWORD);
    assert_eq!(bar["x"][0], TOP_KEYWORD_COUNT);
    // the malformed keyword list of Amelie contributes nothing
    assert!(!bar["y"]
        .as_array()
        .unwrap()
        .iter()
        .any(|keyword| keyword == "paris"));
}

#[tokio::test]
async fn test_director_panel_uses_first_listed_director() {
    let server = TestServer::spawn().await;

    let graphs = server.get_json("/get_graphs").await;

    let scatter = &graphs["panel2"]["data"][0];
    assert_eq!(scatter["type"], "scatter");
    assert_eq!(scatter["text"], serde_json::json!(["John Lasseter", MICHAEL_MANN]));
    assert_eq!(scatter["y"], serde_json::json!([7.5, 7.7]));
}

#[tokio::test]
async fn test_map_and_sunburst_panels() {
    let server = TestServer::spawn().await;

    let graphs = server.get_json("/get_graphs").await;

    let map = graphs["panel4"]["data"].as_array().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map[0]["name"], "1-10");
    assert_eq!(
        map[0]["locations"],
        serde_json::json!(["United States of America", "France", "United Kingdom"])
    );
    assert_eq!(map[0]["customdata"], serde_json::json!([3, 1, 1]));

    let sunburst = &graphs["panel5"]["data"][0];
    let labels: Vec<&str> = sunburst["labels"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(labels.contains(&TOM_HANKS));
    // duplicate credits rows: the first one wins
    assert!(!labels.contains(&"Someone Else"));
}

#[tokio::test]
async fn test_get_graphs_is_stable_across_requests() {
    let server = TestServer::spawn().await;

    let first = server.get("/get_graphs").await.text().await.unwrap();
    let second = server.get("/get_graphs").await.text().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_first_requests_agree() {
    let server = TestServer::spawn().await;

    let (a, b, c) = tokio::join!(
        server.get_json("/get_graphs"),
        server.get_json("/get_graphs"),
        server.get_json("/get_graphs"),
    );

    assert_eq!(a, b);
    assert_eq!(b, c);
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_missing_tables_answer_500_until_they_appear() {
    let server = TestServer::spawn_without_data().await;

    let response = server.get("/get_graphs").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().await.unwrap().contains("movies"));

    let status = server.get_json("/status").await;
    assert_eq!(status["graphs_ready"], false);

    server.install_tables();

    let graphs = server.get_json("/get_graphs").await;
    assert_eq!(keys(&graphs["genre_panel1"]), FIXTURE_GENRES.to_vec());
}

// =============================================================================
// Page shell and status
// =============================================================================

#[tokio::test]
async fn test_home_serves_dashboard_page() {
    let server = TestServer::spawn().await;

    let response = server.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/html"));
    let page = response.text().await.unwrap();
    assert!(page.contains("plotly"));
    assert!(page.contains("/get_graphs"));
}

#[tokio::test]
async fn test_status_reports_readiness() {
    let server = TestServer::spawn().await;

    let status = server.get_json("/status").await;
    assert_eq!(status["graphs_ready"], false);
    assert!(status["uptime"].as_str().unwrap().starts_with("0d "));
    assert!(status["hash"].is_string());

    server.get_json("/get_graphs").await;

    let status = server.get_json("/status").await;
    assert_eq!(status["graphs_ready"], true);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let server = TestServer::spawn().await;

    let response = server.get("/v1/nothing").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
