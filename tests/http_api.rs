//! HTTP API tests against the in-process router.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use layout_routes::http::{build_router, AppState};
use layout_routes::routes::{load_routes, RouteEntry, RouteTable};

mod common;

fn router_with(table: RouteTable, base: &str) -> (axum::Router, AppState) {
    let state = AppState::new(table, base);
    (build_router(state.clone(), Duration::from_secs(5)), state)
}

#[tokio::test]
async fn test_routes_endpoint_returns_layout_data() {
    let (router, _) = router_with(load_routes(), "/");

    let (status, json) = common::get_json(&router, "/routes").await;
    assert_eq!(status, StatusCode::OK);

    let routes = json["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 7);
    assert_eq!(
        routes[0],
        serde_json::json!({ "id": "chat", "pathname": "[chatId]", "disabled": false })
    );
    assert_eq!(
        routes[6],
        serde_json::json!({ "id": "admin", "pathname": "admin", "disabled": false })
    );
}

#[tokio::test]
async fn test_routes_endpoint_is_stable() {
    let (router, _) = router_with(load_routes(), "/");
    let (_, first) = common::get_json(&router, "/routes").await;
    let (_, second) = common::get_json(&router, "/routes").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_route_by_id() {
    let (router, _) = router_with(load_routes(), "/");

    let (status, json) = common::get_json(&router, "/routes/library").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["pathname"], "library");

    let (status, json) = common::get_json(&router, "/routes/settings").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "unknown route id: settings");
}

#[tokio::test]
async fn test_active_route_lookup() {
    let (router, _) = router_with(load_routes(), "/");

    let (status, json) = common::get_json(&router, "/routes/active?path=/notes/123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "notes");

    let (status, json) = common::get_json(&router, "/routes/active?path=/a1b2c3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "chat");

    let (status, _) = common::get_json(&router, "/routes/active?path=/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::get_json(&router, "/routes/active").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_active_route_ignores_query_and_fragment() {
    let (router, _) = router_with(load_routes(), "/");

    let (status, json) =
        common::get_json(&router, "/routes/active?path=/notes%3Ftab%3D1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "notes");

    let (status, json) = common::get_json(&router, "/routes/active?path=/tools%23x").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "tools");
}

#[tokio::test]
async fn test_every_configured_id_is_addressable() {
    let (router, state) = router_with(load_routes(), "/");

    for id in state.table().ids() {
        let (status, json) = common::get_json(&router, &format!("/routes/{id}")).await;
        assert_eq!(status, StatusCode::OK, "route {id}");
        assert_eq!(json["id"], id);
    }
}

#[tokio::test]
async fn test_active_route_respects_base_path() {
    let table = RouteTable::from_entries(vec![
        RouteEntry::new("home", ""),
        RouteEntry::new("tools", "tools"),
    ])
    .unwrap();
    let (router, _) = router_with(table, "/app");

    let (_, json) = common::get_json(&router, "/routes/active?path=/app/tools").await;
    assert_eq!(json["id"], "tools");

    let (_, json) = common::get_json(&router, "/routes/active?path=/app").await;
    assert_eq!(json["id"], "home");

    let (status, _) = common::get_json(&router, "/routes/active?path=/tools").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_replaced_table_is_served() {
    let (router, state) = router_with(load_routes(), "/");

    let next = RouteTable::from_entries(vec![
        RouteEntry::new("chat", "[chatId]"),
        RouteEntry::new("admin", "admin").with_disabled(true),
    ])
    .unwrap();
    state.replace_table(next);

    let (_, json) = common::get_json(&router, "/routes").await;
    let routes = json["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[1]["disabled"], true);
}

#[tokio::test]
async fn test_health_and_request_id() {
    let (router, _) = router_with(load_routes(), "/");

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}
