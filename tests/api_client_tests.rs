//! Integration tests for the blocking API client.
//!
//! These tests run the client against a wiremock server and verify body
//! decoding, API error mapping, partial-update payloads and cookie
//! persistence across client instances.

use serde_json::json;
use std::path::Path;
use vexo_store::clients::{HttpMethod, ResponseBody};
use vexo_store::resources::{
    BrandUpdate, FieldUpdate, ListParams, ProductStatus, ProductUpdate, VariantUpdate,
};
use vexo_store::{ApiClient, BaseUrl, Credentials, HttpError, StoreConfig};
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Creates a client for the mock server, optionally persisting cookies.
fn create_client(uri: &str, cookie_file: Option<&Path>) -> ApiClient {
    let config = StoreConfig::builder()
        .base_url(BaseUrl::new(uri).unwrap())
        .maybe_cookie_file(cookie_file.map(Path::to_path_buf))
        .verbose(false)
        .build()
        .unwrap();
    ApiClient::new(&config).unwrap()
}

/// Runs blocking client code off the async test runtime.
async fn blocking<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

// ============================================================================
// Response bodies
// ============================================================================

#[tokio::test]
async fn test_json_and_text_bodies_are_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": "a@b.c"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_string("bye"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/brands/b1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let client = create_client(&uri, None);

        let me = client.auth().me().unwrap();
        assert_eq!(me.get("email"), Some(&json!("a@b.c")));

        let logout = client.auth().logout().unwrap();
        assert_eq!(logout, ResponseBody::Text("bye".to_string()));

        let deleted = client.brands().delete("b1").unwrap();
        assert_eq!(deleted.as_text(), Some(""));
    })
    .await;
}

#[tokio::test]
async fn test_requests_send_json_accept_and_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .and(header("accept", "application/json"))
        .respond_with(|req: &Request| {
            let agent = req
                .headers
                .get("user-agent")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            ResponseTemplate::new(200).set_body_json(json!({"agent": agent}))
        })
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let client = create_client(&uri, None);
        let body = client.cart().get().unwrap();
        let agent = body.get("agent").and_then(|v| v.as_str()).unwrap();
        assert!(agent.starts_with("vexo-store-client v"));
    })
    .await;
}

#[tokio::test]
async fn test_list_params_are_sent_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/brands"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "5"))
        .and(query_param("q", "orb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [], "total": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let client = create_client(&uri, None);
        let body = client
            .brands()
            .list(&ListParams::page(2, 5).with_query("orb"))
            .unwrap();
        assert!(body.items().is_empty());
    })
    .await;
}

// ============================================================================
// API errors
// ============================================================================

#[tokio::test]
async fn test_non_2xx_becomes_api_error_with_status_and_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/brands/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not found"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let client = create_client(&uri, None);

        let error = client.brands().get("missing").unwrap_err();
        let api = error.as_api().unwrap();
        assert_eq!(api.status, 404);
        assert_eq!(api.method, HttpMethod::Get);
        assert_eq!(api.path, "/api/admin/brands/missing");
        assert!(api.is_not_found());
        assert!(!api.is_conflict());
        assert!(error.to_string().contains("404"));

        let error = client.orders().stats().unwrap_err();
        let api = error.as_api().unwrap();
        assert!(api.is_unauthorized());
        assert_eq!(api.body, ResponseBody::Text("Unauthorized".to_string()));
    })
    .await;
}

#[tokio::test]
async fn test_conflict_is_detected_from_code_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/coupons"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "SLUG_EXISTS"})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/coupons/c1"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "Slug already exists"})),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let client = create_client(&uri, None);

        let error = client.coupons().create(json!({"code": "SAVE10"})).unwrap_err();
        assert_eq!(error.as_api().unwrap().error_code(), Some("SLUG_EXISTS"));
        assert!(error.is_conflict());

        let error = client
            .coupons()
            .update("c1", json!({"code": "SAVE10"}))
            .unwrap_err();
        assert!(error.is_conflict());
    })
    .await;
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    let result = blocking(|| create_client("http://127.0.0.1:9", None).auth().me()).await;

    let error = result.unwrap_err();
    assert!(matches!(error, HttpError::Network(_)));
    assert!(error.as_api().is_none());
}

// ============================================================================
// Partial updates
// ============================================================================

#[tokio::test]
async fn test_partial_updates_send_only_touched_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/brands/b1"))
        .and(body_json(json!({"website": "https://orbit.example", "logoUrl": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "b1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/products/p1"))
        .and(body_json(json!({"status": "ARCHIVED", "categoryIds": []})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/variants/v1"))
        .and(body_json(json!({"priceCents": 1999, "compareAtCents": null, "trackInventory": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "v1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/categories/c1"))
        .and(body_string("{}"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "c1"})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let client = create_client(&uri, None);

        client
            .brands()
            .update(
                "b1",
                &BrandUpdate {
                    website: FieldUpdate::Set("https://orbit.example".to_string()),
                    logo_url: FieldUpdate::Clear,
                    ..Default::default()
                },
            )
            .unwrap();

        client
            .products()
            .update(
                "p1",
                &ProductUpdate {
                    status: FieldUpdate::Set(ProductStatus::Archived),
                    category_ids: FieldUpdate::Set(Vec::new()),
                    ..Default::default()
                },
            )
            .unwrap();

        client
            .variants()
            .update(
                "v1",
                &VariantUpdate {
                    price_cents: FieldUpdate::Set(1999),
                    compare_at_cents: FieldUpdate::Clear,
                    track_inventory: FieldUpdate::Set(false),
                    ..Default::default()
                },
            )
            .unwrap();

        client
            .categories()
            .update("c1", &Default::default())
            .unwrap();
    })
    .await;
}

#[tokio::test]
async fn test_stock_changes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/variants/v1/stock"))
        .and(body_json(json!({"onHand": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"onHand": 10})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/variants/v1/stock"))
        .and(body_json(json!({"delta": -3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"onHand": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let client = create_client(&uri, None);
        client.variants().set_stock("v1", 10).unwrap();
        let body = client.variants().adjust_stock("v1", -3).unwrap();
        assert_eq!(body.get("onHand"), Some(&json!(7)));
    })
    .await;
}

// ============================================================================
// Cookie persistence
// ============================================================================

#[tokio::test]
async fn test_session_cookie_survives_a_new_client() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc; Path=/; HttpOnly")
                .set_body_json(json!({"ok": true})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": "admin@local.test"})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let dir = tempfile::tempdir().unwrap();
        let cookie_file = dir.path().join("admin.cookies");

        let first = create_client(&uri, Some(&cookie_file));
        first
            .auth()
            .login(&Credentials::new("admin@local.test", "admin123!").unwrap())
            .unwrap();
        assert!(cookie_file.exists());
        drop(first);

        let second = create_client(&uri, Some(&cookie_file));
        let me = second.auth().me().unwrap();
        assert_eq!(me.get("email"), Some(&json!("admin@local.test")));
    })
    .await;
}

#[tokio::test]
async fn test_corrupt_cookie_file_starts_unauthenticated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(|req: &Request| {
            if req.headers.contains_key("cookie") {
                ResponseTemplate::new(200).set_body_json(json!({"email": "x"}))
            } else {
                ResponseTemplate::new(401).set_body_json(json!({"error": "Unauthorized"}))
            }
        })
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let dir = tempfile::tempdir().unwrap();
        let cookie_file = dir.path().join("cart.cookies");
        std::fs::write(&cookie_file, "not json").unwrap();

        let client = create_client(&uri, Some(&cookie_file));
        assert!(client.cookie_jar().is_empty());

        let error = client.auth().me().unwrap_err();
        assert!(error.as_api().unwrap().is_unauthorized());
    })
    .await;
}
