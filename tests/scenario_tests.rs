//! End-to-end flows against a mock store: the brand lifecycle, variant
//! generation, and the scripted admin and storefront scenarios.

use serde_json::{json, Value};
use vexo_store::output::Output;
use vexo_store::resources::{
    id_of, BrandUpdate, FieldUpdate, ListParams, NewBrand, NewOption, NewProduct, Variant,
    VariantGeneration,
};
use vexo_store::scenarios::{self, StorefrontOutcome};
use vexo_store::{ApiClient, BaseUrl, Credentials, StoreConfig};
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(uri: &str) -> ApiClient {
    let config = StoreConfig::builder()
        .base_url(BaseUrl::new(uri).unwrap())
        .verbose(false)
        .build()
        .unwrap();
    ApiClient::new(&config).unwrap()
}

fn admin() -> Credentials {
    Credentials::new("admin@local.test", "admin123!").unwrap()
}

fn variants(count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| json!({"id": format!("v{i}"), "priceCents": 2499, "currency": "EUR"}))
            .collect(),
    )
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc; Path=/")
                .set_body_json(json!({"ok": true})),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"email": "admin@local.test", "role": "ADMIN"})),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_brand_lifecycle_ends_in_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/brands"))
        .and(body_json(json!({"name": "Orbit", "slug": "orbit"})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": "b1", "name": "Orbit", "slug": "orbit"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/brands/b1"))
        .and(body_json(json!({"website": "https://orbit.example"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "b1", "name": "Orbit", "slug": "orbit", "website": "https://orbit.example"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "b1", "name": "Orbit", "slug": "orbit"}],
            "total": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/brands/b1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/brands/b1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not found"})))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let client = create_client(&uri);
        let brands = client.brands();

        let created = brands
            .create(&NewBrand {
                name: "Orbit".to_string(),
                slug: Some("orbit".to_string()),
                ..Default::default()
            })
            .unwrap();
        let id = id_of(&created).unwrap();

        let updated = brands
            .update(
                &id,
                &BrandUpdate {
                    website: FieldUpdate::Set("https://orbit.example".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.get("website"), Some(&json!("https://orbit.example")));

        let listed = brands.list(&ListParams::page(1, 10)).unwrap();
        assert!(listed
            .items()
            .iter()
            .any(|brand| brand["slug"] == json!("orbit")));

        brands.delete(&id).unwrap();

        let error = brands.get(&id).unwrap_err();
        assert!(error.as_api().unwrap().is_not_found());
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn test_two_options_generate_six_variants() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/products"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": "p1", "title": "Tee"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/products/p1/options"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "o1"})))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/products/p1/variants"))
        .and(body_json(json!({
            "mode": "cartesian",
            "priceCents": 2499,
            "currency": "EUR",
            "initialStock": 25
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"created": 6})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/products/p1/variants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(variants(6)))
        .mount(&server)
        .await;

    let uri = server.uri();
    let count = tokio::task::spawn_blocking(move || {
        let client = create_client(&uri);
        let products = client.products();

        let product = products
            .create(&NewProduct {
                title: "Tee".to_string(),
                ..Default::default()
            })
            .unwrap();
        let id = id_of(&product).unwrap();

        products
            .add_option(&id, &NewOption::new("Size", ["S", "M", "L"]))
            .unwrap();
        products
            .add_option(&id, &NewOption::new("Color", ["Black", "White"]))
            .unwrap();
        products
            .generate_variants(
                &id,
                &VariantGeneration::Cartesian {
                    price_cents: 2499,
                    currency: "EUR".to_string(),
                    initial_stock: 25,
                },
            )
            .unwrap();

        let variants: Vec<Variant> = products
            .list_variants(&id)
            .unwrap()
            .decode_items("variant list")
            .unwrap();
        variants.len()
    })
    .await
    .unwrap();

    assert_eq!(count, 6);
}

#[tokio::test]
async fn test_admin_seed_on_empty_store() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/admin/brands"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": "b1", "name": "Orbit", "slug": "orbit"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/categories"))
        .and(body_partial_json(json!({"name": "Women"})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": "c-women", "name": "Women", "slug": "women"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/categories"))
        .and(body_partial_json(json!({"name": "Tops", "parentId": "c-women"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "c-tops", "name": "Tops", "slug": "tops", "parentId": "c-women"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/products"))
        .and(body_partial_json(json!({
            "title": "Athletic Tee",
            "status": "PUBLISHED",
            "skuPrefix": "TEE",
            "brandId": "b1",
            "categoryIds": ["c-tops"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "p1", "title": "Athletic Tee", "slug": "athletic-tee"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/products/p1/options"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/products/p1/options"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "o"})))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/products/p1/variants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/products/p1/variants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(variants(6)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/products/p1/variants"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"created": 6})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let report = tokio::task::spawn_blocking(move || {
        let mut out = Output::new(Vec::new());
        scenarios::admin_seed(&create_client(&uri), &admin(), &mut out).unwrap()
    })
    .await
    .unwrap();

    assert_eq!(report.brand_id, "b1");
    assert_eq!(report.women_id, "c-women");
    assert_eq!(report.tops_id, "c-tops");
    assert_eq!(report.product_id, "p1");
    assert_eq!(report.variant_count, 6);
}

#[tokio::test]
async fn test_admin_seed_rerun_reuses_everything() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    for resource in ["brands", "categories", "products"] {
        Mock::given(method("POST"))
            .and(path(format!("/api/admin/{resource}")))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({"error": "Conflict"})))
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/api/admin/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "b1", "name": "Orbit", "slug": "orbit"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": "c-women", "name": "Women", "slug": "women"},
                {"id": "c-tops", "name": "Tops", "slug": "tops", "parentId": "c-women"}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "p1", "title": "Athletic Tee", "slug": "athletic-tee"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/products/p1/options"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Size", "values": ["S", "M", "L"]},
            {"name": "Color", "values": ["Black", "White"]}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/products/p1/options"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/products/p1/variants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(variants(6)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/products/p1/variants"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    let report = tokio::task::spawn_blocking(move || {
        let mut out = Output::new(Vec::new());
        scenarios::admin_seed(&create_client(&uri), &admin(), &mut out).unwrap()
    })
    .await
    .unwrap();

    assert_eq!(report.tops_id, "c-tops");
    assert_eq!(report.variant_count, 6);
}

#[tokio::test]
async fn test_admin_demo_round_trip() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/admin/brands"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": "b1", "name": "Orbit", "slug": "orbit"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/brands/b1"))
        .and(body_json(json!({"slug": "orbit", "website": "https://orbit.example"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "b1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/categories"))
        .and(body_partial_json(json!({"name": "Women"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": "c-women", "name": "Women"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/categories"))
        .and(body_partial_json(json!({"name": "Tops"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": "c-tops", "name": "Tops"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/categories/c-women"))
        .and(body_json(json!({"description": "All women categories"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "c-women"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;
    for id in ["brands/b1", "categories/c-tops", "categories/c-women"] {
        Mock::given(method("DELETE"))
            .and(path(format!("/api/admin/{id}")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    }

    let uri = server.uri();
    let printed = tokio::task::spawn_blocking(move || {
        let mut out = Output::new(Vec::new());
        scenarios::admin_demo(&create_client(&uri), &admin(), &mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    })
    .await
    .unwrap();

    assert!(printed.contains("\"role\": \"ADMIN\""));
}

#[tokio::test]
async fn test_storefront_on_empty_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/catalog/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [], "total": 0})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/cart/items"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    let outcome = tokio::task::spawn_blocking(move || {
        let mut out = Output::new(Vec::new());
        scenarios::storefront(&create_client(&uri), &mut out).unwrap()
    })
    .await
    .unwrap();

    assert_eq!(outcome, StorefrontOutcome::NoProducts);
}

#[tokio::test]
async fn test_storefront_stops_at_product_without_variants() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/catalog/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "p1", "title": "Athletic Tee", "slug": "athletic-tee"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/catalog/products/athletic-tee"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "p1", "variants": []})),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    let outcome = tokio::task::spawn_blocking(move || {
        let mut out = Output::new(Vec::new());
        scenarios::storefront(&create_client(&uri), &mut out).unwrap()
    })
    .await
    .unwrap();

    assert_eq!(
        outcome,
        StorefrontOutcome::NoVariants {
            slug: "athletic-tee".to_string()
        }
    );
}
