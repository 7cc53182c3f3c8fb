//! Scripted multi-step flows shared by the CLI and the interactive
//! front-end.
//!
//! - [`admin_demo`]: brand and category CRUD round trip
//! - [`admin_seed`]: idempotently seeds a brand, categories and a product
//!   with generated variants
//! - [`storefront`]: browses the catalog, fills a cart and checks out
//!
//! Every step's response is printed; progress messages go to the log.
//! A flow stops at the first error, except where noted.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::clients::{ApiClient, HttpError, ResponseBody};
use crate::config::Credentials;
use crate::output::Output;
use crate::resources::{
    id_of, BrandUpdate, CatalogQuery, CategoryListParams, CategoryUpdate, Checkout, FieldUpdate,
    ListParams, NewBrand, NewCategory, NewOption, NewProduct, Product, ProductImage,
    ProductOption, ProductStatus, Variant, VariantGeneration, ROOT_PARENT,
};

/// Guest email used by the storefront flow.
pub const STOREFRONT_EMAIL: &str = "buyer@local.test";

/// Errors that abort a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// A request failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Output could not be written.
    #[error("Could not write output: {0}")]
    Output(#[from] io::Error),

    /// A response lacked a field the next step needs.
    #[error("Response for {step} has no {field}")]
    MissingField {
        /// The step whose response was incomplete.
        step: &'static str,
        /// The missing field.
        field: &'static str,
    },
}

/// What the seed flow ended up with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    /// The Orbit brand.
    pub brand_id: String,
    /// The Women category.
    pub women_id: String,
    /// The Tops category.
    pub tops_id: String,
    /// The Athletic Tee product.
    pub product_id: String,
    /// Number of variants the product has after seeding.
    pub variant_count: usize,
}

/// How the storefront flow ended.
#[derive(Debug, Clone, PartialEq)]
pub enum StorefrontOutcome {
    /// The catalog is empty.
    NoProducts,
    /// The first product has no purchasable variant.
    NoVariants {
        /// Slug of the product that was opened.
        slug: String,
    },
    /// An order was placed.
    CheckedOut {
        /// The checkout response.
        order: ResponseBody,
    },
}

/// Runs the admin demo.
///
/// Logs in, then:
/// 1. ensures brand Orbit, sets its website, lists brands, deletes it;
/// 2. ensures categories Women > Tops, describes Women, lists the root
///    categories, and deletes Tops then Women.
///
/// # Errors
///
/// Returns [`ScenarioError`] on the first failing step.
pub fn admin_demo<W: Write>(
    client: &ApiClient,
    credentials: &Credentials,
    out: &mut Output<W>,
) -> Result<(), ScenarioError> {
    login(client, credentials, out)?;

    tracing::info!("Creating brand 'Orbit'");
    let brand = client.brands().ensure(&orbit())?;
    out.json(&brand)?;

    tracing::info!("Updating brand slug and website");
    let update = BrandUpdate {
        slug: FieldUpdate::Set("orbit".to_string()),
        website: FieldUpdate::Set("https://orbit.example".to_string()),
        ..Default::default()
    };
    out.body(&client.brands().update(&brand.id, &update)?)?;

    tracing::info!("Listing brands page 1");
    out.body(&client.brands().list(&ListParams::page(1, 10))?)?;

    tracing::info!("Deleting brand");
    out.body(&client.brands().delete(&brand.id)?)?;

    tracing::info!("Creating category 'Women' (root)");
    let women = client.categories().ensure(&women())?;
    out.json(&women)?;

    tracing::info!("Creating subcategory 'Tops' under 'Women'");
    let tops = client.categories().ensure(&tops(&women.id))?;
    out.json(&tops)?;

    tracing::info!("Updating 'Women' description");
    let update = CategoryUpdate {
        description: FieldUpdate::Set("All women categories".to_string()),
        ..Default::default()
    };
    out.body(&client.categories().update(&women.id, &update)?)?;

    tracing::info!("Listing root categories");
    let params = CategoryListParams {
        list: ListParams::page(1, 10),
        parent_id: Some(ROOT_PARENT.to_string()),
    };
    out.body(&client.categories().list(&params)?)?;

    tracing::info!("Deleting subcategory then root");
    out.body(&client.categories().delete(&tops.id)?)?;
    out.body(&client.categories().delete(&women.id)?)?;

    Ok(())
}

/// Runs the admin seed.
///
/// Safe to run repeatedly: existing records are reused, options are only
/// added when missing, and variants are only generated for a product that
/// has none. A conflict from variant generation is tolerated.
///
/// # Errors
///
/// Returns [`ScenarioError`] on the first failing step.
pub fn admin_seed<W: Write>(
    client: &ApiClient,
    credentials: &Credentials,
    out: &mut Output<W>,
) -> Result<SeedReport, ScenarioError> {
    login(client, credentials, out)?;

    tracing::info!("Ensuring brand Orbit");
    let brand = client.brands().ensure(&orbit())?;
    out.json(&brand)?;

    tracing::info!("Ensuring categories Women > Tops");
    let women = client.categories().ensure(&women())?;
    let tops = client.categories().ensure(&tops(&women.id))?;
    out.json(&json!({"women": women.id, "tops": tops.id}))?;

    tracing::info!("Ensuring product Athletic Tee");
    let product = client.products().ensure(&NewProduct {
        title: "Athletic Tee".to_string(),
        slug: Some("athletic-tee".to_string()),
        description: Some("Breathable tee".to_string()),
        brand_id: Some(brand.id.clone()),
        status: Some(ProductStatus::Published),
        sku_prefix: Some("TEE".to_string()),
        images: vec![ProductImage::from_url(
            "https://picsum.photos/seed/athtee/800/800",
        )],
        category_ids: vec![tops.id.clone()],
    })?;
    out.json(&product)?;

    let options: Vec<ProductOption> = client
        .products()
        .list_options(&product.id)?
        .decode_items("option list")?;
    for (name, values) in [("Size", &["S", "M", "L"][..]), ("Color", &["Black", "White"][..])] {
        if options.iter().any(|option| option.name == name) {
            continue;
        }
        tracing::info!("Adding option {name}");
        client
            .products()
            .add_option(&product.id, &NewOption::new(name, values.iter().copied()))?;
    }

    let existing = client.products().list_variants(&product.id)?;
    if existing.items().is_empty() {
        tracing::info!("Generating variants");
        let generation = VariantGeneration::Cartesian {
            price_cents: 2499,
            currency: "EUR".to_string(),
            initial_stock: 25,
        };
        match client.products().generate_variants(&product.id, &generation) {
            Ok(_) => {}
            Err(error) if error.is_conflict() => {
                tracing::warn!("Variants already generated: {error}");
            }
            Err(error) => return Err(error.into()),
        }
    }

    let variants: Vec<Variant> = client
        .products()
        .list_variants(&product.id)?
        .decode_items("variant list")?;
    out.json(&variants)?;

    let report = SeedReport {
        brand_id: brand.id,
        women_id: women.id,
        tops_id: tops.id,
        product_id: product.id,
        variant_count: variants.len(),
    };
    tracing::info!("Seed complete: {} variants", report.variant_count);
    Ok(report)
}

/// Runs the storefront flow.
///
/// Opens the first catalog product, adds its first variant twice to the
/// cart, shows the cart, and checks out as [`STOREFRONT_EMAIL`].
///
/// # Errors
///
/// Returns [`ScenarioError`] on the first failing step.
pub fn storefront<W: Write>(
    client: &ApiClient,
    out: &mut Output<W>,
) -> Result<StorefrontOutcome, ScenarioError> {
    tracing::info!("Catalog products");
    let catalog = client.catalog().products(&CatalogQuery::default())?;
    out.body(&catalog)?;

    let products: Vec<Product> = catalog.decode_items("catalog page")?;
    let Some(first) = products.into_iter().next() else {
        tracing::warn!("No published products yet. Run the admin seed first.");
        return Ok(StorefrontOutcome::NoProducts);
    };
    let slug = first.slug.ok_or(ScenarioError::MissingField {
        step: "catalog products",
        field: "slug",
    })?;

    tracing::info!("Product page {slug}");
    let detail = client.catalog().product(&slug)?;
    out.body(&detail)?;

    let variant = detail
        .get("variants")
        .and_then(serde_json::Value::as_array)
        .and_then(|variants| variants.first())
        .cloned();
    let Some(variant) = variant else {
        tracing::warn!("Product {slug} has no variants");
        return Ok(StorefrontOutcome::NoVariants { slug });
    };
    let variant_id = id_of(&ResponseBody::Json(variant)).ok_or(ScenarioError::MissingField {
        step: "product page",
        field: "variant id",
    })?;

    tracing::info!("Adding {variant_id} x2 to cart");
    out.body(&client.cart().add_item(&variant_id, 2)?)?;

    tracing::info!("Cart");
    out.body(&client.cart().get()?)?;

    tracing::info!("Checking out as guest");
    let order = client.cart().checkout(&Checkout {
        email: Some(STOREFRONT_EMAIL.to_string()),
    })?;
    out.body(&order)?;

    Ok(StorefrontOutcome::CheckedOut { order })
}

fn login<W: Write>(
    client: &ApiClient,
    credentials: &Credentials,
    out: &mut Output<W>,
) -> Result<(), ScenarioError> {
    tracing::info!("Logging in as {}", credentials.email());
    client.auth().login(credentials)?;
    let me = client.auth().me()?;
    tracing::info!("Authenticated user:");
    out.body(&me)?;
    Ok(())
}

fn orbit() -> NewBrand {
    NewBrand {
        name: "Orbit".to_string(),
        slug: Some("orbit".to_string()),
        description: Some("Performance basics".to_string()),
        ..Default::default()
    }
}

fn women() -> NewCategory {
    NewCategory {
        name: "Women".to_string(),
        slug: Some("women".to_string()),
        ..Default::default()
    }
}

fn tops(parent_id: &str) -> NewCategory {
    NewCategory {
        name: "Tops".to_string(),
        slug: Some("tops".to_string()),
        parent_id: Some(parent_id.to_string()),
        ..Default::default()
    }
}
