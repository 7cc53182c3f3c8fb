//! Admin subcommands: brands, categories, products, options, variants,
//! coupons and orders.

use std::io::Write;

use clap::Subcommand;

use super::{parse_json, parse_update, CliError, ListArgs};
use crate::clients::ApiClient;
use crate::output::Output;
use crate::resources::{
    BrandUpdate, CategoryListParams, CategoryUpdate, FieldUpdate, NewBrand, NewCategory,
    NewOption, NewProduct, OrderListParams, ProductImage, ProductListParams, ProductStatus,
    ProductUpdate, VariantCombination, VariantGeneration, VariantUpdate,
};

#[derive(Debug, Subcommand)]
pub enum BrandsCommand {
    /// List brands
    List(ListArgs),

    /// Show a brand
    Get {
        #[arg(long)]
        id: String,
    },

    /// Create a brand
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        logo_url: Option<String>,
    },

    /// Update a brand; an empty value clears the field
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        logo_url: Option<String>,
    },

    /// Delete a brand
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// List categories
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Parent id; use "root" for top-level categories
        #[arg(long)]
        parent_id: Option<String>,
    },

    /// Show a category
    Get {
        #[arg(long)]
        id: String,
    },

    /// Create a category
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        parent_id: Option<String>,
    },

    /// Update a category; an empty value clears the field
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// New parent; an empty value moves the category to the top level
        #[arg(long)]
        parent_id: Option<String>,
    },

    /// Delete a category
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List products
    List {
        #[command(flatten)]
        list: ListArgs,
        /// DRAFT, PUBLISHED or ARCHIVED
        #[arg(long)]
        status: Option<ProductStatus>,
    },

    /// Show a product
    Get {
        #[arg(long)]
        id: String,
    },

    /// Create a product
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        brand_id: Option<String>,
        /// DRAFT, PUBLISHED or ARCHIVED
        #[arg(long)]
        status: Option<ProductStatus>,
        #[arg(long)]
        sku_prefix: Option<String>,
        /// Image URL (repeatable)
        #[arg(long = "image")]
        images: Vec<String>,
        /// Category id (repeatable)
        #[arg(long = "category-id")]
        category_ids: Vec<String>,
    },

    /// Update a product; an empty value clears the field
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        brand_id: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        sku_prefix: Option<String>,
        /// Space-separated image URLs replacing the current list
        #[arg(long)]
        images: Option<String>,
        /// Space-separated category ids replacing the current list
        #[arg(long)]
        category_ids: Option<String>,
    },

    /// Delete a product
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum OptionsCommand {
    /// List a product's options
    List {
        #[arg(long)]
        product_id: String,
    },

    /// Add an option to a product
    Add {
        #[arg(long)]
        product_id: String,
        /// Option name, e.g. Size
        #[arg(long)]
        name: String,
        /// Option values, e.g. S M L
        #[arg(long, num_args = 1.., required = true)]
        values: Vec<String>,
        #[arg(long)]
        position: Option<u32>,
    },
}

#[derive(Debug, Subcommand)]
pub enum VariantsCommand {
    /// List a product's variants
    List {
        #[arg(long)]
        product_id: String,
    },

    /// Generate variants for a product
    #[command(subcommand)]
    Generate(GenerateCommand),

    /// Update a variant; an empty value clears the field
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        sku: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        price_cents: Option<String>,
        #[arg(long)]
        compare_at_cents: Option<String>,
        #[arg(long)]
        cost_cents: Option<String>,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        track_inventory: Option<String>,
        #[arg(long)]
        is_default: Option<String>,
    },

    /// Delete a variant
    Delete {
        #[arg(long)]
        id: String,
    },

    /// Set or adjust on-hand stock
    Stock {
        #[arg(long)]
        id: String,
        /// Absolute on-hand count
        #[arg(long, conflicts_with = "delta", required_unless_present = "delta")]
        on_hand: Option<i64>,
        /// Signed adjustment
        #[arg(long, allow_negative_numbers = true)]
        delta: Option<i64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum GenerateCommand {
    /// Every combination of the product's option values
    Cartesian {
        #[arg(long)]
        product_id: String,
        #[arg(long, default_value_t = 2499)]
        price_cents: i64,
        #[arg(long, default_value = "EUR")]
        currency: String,
        #[arg(long, default_value_t = 0)]
        initial_stock: i64,
    },

    /// Only the listed combinations
    Explicit {
        #[arg(long)]
        product_id: String,
        /// JSON array of {"values":{..},"priceCents":n,"initialStock":n}
        #[arg(long)]
        json: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CouponsCommand {
    /// List coupons
    List(ListArgs),

    /// Create a coupon from a JSON payload
    Create {
        /// e.g. {"code":"SAVE10","type":"PERCENT","value":10,"maxUses":100}
        #[arg(long)]
        json: String,
    },

    /// Update a coupon from a JSON payload
    Update {
        #[arg(long)]
        id: String,
        /// e.g. {"active":true}
        #[arg(long)]
        json: String,
    },

    /// Delete a coupon
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// List orders
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Status filter, e.g. PAID
        #[arg(long)]
        status: Option<String>,
    },

    /// Show an order
    Get {
        #[arg(long)]
        id: String,
    },

    /// Update an order from a JSON payload
    Update {
        #[arg(long)]
        id: String,
        /// e.g. {"status":"FULFILLED"}
        #[arg(long)]
        json: String,
    },
}

pub(super) fn brands<W: Write>(
    client: &ApiClient,
    command: BrandsCommand,
    out: &mut Output<W>,
) -> Result<(), CliError> {
    let brands = client.brands();
    let body = match command {
        BrandsCommand::List(list) => brands.list(&list.params())?,
        BrandsCommand::Get { id } => brands.get(&id)?,
        BrandsCommand::Create {
            name,
            slug,
            description,
            website,
            logo_url,
        } => brands.create(&NewBrand {
            name,
            slug,
            description,
            website,
            logo_url,
        })?,
        BrandsCommand::Update {
            id,
            name,
            slug,
            description,
            website,
            logo_url,
        } => {
            let update = BrandUpdate {
                name: FieldUpdate::from_flag(name),
                slug: FieldUpdate::from_flag(slug),
                description: FieldUpdate::from_flag(description),
                website: FieldUpdate::from_flag(website),
                logo_url: FieldUpdate::from_flag(logo_url),
            };
            brands.update(&id, &update)?
        }
        BrandsCommand::Delete { id } => brands.delete(&id)?,
    };
    out.body(&body)?;
    Ok(())
}

pub(super) fn categories<W: Write>(
    client: &ApiClient,
    command: CategoriesCommand,
    out: &mut Output<W>,
) -> Result<(), CliError> {
    let categories = client.categories();
    let body = match command {
        CategoriesCommand::List { list, parent_id } => categories.list(&CategoryListParams {
            list: list.params(),
            parent_id,
        })?,
        CategoriesCommand::Get { id } => categories.get(&id)?,
        CategoriesCommand::Create {
            name,
            slug,
            description,
            parent_id,
        } => categories.create(&NewCategory {
            name,
            slug,
            description,
            parent_id,
        })?,
        CategoriesCommand::Update {
            id,
            name,
            slug,
            description,
            parent_id,
        } => {
            let update = CategoryUpdate {
                name: FieldUpdate::from_flag(name),
                slug: FieldUpdate::from_flag(slug),
                description: FieldUpdate::from_flag(description),
                parent_id: FieldUpdate::from_flag(parent_id),
            };
            categories.update(&id, &update)?
        }
        CategoriesCommand::Delete { id } => categories.delete(&id)?,
    };
    out.body(&body)?;
    Ok(())
}

pub(super) fn products<W: Write>(
    client: &ApiClient,
    command: ProductsCommand,
    out: &mut Output<W>,
) -> Result<(), CliError> {
    let products = client.products();
    let body = match command {
        ProductsCommand::List { list, status } => products.list(&ProductListParams {
            list: list.params(),
            status,
        })?,
        ProductsCommand::Get { id } => products.get(&id)?,
        ProductsCommand::Create {
            title,
            slug,
            description,
            brand_id,
            status,
            sku_prefix,
            images,
            category_ids,
        } => products.create(&NewProduct {
            title,
            slug,
            description,
            brand_id,
            status,
            sku_prefix,
            images: images.into_iter().map(ProductImage::from_url).collect(),
            category_ids,
        })?,
        ProductsCommand::Update {
            id,
            title,
            slug,
            description,
            brand_id,
            status,
            sku_prefix,
            images,
            category_ids,
        } => {
            let update = ProductUpdate {
                title: FieldUpdate::from_flag(title),
                slug: FieldUpdate::from_flag(slug),
                description: FieldUpdate::from_flag(description),
                brand_id: FieldUpdate::from_flag(brand_id),
                status: parse_update("--status", status)?,
                sku_prefix: FieldUpdate::from_flag(sku_prefix),
                images: list_update(images).map(|urls| {
                    urls.into_iter().map(ProductImage::from_url).collect()
                }),
                category_ids: list_update(category_ids),
            };
            products.update(&id, &update)?
        }
        ProductsCommand::Delete { id } => products.delete(&id)?,
    };
    out.body(&body)?;
    Ok(())
}

pub(super) fn options<W: Write>(
    client: &ApiClient,
    command: OptionsCommand,
    out: &mut Output<W>,
) -> Result<(), CliError> {
    let body = match command {
        OptionsCommand::List { product_id } => client.products().list_options(&product_id)?,
        OptionsCommand::Add {
            product_id,
            name,
            values,
            position,
        } => {
            let option = NewOption {
                position,
                ..NewOption::new(name, values)
            };
            client.products().add_option(&product_id, &option)?
        }
    };
    out.body(&body)?;
    Ok(())
}

pub(super) fn variants<W: Write>(
    client: &ApiClient,
    command: VariantsCommand,
    out: &mut Output<W>,
) -> Result<(), CliError> {
    let body = match command {
        VariantsCommand::List { product_id } => client.products().list_variants(&product_id)?,
        VariantsCommand::Generate(GenerateCommand::Cartesian {
            product_id,
            price_cents,
            currency,
            initial_stock,
        }) => {
            let generation = VariantGeneration::Cartesian {
                price_cents,
                currency,
                initial_stock,
            };
            client.products().generate_variants(&product_id, &generation)?
        }
        VariantsCommand::Generate(GenerateCommand::Explicit { product_id, json }) => {
            let combinations: Vec<VariantCombination> = parse_json("--json", &json)?;
            let generation = VariantGeneration::Explicit { combinations };
            client.products().generate_variants(&product_id, &generation)?
        }
        VariantsCommand::Update {
            id,
            sku,
            title,
            price_cents,
            compare_at_cents,
            cost_cents,
            currency,
            track_inventory,
            is_default,
        } => {
            let update = VariantUpdate {
                sku: FieldUpdate::from_flag(sku),
                title: FieldUpdate::from_flag(title),
                price_cents: parse_update("--price-cents", price_cents)?,
                compare_at_cents: parse_update("--compare-at-cents", compare_at_cents)?,
                cost_cents: parse_update("--cost-cents", cost_cents)?,
                currency: FieldUpdate::from_flag(currency),
                track_inventory: parse_update("--track-inventory", track_inventory)?,
                is_default: parse_update("--is-default", is_default)?,
            };
            client.variants().update(&id, &update)?
        }
        VariantsCommand::Delete { id } => client.variants().delete(&id)?,
        VariantsCommand::Stock { id, on_hand, delta } => match (on_hand, delta) {
            (Some(on_hand), _) => client.variants().set_stock(&id, on_hand)?,
            (None, Some(delta)) => client.variants().adjust_stock(&id, delta)?,
            (None, None) => {
                return Err(CliError::InvalidValue {
                    flag: "--on-hand",
                    value: String::new(),
                    reason: "either --on-hand or --delta is required".to_string(),
                })
            }
        },
    };
    out.body(&body)?;
    Ok(())
}

pub(super) fn coupons<W: Write>(
    client: &ApiClient,
    command: CouponsCommand,
    out: &mut Output<W>,
) -> Result<(), CliError> {
    let coupons = client.coupons();
    let body = match command {
        CouponsCommand::List(list) => coupons.list(&list.params())?,
        CouponsCommand::Create { json } => coupons.create(parse_json("--json", &json)?)?,
        CouponsCommand::Update { id, json } => coupons.update(&id, parse_json("--json", &json)?)?,
        CouponsCommand::Delete { id } => coupons.delete(&id)?,
    };
    out.body(&body)?;
    Ok(())
}

pub(super) fn orders<W: Write>(
    client: &ApiClient,
    command: OrdersCommand,
    out: &mut Output<W>,
) -> Result<(), CliError> {
    let orders = client.orders();
    let body = match command {
        OrdersCommand::List { list, status } => orders.list(&OrderListParams {
            list: list.params(),
            status,
        })?,
        OrdersCommand::Get { id } => orders.get(&id)?,
        OrdersCommand::Update { id, json } => orders.update(&id, parse_json("--json", &json)?)?,
    };
    out.body(&body)?;
    Ok(())
}

/// A whitespace-separated list flag: absent is unchanged, anything else
/// replaces the list (an empty value empties it).
fn list_update(value: Option<String>) -> FieldUpdate<Vec<String>> {
    FieldUpdate::from_option(
        value.map(|v| v.split_whitespace().map(str::to_string).collect()),
    )
}
