//! Storefront subcommands: catalog, cart, checkout and account.

use std::io::Write;

use clap::Subcommand;

use super::CliError;
use crate::clients::ApiClient;
use crate::output::Output;
use crate::resources::catalog::DEFAULT_CATALOG_PAGE_SIZE;
use crate::resources::{CatalogQuery, CatalogSort, Checkout};

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List published products
    Products {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_CATALOG_PAGE_SIZE)]
        page_size: u32,
        /// newest, title_asc or title_desc
        #[arg(long)]
        sort: Option<CatalogSort>,
        #[arg(long)]
        q: Option<String>,
    },

    /// Show a product by slug
    Product {
        #[arg(long)]
        slug: String,
    },

    /// List public brands
    Brands,

    /// List public categories
    Categories,
}

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Show the cart
    Show,

    /// Empty the cart
    Clear,

    /// Add a variant
    Add {
        #[arg(long)]
        variant_id: String,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },

    /// Set the quantity of a cart line
    Set {
        #[arg(long)]
        item_id: String,
        #[arg(long)]
        quantity: u32,
    },

    /// Remove a cart line
    Remove {
        #[arg(long)]
        item_id: String,
    },

    /// Apply a coupon code
    Coupon {
        #[arg(long)]
        code: String,
    },

    /// Remove the applied coupon
    RemoveCoupon,
}

#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// List my orders
    Orders,

    /// Show one of my orders
    Order {
        #[arg(long)]
        id: String,
    },
}

pub(super) fn catalog<W: Write>(
    client: &ApiClient,
    command: CatalogCommand,
    out: &mut Output<W>,
) -> Result<(), CliError> {
    let catalog = client.catalog();
    let body = match command {
        CatalogCommand::Products {
            page,
            page_size,
            sort,
            q,
        } => catalog.products(&CatalogQuery {
            page,
            page_size,
            sort,
            q,
        })?,
        CatalogCommand::Product { slug } => catalog.product(&slug)?,
        CatalogCommand::Brands => catalog.brands()?,
        CatalogCommand::Categories => catalog.categories()?,
    };
    out.body(&body)?;
    Ok(())
}

pub(super) fn cart<W: Write>(
    client: &ApiClient,
    command: CartCommand,
    out: &mut Output<W>,
) -> Result<(), CliError> {
    let cart = client.cart();
    let body = match command {
        CartCommand::Show => cart.get()?,
        CartCommand::Clear => cart.clear()?,
        CartCommand::Add {
            variant_id,
            quantity,
        } => cart.add_item(&variant_id, quantity)?,
        CartCommand::Set { item_id, quantity } => cart.set_quantity(&item_id, quantity)?,
        CartCommand::Remove { item_id } => cart.remove_item(&item_id)?,
        CartCommand::Coupon { code } => cart.apply_coupon(&code)?,
        CartCommand::RemoveCoupon => cart.remove_coupon()?,
    };
    out.body(&body)?;
    Ok(())
}

pub(super) fn checkout<W: Write>(
    client: &ApiClient,
    email: Option<String>,
    out: &mut Output<W>,
) -> Result<(), CliError> {
    let email = email.filter(|e| !e.trim().is_empty());
    out.body(&client.cart().checkout(&Checkout { email })?)?;
    Ok(())
}

pub(super) fn account<W: Write>(
    client: &ApiClient,
    command: AccountCommand,
    out: &mut Output<W>,
) -> Result<(), CliError> {
    let body = match command {
        AccountCommand::Orders => client.orders().mine()?,
        AccountCommand::Order { id } => client.orders().my_order(&id)?,
    };
    out.body(&body)?;
    Ok(())
}
