//! Admin menus.

use std::io::{self, Write};

use super::{parse_value, Prompter, Tui, TuiError};
use crate::resources::{
    BrandUpdate, CategoryListParams, CategoryUpdate, FieldUpdate, ListParams, NewBrand,
    NewCategory, NewOption, NewProduct, OrderListParams, ProductImage, ProductListParams,
    ProductStatus, ProductUpdate, VariantGeneration, DEFAULT_PAGE_SIZE,
};

const CRUD_MENU: &[&str] = &["List", "Create", "Update", "Delete", "Back"];

const PRODUCT_MENU: &[&str] = &[
    "List",
    "Create",
    "Update",
    "Delete",
    "Options: List/Add",
    "Variants: List/Generate",
    "Stock: Set/Delta",
    "Back",
];

const COUPON_MENU: &[&str] = &[
    "List",
    "Create (raw JSON)",
    "Update (raw JSON)",
    "Delete",
    "Back",
];

const ORDER_MENU: &[&str] = &[
    "List orders",
    "Get order",
    "Update order (raw JSON)",
    "Stats",
    "Back",
];

const DEFAULT_COUPON: &str = r#"{"code":"SAVE10","type":"PERCENT","value":10,"maxUses":100}"#;
const DEFAULT_COUPON_UPDATE: &str = r#"{"active":true}"#;
const DEFAULT_ORDER_UPDATE: &str = r#"{"status":"FULFILLED"}"#;

/// Page size for the coupon and order desks.
const DESK_PAGE_SIZE: u32 = 50;

impl<P: Prompter, W: Write> Tui<P, W> {
    pub(super) fn brands_menu(&mut self) -> io::Result<()> {
        loop {
            let result = match self.menu("Admin / Brands", CRUD_MENU)? {
                0 => self.list_brands(),
                1 => self.create_brand(),
                2 => self.update_brand(),
                3 => self.delete_brand(),
                _ => return Ok(()),
            };
            self.report(result)?;
        }
    }

    fn list_params(&mut self, default_page_size: u32) -> io::Result<ListParams> {
        let q = self.ask_or("q", "")?;
        let page = self.ask_parsed("page", 1_u32)?;
        let page_size = self.ask_parsed("page-size", default_page_size)?;
        Ok(ListParams::page(page, page_size).with_query(q))
    }

    fn list_brands(&mut self) -> Result<(), TuiError> {
        let params = self.list_params(DEFAULT_PAGE_SIZE)?;
        self.out.body(&self.ctx.client().brands().list(&params)?)?;
        Ok(())
    }

    fn create_brand(&mut self) -> Result<(), TuiError> {
        let brand = NewBrand {
            name: self.ask("name")?,
            slug: self.ask_opt("slug (optional)")?,
            description: self.ask_opt("description (optional)")?,
            website: self.ask_opt("website (optional)")?,
            logo_url: self.ask_opt("logoUrl (optional)")?,
        };
        self.out.body(&self.ctx.client().brands().create(&brand)?)?;
        Ok(())
    }

    fn update_brand(&mut self) -> Result<(), TuiError> {
        let id = self.ask("brand id")?;
        let update = BrandUpdate {
            name: self.ask_update("name")?,
            slug: self.ask_update("slug")?,
            description: self.ask_update("description")?,
            website: self.ask_update("website")?,
            logo_url: self.ask_update("logoUrl")?,
        };
        self.out.body(&self.ctx.client().brands().update(&id, &update)?)?;
        Ok(())
    }

    fn delete_brand(&mut self) -> Result<(), TuiError> {
        let id = self.ask("brand id")?;
        if self.confirm_delete()? {
            self.out.body(&self.ctx.client().brands().delete(&id)?)?;
        }
        Ok(())
    }

    pub(super) fn categories_menu(&mut self) -> io::Result<()> {
        loop {
            let result = match self.menu("Admin / Categories", CRUD_MENU)? {
                0 => self.list_categories(),
                1 => self.create_category(),
                2 => self.update_category(),
                3 => self.delete_category(),
                _ => return Ok(()),
            };
            self.report(result)?;
        }
    }

    fn list_categories(&mut self) -> Result<(), TuiError> {
        let params = CategoryListParams {
            list: self.list_params(DEFAULT_PAGE_SIZE)?,
            parent_id: self.ask_opt("parentId (optional)")?,
        };
        self.out.body(&self.ctx.client().categories().list(&params)?)?;
        Ok(())
    }

    fn create_category(&mut self) -> Result<(), TuiError> {
        let category = NewCategory {
            name: self.ask("name")?,
            slug: self.ask_opt("slug (optional)")?,
            description: self.ask_opt("description (optional)")?,
            parent_id: self.ask_opt("parentId (optional)")?,
        };
        self.out.body(&self.ctx.client().categories().create(&category)?)?;
        Ok(())
    }

    fn update_category(&mut self) -> Result<(), TuiError> {
        let id = self.ask("category id")?;
        let update = CategoryUpdate {
            name: self.ask_update("name")?,
            slug: self.ask_update("slug")?,
            description: self.ask_update("description")?,
            parent_id: self.ask_update("parentId")?,
        };
        self.out.body(&self.ctx.client().categories().update(&id, &update)?)?;
        Ok(())
    }

    fn delete_category(&mut self) -> Result<(), TuiError> {
        let id = self.ask("category id")?;
        if self.confirm_delete()? {
            self.out.body(&self.ctx.client().categories().delete(&id)?)?;
        }
        Ok(())
    }

    pub(super) fn products_menu(&mut self) -> io::Result<()> {
        loop {
            let result = match self.menu("Admin / Products", PRODUCT_MENU)? {
                0 => self.list_products(),
                1 => self.create_product(),
                2 => self.update_product(),
                3 => self.delete_product(),
                4 => self.product_options(),
                5 => self.product_variants(),
                6 => self.variant_stock(),
                _ => return Ok(()),
            };
            self.report(result)?;
        }
    }

    fn list_products(&mut self) -> Result<(), TuiError> {
        let list = self.list_params(DEFAULT_PAGE_SIZE)?;
        let status = self
            .ask_opt("status filter (optional)")?
            .map(|s| parse_value::<ProductStatus>(&s))
            .transpose()?;
        let params = ProductListParams { list, status };
        self.out.body(&self.ctx.client().products().list(&params)?)?;
        Ok(())
    }

    fn create_product(&mut self) -> Result<(), TuiError> {
        let title = self.ask("title")?;
        let slug = self.ask_opt("slug (optional)")?;
        let description = self.ask_opt("description (optional)")?;
        let brand_id = self.ask_opt("brandId (optional)")?;
        let status = self.ask_or("status [DRAFT|PUBLISHED|ARCHIVED]", "DRAFT")?;
        let sku_prefix = self.ask_opt("skuPrefix (optional)")?;
        let image = self.ask_opt("image url (optional)")?;
        let category_ids = self.ask_or("categoryIds (space-separated, optional)", "")?;

        let product = NewProduct {
            title,
            slug,
            description,
            brand_id,
            status: Some(parse_value(&status)?),
            sku_prefix,
            images: image.into_iter().map(ProductImage::from_url).collect(),
            category_ids: split_ids(&category_ids),
        };
        self.out.body(&self.ctx.client().products().create(&product)?)?;
        Ok(())
    }

    fn update_product(&mut self) -> Result<(), TuiError> {
        let id = self.ask("product id")?;
        let title = self.ask_update("title")?;
        let slug = self.ask_update("slug")?;
        let description = self.ask_update("description")?;
        let brand_id = self.ask_update("brandId")?;
        let status = if self.prompter.confirm("Change status?", false)? {
            let status = self.ask_or("status", "DRAFT")?;
            FieldUpdate::Set(parse_value(&status)?)
        } else {
            FieldUpdate::Unchanged
        };
        let sku_prefix = self.ask_update("skuPrefix")?;
        let images = if self.prompter.confirm("Replace image?", false)? {
            let url = self.ask_opt("image url (blank to clear)")?;
            FieldUpdate::Set(url.into_iter().map(ProductImage::from_url).collect())
        } else {
            FieldUpdate::Unchanged
        };
        let category_ids = if self.prompter.confirm("Replace categoryIds?", false)? {
            FieldUpdate::Set(split_ids(&self.ask_or("categoryIds (space-separated)", "")?))
        } else {
            FieldUpdate::Unchanged
        };

        let update = ProductUpdate {
            title,
            slug,
            description,
            brand_id,
            status,
            sku_prefix,
            images,
            category_ids,
        };
        self.out.body(&self.ctx.client().products().update(&id, &update)?)?;
        Ok(())
    }

    fn delete_product(&mut self) -> Result<(), TuiError> {
        let id = self.ask("product id")?;
        if self.confirm_delete()? {
            self.out.body(&self.ctx.client().products().delete(&id)?)?;
        }
        Ok(())
    }

    fn product_options(&mut self) -> Result<(), TuiError> {
        let id = self.ask("product id")?;
        match self.prompter.select(">", &["List options", "Add option"], 0)? {
            0 => self.out.body(&self.ctx.client().products().list_options(&id)?)?,
            _ => {
                let name = self.ask("option name (e.g., Size)")?;
                let values = self.ask_or("values (space-separated)", "S M L")?;
                let option = NewOption::new(name, values.split_whitespace());
                self.out
                    .body(&self.ctx.client().products().add_option(&id, &option)?)?;
            }
        }
        Ok(())
    }

    fn product_variants(&mut self) -> Result<(), TuiError> {
        let id = self.ask("product id")?;
        let items = ["List variants", "Generate cartesian variants"];
        match self.prompter.select(">", &items, 0)? {
            0 => self.out.body(&self.ctx.client().products().list_variants(&id)?)?,
            _ => {
                let generation = VariantGeneration::Cartesian {
                    price_cents: self.ask_parsed("priceCents", 2499_i64)?,
                    currency: "EUR".to_string(),
                    initial_stock: self.ask_parsed("initial stock", 0_i64)?,
                };
                self.out.body(
                    &self
                        .ctx
                        .client()
                        .products()
                        .generate_variants(&id, &generation)?,
                )?;
            }
        }
        Ok(())
    }

    fn variant_stock(&mut self) -> Result<(), TuiError> {
        let mode = self
            .prompter
            .select(">", &["Set on-hand", "Delta on-hand"], 0)?;
        let id = self.ask("variant id")?;
        let body = if mode == 0 {
            let on_hand = self.ask_parsed("onHand", 10_i64)?;
            self.ctx.client().variants().set_stock(&id, on_hand)?
        } else {
            let delta = self.ask_parsed("delta (+/-)", 1_i64)?;
            self.ctx.client().variants().adjust_stock(&id, delta)?
        };
        self.out.body(&body)?;
        Ok(())
    }

    pub(super) fn coupons_menu(&mut self) -> io::Result<()> {
        loop {
            let result = match self.menu("Admin / Coupons", COUPON_MENU)? {
                0 => self.list_coupons(),
                1 => self.create_coupon(),
                2 => self.update_coupon(),
                3 => self.delete_coupon(),
                _ => return Ok(()),
            };
            self.report(result)?;
        }
    }

    fn list_coupons(&mut self) -> Result<(), TuiError> {
        let params = self.list_params(DESK_PAGE_SIZE)?;
        self.out.body(&self.ctx.client().coupons().list(&params)?)?;
        Ok(())
    }

    fn create_coupon(&mut self) -> Result<(), TuiError> {
        let raw = self.ask_or("JSON payload", DEFAULT_COUPON)?;
        let payload = serde_json::from_str(&raw)?;
        self.out.body(&self.ctx.client().coupons().create(payload)?)?;
        Ok(())
    }

    fn update_coupon(&mut self) -> Result<(), TuiError> {
        let id = self.ask("coupon id")?;
        let raw = self.ask_or("JSON payload", DEFAULT_COUPON_UPDATE)?;
        let payload = serde_json::from_str(&raw)?;
        self.out.body(&self.ctx.client().coupons().update(&id, payload)?)?;
        Ok(())
    }

    fn delete_coupon(&mut self) -> Result<(), TuiError> {
        let id = self.ask("coupon id")?;
        if self.confirm_delete()? {
            self.out.body(&self.ctx.client().coupons().delete(&id)?)?;
        }
        Ok(())
    }

    pub(super) fn orders_menu(&mut self) -> io::Result<()> {
        loop {
            let result = match self.menu("Admin / Orders & Stats", ORDER_MENU)? {
                0 => self.list_orders(),
                1 => self.get_order(),
                2 => self.update_order(),
                3 => self.show_stats(),
                _ => return Ok(()),
            };
            self.report(result)?;
        }
    }

    fn list_orders(&mut self) -> Result<(), TuiError> {
        let page = self.ask_parsed("page", 1_u32)?;
        let page_size = self.ask_parsed("page-size", DESK_PAGE_SIZE)?;
        let status = self.ask_opt("status filter (optional)")?;
        let q = self.ask_or("q (optional)", "")?;
        let params = OrderListParams {
            list: ListParams::page(page, page_size).with_query(q),
            status,
        };
        self.out.body(&self.ctx.client().orders().list(&params)?)?;
        Ok(())
    }

    fn get_order(&mut self) -> Result<(), TuiError> {
        let id = self.ask("order id")?;
        self.out.body(&self.ctx.client().orders().get(&id)?)?;
        Ok(())
    }

    fn show_stats(&mut self) -> Result<(), TuiError> {
        self.out.body(&self.ctx.client().orders().stats()?)?;
        Ok(())
    }

    fn update_order(&mut self) -> Result<(), TuiError> {
        let id = self.ask("order id")?;
        let raw = self.ask_or("JSON payload", DEFAULT_ORDER_UPDATE)?;
        let payload = serde_json::from_str(&raw)?;
        self.out.body(&self.ctx.client().orders().update(&id, payload)?)?;
        Ok(())
    }
}

fn split_ids(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
