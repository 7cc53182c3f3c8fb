//! Session, storefront, demo and settings menus.

use std::io::{self, Write};

use super::{parse_value, Prompter, Tui, TuiError};
use crate::config::{BaseUrl, Credentials};
use crate::resources::catalog::DEFAULT_CATALOG_PAGE_SIZE;
use crate::resources::{CatalogQuery, CatalogSort, Checkout};
use crate::scenarios::{self, StorefrontOutcome};
use crate::session::SessionKind;

const AUTH_MENU: &[&str] = &[
    "Login",
    "Register",
    "Me",
    "Logout",
    "Switch session (admin/cart/user)",
    "Back",
];

const CATALOG_CART_MENU: &[&str] = &[
    "Catalog products",
    "Product by slug",
    "Cart: get",
    "Cart: clear",
    "Cart: add item",
    "Cart: set qty",
    "Cart: remove item",
    "Cart: apply coupon",
    "Cart: remove coupon",
    "Checkout (manual)",
    "Back",
];

const ACCOUNT_MENU: &[&str] = &["My orders", "Get my order", "Back"];

const SETTINGS_MENU: &[&str] = &["Change base URL", "Change cookie files", "Back"];

impl<P: Prompter, W: Write> Tui<P, W> {
    pub(super) fn auth_menu(&mut self) -> io::Result<()> {
        loop {
            let result = match self.menu("Auth", AUTH_MENU)? {
                0 => self.login(),
                1 => self.register(),
                2 => self.show_me(),
                3 => self.logout(),
                4 => self.switch_session(),
                _ => return Ok(()),
            };
            self.report(result)?;
        }
    }

    /// Asks for credentials. The admin defaults are offered only on the
    /// admin session.
    fn ask_credentials(
        &mut self,
        email_prompt: &str,
        password_prompt: &str,
        admin: bool,
    ) -> Result<Credentials, TuiError> {
        let defaults = if admin {
            Credentials::admin_from_env().ok()
        } else {
            None
        };
        let email = self
            .prompter
            .input(email_prompt, defaults.as_ref().map(Credentials::email))?;
        let password = self.prompter.password(
            password_prompt,
            defaults.as_ref().map(|c| c.password().as_ref()),
        )?;
        Ok(Credentials::new(email, password)?)
    }

    fn login(&mut self) -> Result<(), TuiError> {
        let admin = self.ctx.active() == SessionKind::Admin;
        let credentials = self.ask_credentials("Email", "Password", admin)?;
        self.out.body(&self.ctx.client().auth().login(&credentials)?)?;
        Ok(())
    }

    fn register(&mut self) -> Result<(), TuiError> {
        let credentials = self.ask_credentials("Email", "Password", false)?;
        let name = self.ask_or("Name", "User")?;
        self.out
            .body(&self.ctx.client().auth().register(&credentials, &name)?)?;
        Ok(())
    }

    fn show_me(&mut self) -> Result<(), TuiError> {
        self.out.body(&self.ctx.client().auth().me()?)?;
        Ok(())
    }

    fn logout(&mut self) -> Result<(), TuiError> {
        self.out.body(&self.ctx.client().auth().logout()?)?;
        Ok(())
    }

    fn switch_session(&mut self) -> Result<(), TuiError> {
        let names = SessionKind::ALL.map(|kind| kind.as_str());
        let current = SessionKind::ALL
            .iter()
            .position(|kind| *kind == self.ctx.active())
            .unwrap_or_default();
        let choice = self.prompter.select("Which session?", &names, current)?;
        let kind = SessionKind::ALL[choice.min(SessionKind::ALL.len() - 1)];
        self.ctx.switch(kind)?;
        self.out.success(&format!("Switched to {kind}"))?;
        Ok(())
    }

    pub(super) fn catalog_cart_menu(&mut self) -> io::Result<()> {
        loop {
            let result = match self.menu("Catalog / Cart / Checkout", CATALOG_CART_MENU)? {
                0 => self.catalog_products(),
                1 => self.catalog_product(),
                2 => self.cart_get(),
                3 => self.cart_clear(),
                4 => self.cart_add(),
                5 => self.cart_set_quantity(),
                6 => self.cart_remove(),
                7 => self.cart_apply_coupon(),
                8 => self.cart_remove_coupon(),
                9 => self.checkout(),
                _ => return Ok(()),
            };
            self.report(result)?;
        }
    }

    fn catalog_products(&mut self) -> Result<(), TuiError> {
        let page = self.ask_parsed("page", 1_u32)?;
        let page_size = self.ask_parsed("page-size", DEFAULT_CATALOG_PAGE_SIZE)?;
        let sort = self.ask_or("sort [newest|title_asc|title_desc]", CatalogSort::Newest.as_str())?;
        let query = CatalogQuery {
            page,
            page_size,
            sort: Some(parse_value(&sort)?),
            q: None,
        };
        self.out.body(&self.ctx.client().catalog().products(&query)?)?;
        Ok(())
    }

    fn catalog_product(&mut self) -> Result<(), TuiError> {
        let slug = self.ask_or("slug", "athletic-tee")?;
        self.out.body(&self.ctx.client().catalog().product(&slug)?)?;
        Ok(())
    }

    fn cart_get(&mut self) -> Result<(), TuiError> {
        self.out.body(&self.ctx.client().cart().get()?)?;
        Ok(())
    }

    fn cart_clear(&mut self) -> Result<(), TuiError> {
        self.out.body(&self.ctx.client().cart().clear()?)?;
        Ok(())
    }

    fn cart_add(&mut self) -> Result<(), TuiError> {
        let variant_id = self.ask("variantId")?;
        let quantity = self.ask_parsed("qty", 1_u32)?;
        self.out
            .body(&self.ctx.client().cart().add_item(&variant_id, quantity)?)?;
        Ok(())
    }

    fn cart_set_quantity(&mut self) -> Result<(), TuiError> {
        let item_id = self.ask("itemId")?;
        let quantity = self.ask_parsed("qty", 1_u32)?;
        self.out
            .body(&self.ctx.client().cart().set_quantity(&item_id, quantity)?)?;
        Ok(())
    }

    fn cart_remove(&mut self) -> Result<(), TuiError> {
        let item_id = self.ask("itemId")?;
        self.out.body(&self.ctx.client().cart().remove_item(&item_id)?)?;
        Ok(())
    }

    fn cart_apply_coupon(&mut self) -> Result<(), TuiError> {
        let code = self.ask_or("coupon code", "SAVE10")?;
        self.out.body(&self.ctx.client().cart().apply_coupon(&code)?)?;
        Ok(())
    }

    fn cart_remove_coupon(&mut self) -> Result<(), TuiError> {
        self.out.body(&self.ctx.client().cart().remove_coupon()?)?;
        Ok(())
    }

    fn checkout(&mut self) -> Result<(), TuiError> {
        let email = self.ask_opt("email (blank uses logged-in user)")?;
        self.out
            .body(&self.ctx.client().cart().checkout(&Checkout { email })?)?;
        Ok(())
    }

    pub(super) fn account_menu(&mut self) -> io::Result<()> {
        loop {
            let result = match self.menu("Account", ACCOUNT_MENU)? {
                0 => self.my_orders(),
                1 => self.my_order(),
                _ => return Ok(()),
            };
            self.report(result)?;
        }
    }

    fn my_orders(&mut self) -> Result<(), TuiError> {
        self.out.body(&self.ctx.client().orders().mine()?)?;
        Ok(())
    }

    fn my_order(&mut self) -> Result<(), TuiError> {
        let id = self.ask("order id")?;
        self.out.body(&self.ctx.client().orders().my_order(&id)?)?;
        Ok(())
    }

    pub(super) fn seed_demo(&mut self) -> io::Result<()> {
        self.out.divider("Demo: Admin seed")?;
        let result = self.run_seed();
        self.report(result)
    }

    fn run_seed(&mut self) -> Result<(), TuiError> {
        let credentials = self.ask_credentials("Admin email", "Admin password", true)?;
        let report = scenarios::admin_seed(self.ctx.client(), &credentials, &mut self.out)?;
        self.out.success(&format!(
            "Done. Product {} has {} variants.",
            report.product_id, report.variant_count
        ))?;
        Ok(())
    }

    pub(super) fn storefront_demo(&mut self) -> io::Result<()> {
        self.out.divider("Demo: Storefront flow")?;
        let result = self.run_storefront();
        self.report(result)
    }

    fn run_storefront(&mut self) -> Result<(), TuiError> {
        match scenarios::storefront(self.ctx.client(), &mut self.out)? {
            StorefrontOutcome::NoProducts => {
                self.out
                    .line("No published products yet. Run Demo Admin first.")?;
            }
            StorefrontOutcome::NoVariants { slug } => {
                self.out.line(&format!("No variants for {slug}."))?;
            }
            StorefrontOutcome::CheckedOut { .. } => self.out.success("Order placed.")?,
        }
        Ok(())
    }

    pub(super) fn settings_menu(&mut self) -> io::Result<()> {
        loop {
            self.out.divider("Settings")?;
            self.out
                .kv("Current base URL", self.ctx.base_url().as_ref())?;
            for kind in SessionKind::ALL {
                let path = self.ctx.profiles().cookie_file(kind).display().to_string();
                self.out.kv(&format!("{kind} cookies"), &path)?;
            }
            self.out.flush()?;

            let result = match self.prompter.select(">", SETTINGS_MENU, 0)? {
                0 => self.change_base_url(),
                1 => self.change_cookie_files(),
                _ => return Ok(()),
            };
            self.report(result)?;
        }
    }

    fn change_base_url(&mut self) -> Result<(), TuiError> {
        let current = self.ctx.base_url().to_string();
        let url = self.ask_or("New base URL", &current)?;
        self.ctx.set_base_url(BaseUrl::new(url)?)?;
        Ok(())
    }

    fn change_cookie_files(&mut self) -> Result<(), TuiError> {
        let mut profiles = self.ctx.profiles().clone();
        for kind in SessionKind::ALL {
            let current = profiles.cookie_file(kind).display().to_string();
            let label = format!("{} cookie file", capitalize(kind.as_str()));
            let path = self.ask_or(&label, &current)?;
            profiles.set_cookie_file(kind, path);
        }
        self.ctx.set_profiles(profiles)?;
        Ok(())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::super::prompt::scripted::Answer;
    use super::super::tests::{printed, tui};
    use super::*;
    use crate::config::{
        ADMIN_EMAIL_ENV, ADMIN_PASSWORD_ENV, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD,
    };

    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("admin"), "Admin");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_settings_change_base_url_and_cookie_files() {
        let dir = tempfile::tempdir().unwrap();
        let guest = dir.path().join("guest.cookies");
        let guest_answer: &'static str = Box::leak(guest.display().to_string().into_boxed_str());
        let mut tui = tui(
            dir.path(),
            "http://localhost:3000",
            vec![
                Answer::Select(10),
                Answer::Select(0),
                Answer::Text("http://shop.test:8080"),
                Answer::Select(1),
                Answer::Text(""),
                Answer::Text(guest_answer),
                Answer::Text(""),
                Answer::Select(2),
                Answer::Select(11),
            ],
        );

        tui.run().unwrap();

        let ctx = tui.context();
        assert_eq!(ctx.base_url().as_ref(), "http://shop.test:8080");
        assert_eq!(ctx.client().cookie_file(), Some(guest.as_path()));
        assert_eq!(
            ctx.profiles().cookie_file(SessionKind::Admin),
            dir.path().join("admin.cookies")
        );
    }

    #[test]
    fn test_invalid_base_url_keeps_previous() {
        let dir = tempfile::tempdir().unwrap();
        let mut tui = tui(
            dir.path(),
            "http://localhost:3000",
            vec![
                Answer::Select(10),
                Answer::Select(0),
                Answer::Text("localhost"),
                Answer::Select(2),
                Answer::Select(11),
            ],
        );

        tui.run().unwrap();

        assert_eq!(tui.context().base_url().as_ref(), "http://localhost:3000");
        assert!(printed(tui).contains("Invalid base URL 'localhost'"));
    }

    #[tokio::test]
    async fn test_admin_login_offers_admin_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(json!({
                "email": std::env::var(ADMIN_EMAIL_ENV).unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.into()),
                "password": std::env::var(ADMIN_PASSWORD_ENV)
                    .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.into()),
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "session=abc; Path=/")
                    .set_body_json(json!({"ok": true})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .and(header("cookie", "session=abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"role": "ADMIN"})))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let text = tokio::task::spawn_blocking(move || {
            let dir = tempfile::tempdir().unwrap();
            let mut tui = tui(
                dir.path(),
                &uri,
                vec![
                    Answer::Select(0),
                    Answer::Select(4),
                    Answer::Select(0),
                    Answer::Select(0),
                    Answer::Text(""),
                    Answer::Text(""),
                    Answer::Select(2),
                    Answer::Select(5),
                    Answer::Select(11),
                ],
            );
            tui.run().unwrap();
            assert!(dir.path().join("admin.cookies").exists());
            printed(tui)
        })
        .await
        .unwrap();

        assert!(text.contains("\"role\": \"ADMIN\""));
    }

    #[tokio::test]
    async fn test_storefront_demo_checks_out_as_guest() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/catalog/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"id": "p1", "title": "Athletic Tee", "slug": "athletic-tee"}],
                "total": 1
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/catalog/products/athletic-tee"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "p1",
                "slug": "athletic-tee",
                "variants": [{"id": "v1"}, {"id": "v2"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/cart/items"))
            .and(body_json(json!({"variantId": "v1", "quantity": 2})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/cart"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": "i1"}]})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/checkout"))
            .and(body_json(json!({"email": "buyer@local.test"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"orderId": "o1"})))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let text = tokio::task::spawn_blocking(move || {
            let dir = tempfile::tempdir().unwrap();
            let mut tui = tui(dir.path(), &uri, vec![Answer::Select(9), Answer::Select(11)]);
            tui.run().unwrap();
            printed(tui)
        })
        .await
        .unwrap();

        assert!(text.contains("\"orderId\": \"o1\""));
        assert!(text.contains("Order placed."));
    }
}
