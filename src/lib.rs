//! # Vexo Store Client
//!
//! A blocking client for the Vexo store REST API, plus two front-ends built
//! on it: the `vexo-admin` command line and the `vexo-tui` menu tester.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StoreConfig`] and [`StoreConfigBuilder`]
//! - An [`ApiClient`] that keeps the server's session cookie in a file, so
//!   a login survives between runs
//! - Resource handles for auth, brands, categories, products, variants,
//!   coupons, orders, the public catalog and the cart
//! - Idempotent `ensure_*` helpers that create an entity or fall back to
//!   the existing one when the server reports a conflict
//! - Scripted admin and storefront flows in [`scenarios`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vexo_store::{ApiClient, BaseUrl, Credentials, StoreConfig};
//! use vexo_store::resources::NewBrand;
//!
//! let config = StoreConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:3000").unwrap())
//!     .cookie_file(".admin.cookies")
//!     .build()
//!     .unwrap();
//! let client = ApiClient::new(&config).unwrap();
//!
//! client
//!     .auth()
//!     .login(&Credentials::new("admin@local.test", "admin123!").unwrap())
//!     .unwrap();
//!
//! let brand = client
//!     .brands()
//!     .ensure(&NewBrand {
//!         name: "Orbit".to_string(),
//!         slug: Some("orbit".to_string()),
//!         ..Default::default()
//!     })
//!     .unwrap();
//! println!("brand {}", brand.id);
//! ```
//!
//! ## Errors
//!
//! Every request returns `Result<_, HttpError>`. A non-2xx response becomes
//! [`HttpError::Api`] carrying an [`ApiError`] with the status, method, path
//! and decoded body:
//!
//! ```rust,ignore
//! match client.brands().get("missing") {
//!     Err(HttpError::Api(e)) if e.is_not_found() => println!("gone"),
//!     Err(e) => return Err(e.into()),
//!     Ok(brand) => println!("{}", brand.pretty()),
//! }
//! ```

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod output;
pub mod resources;
pub mod scenarios;
pub mod session;
pub mod tui;

// Re-export public types at crate root for convenience
pub use clients::{ApiClient, ApiError, HttpError, ResponseBody};
pub use config::{BaseUrl, Credentials, Password, StoreConfig, StoreConfigBuilder};
pub use error::ConfigError;
