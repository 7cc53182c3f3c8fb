//! Command-line front-end (`vexo-admin`).
//!
//! Every subcommand maps onto one resource helper call (or one scenario)
//! and prints the server's answer as indented JSON on stdout. Progress and
//! request lines go to the log on stderr.
//!
//! Update subcommands only send the flags that were given. Passing an empty
//! string, e.g. `--description ""`, clears the field.
//!
//! # Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | success |
//! | 1 | local error (bad configuration, malformed `--json`, empty `--email` or `--password`) |
//! | 2 | the API answered with a non-2xx status |
//! | 3 | network failure |
//!
//! Credentials are checked before anything is sent, so `login --email ""`
//! exits with 1 without contacting the server.

mod admin;
mod store;

use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::clients::{ApiClient, HttpError};
use crate::config::{
    BaseUrl, Credentials, StoreConfig, ADMIN_EMAIL_ENV, ADMIN_PASSWORD_ENV, BASE_URL_ENV,
    DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD, DEFAULT_BASE_URL,
};
use crate::error::ConfigError;
use crate::output::Output;
use crate::resources::{FieldUpdate, ListParams, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::scenarios::{self, ScenarioError};

pub use admin::{
    BrandsCommand, CategoriesCommand, CouponsCommand, GenerateCommand, OptionsCommand,
    OrdersCommand, ProductsCommand, VariantsCommand,
};
pub use store::{AccountCommand, CartCommand, CatalogCommand};

/// Admin and storefront automation for the Vexo store API.
#[derive(Debug, Parser)]
#[command(name = "vexo-admin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// API base URL
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Path to persist cookies between runs
    #[arg(long, global = true)]
    pub cookie_file: Option<PathBuf>,

    /// Less verbose output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session cookie
    Login(LoginArgs),

    /// Register a customer account
    Register {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,

        /// Display name
        #[arg(long, default_value = "User")]
        name: String,
    },

    /// Show the current user
    Me,

    /// End the current session
    Logout,

    /// Brand operations
    #[command(subcommand)]
    Brands(BrandsCommand),

    /// Category operations
    #[command(subcommand)]
    Categories(CategoriesCommand),

    /// Product operations
    #[command(subcommand)]
    Products(ProductsCommand),

    /// Product option operations
    #[command(subcommand)]
    Options(OptionsCommand),

    /// Variant and stock operations
    #[command(subcommand)]
    Variants(VariantsCommand),

    /// Coupon operations
    #[command(subcommand)]
    Coupons(CouponsCommand),

    /// Order operations
    #[command(subcommand)]
    Orders(OrdersCommand),

    /// Show store statistics
    Stats,

    /// Browse the public catalog
    #[command(subcommand)]
    Catalog(CatalogCommand),

    /// Cart operations
    #[command(subcommand)]
    Cart(CartCommand),

    /// Place an order for the cart's contents
    Checkout {
        /// Guest email; omit to use the signed-in account
        #[arg(long)]
        email: Option<String>,
    },

    /// The signed-in customer's orders
    #[command(subcommand)]
    Account(AccountCommand),

    /// Run the end-to-end demo (login, brand and category CRUD)
    Demo(LoginArgs),

    /// Seed a brand, categories and a product with variants
    Seed(LoginArgs),

    /// Browse the catalog, fill a cart and check out as a guest
    Storefront,
}

/// Admin credentials, defaulting to the environment.
#[derive(Debug, Clone, Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(long, env = ADMIN_EMAIL_ENV, default_value = DEFAULT_ADMIN_EMAIL)]
    pub email: String,

    /// Account password
    #[arg(long, env = ADMIN_PASSWORD_ENV, default_value = DEFAULT_ADMIN_PASSWORD, hide_env_values = true, hide_default_value = true)]
    pub password: String,
}

impl LoginArgs {
    fn credentials(&self) -> Result<Credentials, ConfigError> {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

/// Paging and search flags shared by list subcommands.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Search term
    #[arg(long, default_value = "")]
    pub q: String,

    /// Page number
    #[arg(long, default_value_t = DEFAULT_PAGE)]
    pub page: u32,

    /// Page size
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

impl ListArgs {
    fn params(&self) -> ListParams {
        ListParams::page(self.page, self.page_size).with_query(self.q.clone())
    }
}

/// Errors surfaced by the command-line front-end.
#[derive(Debug, Error)]
pub enum CliError {
    /// A request failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A scenario aborted.
    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    /// A `--json` argument is not valid JSON of the expected shape.
    #[error("Invalid JSON for {flag}: {source}")]
    Json {
        /// The offending flag.
        flag: &'static str,
        /// The parse error.
        source: serde_json::Error,
    },

    /// A flag value could not be parsed.
    #[error("Invalid value '{value}' for {flag}: {reason}")]
    InvalidValue {
        /// The offending flag.
        flag: &'static str,
        /// The value given.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Output could not be written.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Http(error) | Self::Scenario(ScenarioError::Http(error)) => http_exit_code(error),
            _ => 1,
        }
    }
}

const fn http_exit_code(error: &HttpError) -> i32 {
    match error {
        HttpError::Api(_) => 2,
        HttpError::Network(_) => 3,
        _ => 1,
    }
}

impl Cli {
    /// Builds the client configuration from the global flags.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL is invalid.
    pub fn config(&self) -> Result<StoreConfig, ConfigError> {
        StoreConfig::builder()
            .base_url(BaseUrl::new(self.base_url.as_str())?)
            .maybe_cookie_file(self.cookie_file.clone())
            .verbose(!self.quiet)
            .build()
    }
}

/// Runs a parsed command line, printing results to `out`.
///
/// # Errors
///
/// Returns [`CliError`] on the first failure; see
/// [`CliError::exit_code`] for how it maps to an exit status.
pub fn run<W: Write>(cli: Cli, out: &mut Output<W>) -> Result<(), CliError> {
    let config = cli.config()?;
    let client = ApiClient::new(&config)?;
    dispatch(&client, cli.command, out)?;
    out.flush()?;
    Ok(())
}

fn dispatch<W: Write>(
    client: &ApiClient,
    command: Command,
    out: &mut Output<W>,
) -> Result<(), CliError> {
    match command {
        Command::Login(args) => {
            out.body(&client.auth().login(&args.credentials()?)?)?;
        }
        Command::Register {
            email,
            password,
            name,
        } => {
            let credentials = Credentials::new(email, password)?;
            out.body(&client.auth().register(&credentials, &name)?)?;
        }
        Command::Me => out.body(&client.auth().me()?)?,
        Command::Logout => out.body(&client.auth().logout()?)?,
        Command::Brands(command) => admin::brands(client, command, out)?,
        Command::Categories(command) => admin::categories(client, command, out)?,
        Command::Products(command) => admin::products(client, command, out)?,
        Command::Options(command) => admin::options(client, command, out)?,
        Command::Variants(command) => admin::variants(client, command, out)?,
        Command::Coupons(command) => admin::coupons(client, command, out)?,
        Command::Orders(command) => admin::orders(client, command, out)?,
        Command::Stats => out.body(&client.orders().stats()?)?,
        Command::Catalog(command) => store::catalog(client, command, out)?,
        Command::Cart(command) => store::cart(client, command, out)?,
        Command::Checkout { email } => store::checkout(client, email, out)?,
        Command::Account(command) => store::account(client, command, out)?,
        Command::Demo(args) => {
            scenarios::admin_demo(client, &args.credentials()?, out)?;
            tracing::info!("Demo complete");
        }
        Command::Seed(args) => {
            let report = scenarios::admin_seed(client, &args.credentials()?, out)?;
            out.json(&report)?;
        }
        Command::Storefront => {
            scenarios::storefront(client, out)?;
        }
    }
    Ok(())
}

/// Parses a raw `--json` payload.
fn parse_json<T: serde::de::DeserializeOwned>(flag: &'static str, raw: &str) -> Result<T, CliError> {
    serde_json::from_str(raw).map_err(|source| CliError::Json { flag, source })
}

/// Interprets a typed update flag: absent is unchanged, an empty string
/// clears the field, anything else must parse as `T`.
fn parse_update<T>(flag: &'static str, value: Option<String>) -> Result<FieldUpdate<T>, CliError>
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        None => Ok(FieldUpdate::Unchanged),
        Some(v) if v.is_empty() => Ok(FieldUpdate::Clear),
        Some(v) => v
            .parse()
            .map(FieldUpdate::Set)
            .map_err(|e: T::Err| CliError::InvalidValue {
                flag,
                reason: e.to_string(),
                value: v,
            }),
    }
}
