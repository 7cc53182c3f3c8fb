//! Menu-driven terminal front-end (`vexo-tui`).
//!
//! A [`Tui`] owns a [`SessionContext`], a [`Prompter`] and an [`Output`].
//! Menus loop until the user picks "Back". A failed action prints its error
//! and returns to the menu it was started from; only a prompt failure (for
//! example a closed terminal) ends the program.
//!
//! ```rust,ignore
//! use vexo_store::tui::{DialoguerPrompter, SessionContext, Tui};
//! use vexo_store::output::Output;
//!
//! let ctx = SessionContext::new(base_url, SessionProfiles::default(), true)?;
//! Tui::new(ctx, DialoguerPrompter::new(), Output::stdout()).run()?;
//! ```

mod admin;
mod prompt;
mod session;
mod store;

pub use prompt::{DialoguerPrompter, Prompter};
pub use session::SessionContext;

use std::fmt::Display;
use std::io::{self, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::clients::HttpError;
use crate::error::ConfigError;
use crate::output::Output;
use crate::resources::FieldUpdate;
use crate::scenarios::ScenarioError;

/// Errors raised by a menu action.
#[derive(Debug, Error)]
pub enum TuiError {
    /// The terminal could not be read or written.
    #[error("Prompt failed: {0}")]
    Io(#[from] io::Error),

    /// A request failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A settings change is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A scenario aborted.
    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    /// A raw JSON payload did not parse.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An answer could not be parsed.
    #[error("Invalid value '{value}': {reason}")]
    InvalidValue {
        /// The answer given.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

const MAIN_MENU: &[&str] = &[
    "Auth",
    "Admin: Brands",
    "Admin: Categories",
    "Admin: Products / Options / Variants / Stock",
    "Admin: Coupons",
    "Admin: Orders & Stats",
    "Catalog / Cart / Checkout",
    "Account (customer)",
    "Demo: Admin seed",
    "Demo: Storefront flow",
    "Settings",
    "Exit",
];

/// The interactive front-end.
#[derive(Debug)]
pub struct Tui<P, W: Write> {
    ctx: SessionContext,
    prompter: P,
    out: Output<W>,
}

impl<P: Prompter, W: Write> Tui<P, W> {
    /// Creates a front-end.
    pub const fn new(ctx: SessionContext, prompter: P, out: Output<W>) -> Self {
        Self { ctx, prompter, out }
    }

    /// The session context.
    pub const fn context(&self) -> &SessionContext {
        &self.ctx
    }

    /// Returns the parts, e.g. to inspect captured output.
    pub fn into_parts(self) -> (SessionContext, P, Output<W>) {
        (self.ctx, self.prompter, self.out)
    }

    /// Runs the main menu until the user exits.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the terminal fails.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let choice = self.menu("Vexo Store - Terminal Tester", MAIN_MENU)?;
            match choice {
                0 => self.auth_menu()?,
                1 => self.brands_menu()?,
                2 => self.categories_menu()?,
                3 => self.products_menu()?,
                4 => self.coupons_menu()?,
                5 => self.orders_menu()?,
                6 => self.catalog_cart_menu()?,
                7 => self.account_menu()?,
                8 => self.seed_demo()?,
                9 => self.storefront_demo()?,
                10 => self.settings_menu()?,
                _ => {
                    self.out.line("bye!")?;
                    return self.out.flush();
                }
            }
        }
    }

    /// Prints a titled header with the active session and asks for a choice.
    fn menu(&mut self, title: &str, items: &[&str]) -> io::Result<usize> {
        self.out.divider(title)?;
        self.out.line(&format!(
            "Active: {}  |  Base: {}",
            self.ctx.active(),
            self.ctx.base_url()
        ))?;
        self.out.flush()?;
        self.prompter.select(">", items, 0)
    }

    /// Prints an action's error and carries on; prompt failures propagate.
    fn report(&mut self, result: Result<(), TuiError>) -> io::Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(TuiError::Io(e) | TuiError::Scenario(ScenarioError::Output(e))) => Err(e),
            Err(e) => self.out.error(&e.to_string()),
        }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.prompter.input(prompt, None)
    }

    fn ask_or(&mut self, prompt: &str, default: &str) -> io::Result<String> {
        self.prompter.input(prompt, Some(default))
    }

    /// Asks for an optional value; blank is `None`.
    fn ask_opt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let answer = self.prompter.input(prompt, Some(""))?;
        Ok(Some(answer).filter(|a| !a.is_empty()))
    }

    /// Asks until the answer parses as `T`.
    fn ask_parsed<T>(&mut self, prompt: &str, default: T) -> io::Result<T>
    where
        T: FromStr + Display,
    {
        let default = default.to_string();
        loop {
            let answer = self.prompter.input(prompt, Some(&default))?;
            if let Ok(value) = answer.parse() {
                return Ok(value);
            }
            self.out.error("Enter a valid integer.")?;
        }
    }

    /// "Change X?" then the new value; a blank value clears the field.
    fn ask_update(&mut self, field: &str) -> io::Result<FieldUpdate<String>> {
        if !self.prompter.confirm(&format!("Change {field}?"), false)? {
            return Ok(FieldUpdate::Unchanged);
        }
        let value = self.ask(field)?;
        Ok(FieldUpdate::from_flag(Some(value)))
    }

    fn confirm_delete(&mut self) -> io::Result<bool> {
        self.prompter.confirm("Really delete?", true)
    }
}

fn parse_value<T>(value: &str) -> Result<T, TuiError>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse().map_err(|e: T::Err| TuiError::InvalidValue {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
