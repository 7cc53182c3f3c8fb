//! `vexo-tui`: menu-driven tester for a Vexo store.
//!
//! Reads `STORE_BASE_URL` (or `.env`) for the store address. Cookies for the
//! admin, cart and user sessions are kept in `admin.cookies`,
//! `cart.cookies` and `user.cookies` in the working directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tracing_subscriber::EnvFilter;
use vexo_store::output::Output;
use vexo_store::session::SessionProfiles;
use vexo_store::tui::{DialoguerPrompter, SessionContext, Tui};
use vexo_store::StoreConfig;

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = start() {
        eprintln!("{} {e}", console::style("error:").red().bold());
        std::process::exit(1);
    }
}

fn start() -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let ctx = SessionContext::new(config.base_url().clone(), SessionProfiles::default(), true)?;
    Tui::new(ctx, DialoguerPrompter::new(), Output::stdout()).run()?;
    Ok(())
}
