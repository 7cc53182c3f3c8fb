//! `vexo-admin`: one-shot admin and storefront commands against a Vexo store.
//!
//! ```bash
//! vexo-admin --cookie-file .admin.cookies login
//! vexo-admin --cookie-file .admin.cookies brands create --name Orbit --slug orbit
//! vexo-admin seed
//! vexo-admin --quiet catalog products --sort title_asc
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vexo_store::cli::{run, Cli};
use vexo_store::output::Output;

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli, &mut Output::stdout()) {
        eprintln!("{} {e}", console::style("error:").red().bold());
        std::process::exit(e.exit_code());
    }
}
