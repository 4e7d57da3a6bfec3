//! setup-shfmt CLI entry point
//!
//! Parses flags, installs logging, runs the installer and turns any failure
//! into one user-facing message and exit status 1. On GitHub Actions the
//! failure is also reported as an `::error::` annotation.

use anyhow::Result;
use clap::Parser;
use setup_shfmt::ci;
use setup_shfmt::cli::{self, Cli};
use setup_shfmt::core::user_friendly_error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    cli::init_logging(cli.log_level())?;

    match cli.execute().await {
        Ok(_) => Ok(()),
        Err(e) => {
            ci::set_failed(&e.to_string());
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}
