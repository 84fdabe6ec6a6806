use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use error::LedgerError;
pub use services::config::{accounts, load_config, resolve_ledger_path};
pub use services::ledger::Ledger;
pub use services::output::{print_error, print_one, print_out};
pub use services::policy::authorize_reset;
pub use services::storage::audit;
pub use services::tally::{podium_medal, rank_entities, top_n};
pub use tracing::{debug, info, warn};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<LedgerError>()
                .map(LedgerError::code)
                .unwrap_or("INTERNAL");
            debug!(code, error = ?err, "command failed");
            print_error(cli.json, code, &err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let ledger_path = resolve_ledger_path(cli.ledger.as_deref(), &config)?;
    debug!(ledger = %ledger_path.display(), "resolved ledger path");

    let ctx = AppContext {
        ledger: Ledger::new(ledger_path),
        accounts: accounts(&config),
        admin_username: config.auth.admin_username.clone(),
    };

    if handle_admin_commands(cli, &ctx)? {
        return Ok(());
    }
    handle_runtime_commands(cli, &ctx)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
