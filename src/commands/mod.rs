//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `admin.rs`: ledger reset behind the admin gate.
//! - `runtime.rs`: vote/stats/ranking/top/list/characters/whoami.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod admin;
pub mod runtime;

pub use admin::handle_admin_commands;
pub use runtime::handle_runtime_commands;

use crate::cli::Credentials;
use crate::domain::models::{AccountRecord, AuthOutcome, Identity};
use crate::error::LedgerError;
use crate::services::accounts::authenticate;
use crate::services::ledger::Ledger;

/// Everything a command needs, resolved once per invocation.
pub struct AppContext {
    pub ledger: Ledger,
    pub accounts: Vec<AccountRecord>,
    pub admin_username: String,
}

impl AppContext {
    pub fn login(&self, credentials: &Credentials) -> AuthOutcome {
        authenticate(
            &self.accounts,
            credentials.user.as_deref(),
            credentials.password.as_deref(),
        )
    }

    pub fn require_identity(&self, credentials: &Credentials) -> Result<Identity, LedgerError> {
        match self.login(credentials) {
            AuthOutcome::Authenticated(identity) => Ok(identity),
            AuthOutcome::Rejected => Err(LedgerError::AuthRejected),
            AuthOutcome::NotAttempted => Err(LedgerError::AuthRequired),
        }
    }
}
