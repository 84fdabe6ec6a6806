//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `ledger.rs`: append-only CSV vote ledger (init/append/load/reset).
//! - `tally.rs`: pure totals, per-side counts, ranking and top-N.
//! - `policy.rs`: reset authorization predicate.
//! - `accounts.rs`: account directory and credential checks.
//! - `config.rs`: TOML config loading and ledger path resolution.
//! - `storage.rs`: well-known paths + audit log.
//! - `output.rs`: JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod accounts;
pub mod config;
pub mod ledger;
pub mod output;
pub mod policy;
pub mod storage;
pub mod tally;
