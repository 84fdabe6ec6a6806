//! Shared data model layer (types/constants only).
//!
//! ## Files
//! - `models.rs`: votes, closed entity/category sets, identities, tally and report structs.
//! - `profiles.rs`: per-character biography and portrait table.
//! - `constants.rs`: ledger header, timestamp layout, default paths and demo accounts.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Serialized names here feed `--json` output and the ledger file.
//! Keep changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
pub mod profiles;
