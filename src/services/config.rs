use crate::domain::models::{AccountRecord, ConfigFile};
use crate::error::LedgerError;
use crate::services::accounts::demo_accounts;
use crate::services::storage::{default_config_path, default_ledger_path};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads the TOML config. A missing file yields defaults; a file that
/// exists but does not parse is an error.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if !path.exists() {
        if explicit.is_some() {
            return Err(LedgerError::Config(format!(
                "config file not found: {}",
                path.display()
            ))
            .into());
        }
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| LedgerError::Config(format!("{}: {e}", path.display())))?;
    let config = parse_config(&raw)
        .map_err(|e| LedgerError::Config(format!("{}: {e}", path.display())))?;
    Ok(config)
}

pub fn parse_config(raw: &str) -> Result<ConfigFile, toml::de::Error> {
    toml::from_str(raw)
}

/// `--ledger`/`HOLOVOTE_LEDGER` beats `[ledger].path`, which beats the default.
pub fn resolve_ledger_path(
    cli_override: Option<&Path>,
    config: &ConfigFile,
) -> anyhow::Result<PathBuf> {
    if let Some(p) = cli_override {
        return Ok(p.to_path_buf());
    }
    if let Some(p) = config.ledger.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(p));
    }
    default_ledger_path()
}

pub fn accounts(config: &ConfigFile) -> Vec<AccountRecord> {
    if config.accounts.is_empty() {
        demo_accounts()
    } else {
        config.accounts.clone()
    }
}
