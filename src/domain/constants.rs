/// Header line of the ledger file. Column names match files written by
/// earlier versions of the dashboard.
pub const LEDGER_HEADER: [&str; 3] = ["timestamp", "personnage", "camp"];

/// Timestamp layout stored in the ledger (ISO-8601, second precision, no offset).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub const DEFAULT_ADMIN_USERNAME: &str = "DarkVador";

pub const DEFAULT_TOP: usize = 3;

pub const APP_DIR: &str = "holovote";
pub const LEDGER_FILE: &str = "votes.csv";
pub const CONFIG_FILE: &str = "config.toml";
pub const AUDIT_FILE: &str = "audit.jsonl";

/// Built-in accounts used when the config file declares none:
/// (username, display name, admin, sha256 of the password).
pub const DEMO_ACCOUNTS: [(&str, &str, bool, &str); 2] = [
    (
        "ObiwanKenobi",
        "ObiwanKenobi",
        false,
        "784b35dcd1768c0e05f1ccb75b017f62163a6d0d1b252bbb54eb0cb14c28d9fc",
    ),
    (
        "DarkVador",
        "Dark Vador",
        true,
        "1cb5e7d45d934d25478ff18b818e340597864ed619359cd1cc5fbaf6d462e528",
    ),
];
