use crate::domain::constants::{APP_DIR, AUDIT_FILE, CONFIG_FILE, LEDGER_FILE};
use std::path::PathBuf;

fn home() -> anyhow::Result<PathBuf> {
    Ok(PathBuf::from(std::env::var("HOME")?))
}

pub fn config_dir() -> anyhow::Result<PathBuf> {
    Ok(home()?.join(".config").join(APP_DIR))
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

pub fn default_ledger_path() -> anyhow::Result<PathBuf> {
    Ok(home()?
        .join(".local")
        .join("share")
        .join(APP_DIR)
        .join(LEDGER_FILE))
}

/// Best-effort JSONL audit trail; failures never surface to the caller.
pub fn audit(action: &str, data: serde_json::Value) {
    let path = match config_dir() {
        Ok(dir) => dir.join(AUDIT_FILE),
        Err(_) => return,
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}
