#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const ADMIN: (&str, &str) = ("DarkVador", "L'empire");
pub const REGULAR: (&str, &str) = ("ObiwanKenobi", "Laforce");

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub ledger: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let ledger = home.join(".local/share/holovote/votes.csv");

        Self {
            _tmp: tmp,
            home,
            ledger,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("holovote");
        cmd.env("HOME", &self.home)
            .env_remove("HOLOVOTE_LEDGER")
            .env_remove("HOLOVOTE_CONFIG")
            .env_remove("HOLOVOTE_USER")
            .env_remove("HOLOVOTE_PASSWORD")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }

    pub fn vote(&self, entity: &str, side: &str) -> Value {
        self.run_json(&[
            "vote", entity, side, "--user", REGULAR.0, "--password", REGULAR.1,
        ])
    }

    pub fn write_config(&self, body: &str) -> PathBuf {
        let path = self.home.join(".config/holovote/config.toml");
        fs::create_dir_all(path.parent().expect("config parent")).expect("create config dir");
        fs::write(&path, body).expect("write config");
        path
    }
}
