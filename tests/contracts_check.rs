mod common;

use common::{TestEnv, ADMIN};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();

    let empty = env.run_json(&["stats"]);
    assert_eq!(empty["ok"], true);
    validate("stats.schema.json", &empty["data"]);

    let vote = env.vote("padme-amidala", "light");
    assert_eq!(vote["ok"], true);
    validate("vote.schema.json", &vote["data"]);
    env.vote("palpatine", "dark");
    env.vote("palpatine", "dark");

    let stats = env.run_json(&["stats"]);
    validate("stats.schema.json", &stats["data"]);

    let ranking = env.run_json(&["ranking"]);
    validate("ranking.schema.json", &ranking["data"]);

    let top = env.run_json(&["top", "1"]);
    validate("ranking.schema.json", &top["data"]);

    let card = env.run_json(&["characters", "show", "han-solo"]);
    validate("character.schema.json", &card["data"]);

    let album = env.run_json(&["characters", "album"]);
    for card in album["data"].as_array().expect("album") {
        validate("character.schema.json", card);
    }

    let anonymous = env.run_json(&["whoami"]);
    validate("whoami.schema.json", &anonymous["data"]);

    let admin = env.run_json(&["whoami", "--user", ADMIN.0, "--password", ADMIN.1]);
    validate("whoami.schema.json", &admin["data"]);
}
