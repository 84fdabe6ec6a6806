use crate::domain::constants::DEMO_ACCOUNTS;
use crate::domain::models::{AccountRecord, AuthOutcome, Identity, Role};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::debug;

pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

pub fn demo_accounts() -> Vec<AccountRecord> {
    DEMO_ACCOUNTS
        .iter()
        .map(|(username, display_name, admin, digest)| AccountRecord {
            username: username.to_string(),
            display_name: display_name.to_string(),
            role: if *admin { Role::Admin } else { Role::Regular },
            password_sha256: digest.to_string(),
        })
        .collect()
}

/// Resolves a login attempt against the account directory.
pub fn authenticate(
    accounts: &[AccountRecord],
    username: Option<&str>,
    password: Option<&str>,
) -> AuthOutcome {
    let Some(username) = username.map(str::trim).filter(|u| !u.is_empty()) else {
        return AuthOutcome::NotAttempted;
    };
    let Some(account) = accounts.iter().find(|a| a.username == username) else {
        debug!(username, "login for unknown account");
        return AuthOutcome::Rejected;
    };

    let supplied = hash_password(password.unwrap_or_default());
    let expected = account.password_sha256.trim().to_ascii_lowercase();
    if bool::from(supplied.as_bytes().ct_eq(expected.as_bytes())) {
        AuthOutcome::Authenticated(Identity {
            username: account.username.clone(),
            display_name: account.display_name.clone(),
            role: account.role,
        })
    } else {
        debug!(username, "login with wrong password");
        AuthOutcome::Rejected
    }
}
