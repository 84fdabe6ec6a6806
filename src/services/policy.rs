use crate::domain::models::{Identity, ResetDecision};

/// Reset is allowed only for the designated administrator account.
///
/// Keys on the resolved username, not the role claim. An absent identity
/// or an empty configured admin name never matches.
pub fn authorize_reset(identity: Option<&Identity>, admin_username: &str) -> ResetDecision {
    match identity {
        Some(id) if !admin_username.is_empty() && id.username == admin_username => {
            ResetDecision::Permitted
        }
        _ => ResetDecision::Denied,
    }
}
