use crate::error::LedgerError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// A character that can receive votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Entity {
    #[serde(rename = "Obiwan Kenobi")]
    ObiwanKenobi,
    #[serde(rename = "Dark Vador")]
    DarkVador,
    #[serde(rename = "Luke Skywalker")]
    LukeSkywalker,
    #[serde(rename = "Yoda")]
    Yoda,
    #[serde(rename = "R2D2")]
    R2d2,
    #[serde(rename = "C3PO")]
    C3po,
    #[serde(rename = "Chewbacca")]
    Chewbacca,
    #[serde(rename = "Han Solo")]
    HanSolo,
    #[serde(rename = "Padmé Amidala")]
    PadmeAmidala,
    #[serde(rename = "Anakin Skywalker")]
    AnakinSkywalker,
    #[serde(rename = "Palpatine")]
    Palpatine,
    #[serde(rename = "Maitre Windu")]
    MaitreWindu,
}

impl Entity {
    pub const ALL: [Entity; 12] = [
        Entity::ObiwanKenobi,
        Entity::DarkVador,
        Entity::LukeSkywalker,
        Entity::Yoda,
        Entity::R2d2,
        Entity::C3po,
        Entity::Chewbacca,
        Entity::HanSolo,
        Entity::PadmeAmidala,
        Entity::AnakinSkywalker,
        Entity::Palpatine,
        Entity::MaitreWindu,
    ];

    /// Name written to the ledger and shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Entity::ObiwanKenobi => "Obiwan Kenobi",
            Entity::DarkVador => "Dark Vador",
            Entity::LukeSkywalker => "Luke Skywalker",
            Entity::Yoda => "Yoda",
            Entity::R2d2 => "R2D2",
            Entity::C3po => "C3PO",
            Entity::Chewbacca => "Chewbacca",
            Entity::HanSolo => "Han Solo",
            Entity::PadmeAmidala => "Padmé Amidala",
            Entity::AnakinSkywalker => "Anakin Skywalker",
            Entity::Palpatine => "Palpatine",
            Entity::MaitreWindu => "Maitre Windu",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Entity::ObiwanKenobi => "obiwan-kenobi",
            Entity::DarkVador => "dark-vador",
            Entity::LukeSkywalker => "luke-skywalker",
            Entity::Yoda => "yoda",
            Entity::R2d2 => "r2d2",
            Entity::C3po => "c3po",
            Entity::Chewbacca => "chewbacca",
            Entity::HanSolo => "han-solo",
            Entity::PadmeAmidala => "padme-amidala",
            Entity::AnakinSkywalker => "anakin-skywalker",
            Entity::Palpatine => "palpatine",
            Entity::MaitreWindu => "maitre-windu",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Entity {
    type Err = LedgerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(LedgerError::Validation("character must not be empty".into()));
        }
        Entity::ALL
            .into_iter()
            .find(|e| same_name(e.label(), s) || same_name(e.slug(), s))
            .ok_or_else(|| LedgerError::Validation(format!("unknown character: {s}")))
    }
}

/// Unicode-aware case-insensitive match, so `PADMÉ` equals `Padmé`.
fn same_name(known: &str, input: &str) -> bool {
    known.to_lowercase() == input.to_lowercase()
}

/// The faction a vote is cast for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[serde(rename = "Dark Side")]
    DarkSide,
    #[serde(rename = "Light Side")]
    LightSide,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::DarkSide, Category::LightSide];

    pub fn display_name(self) -> &'static str {
        match self {
            Category::DarkSide => "Dark Side",
            Category::LightSide => "Light Side",
        }
    }

    /// Column value in the ledger file.
    pub fn ledger_label(self) -> &'static str {
        match self {
            Category::DarkSide => "Côté Obscur",
            Category::LightSide => "Côté Lumineux",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Category::DarkSide => "dark",
            Category::LightSide => "light",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(LedgerError::Validation("side must not be empty".into()));
        }
        Category::ALL
            .into_iter()
            .find(|c| {
                same_name(c.display_name(), s)
                    || same_name(c.ledger_label(), s)
                    || same_name(c.slug(), s)
            })
            .ok_or_else(|| LedgerError::Validation(format!("unknown side: {s}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vote {
    pub timestamp: NaiveDateTime,
    pub entity: Entity,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Regular,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub username: String,
    pub display_name: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated(Identity),
    Rejected,
    NotAttempted,
}

impl AuthOutcome {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthOutcome::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            AuthOutcome::Authenticated(_) => "authenticated",
            AuthOutcome::Rejected => "rejected",
            AuthOutcome::NotAttempted => "not_attempted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetDecision {
    Permitted,
    Denied,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityCount {
    pub rank: usize,
    pub entity: Entity,
    pub votes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub total: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub ranking: Vec<EntityCount>,
    pub top: Vec<EntityCount>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub ledger: LedgerSection,
    #[serde(default)]
    pub auth: AuthSection,
    #[serde(default)]
    pub accounts: Vec<AccountRecord>,
}

#[derive(Debug, Deserialize, Default)]
pub struct LedgerSection {
    pub path: Option<String>,
}

fn default_admin_username() -> String {
    crate::domain::constants::DEFAULT_ADMIN_USERNAME.to_string()
}

#[derive(Debug, Deserialize)]
pub struct AuthSection {
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
}

impl Default for AuthSection {
    fn default() -> Self {
        Self {
            admin_username: default_admin_username(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AccountRecord {
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub role: Role,
    /// Lower-case hex SHA-256 of the password.
    pub password_sha256: String,
}

#[derive(Serialize)]
pub struct WhoAmIReport {
    pub status: String,
    pub identity: Option<Identity>,
    pub can_reset: bool,
}

/// Presentation card for one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterProfile {
    pub slug: &'static str,
    pub label: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

impl From<Entity> for CharacterProfile {
    fn from(entity: Entity) -> Self {
        Self {
            slug: entity.slug(),
            label: entity.label(),
            bio: entity.bio(),
            image: entity.image(),
        }
    }
}

#[derive(Serialize)]
pub struct CatalogItem {
    pub kind: String,
    pub slug: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::{Category, CharacterProfile, Entity};
    use std::str::FromStr;

    #[test]
    fn entity_parses_labels_and_slugs() {
        assert_eq!(Entity::from_str("Yoda").unwrap(), Entity::Yoda);
        assert_eq!(
            Entity::from_str("  luke skywalker ").unwrap(),
            Entity::LukeSkywalker
        );
        assert_eq!(Entity::from_str("padme-amidala").unwrap(), Entity::PadmeAmidala);
        assert_eq!(Entity::from_str("Padmé Amidala").unwrap(), Entity::PadmeAmidala);
        assert!(Entity::from_str("Jar Jar").is_err());
        assert!(Entity::from_str("   ").is_err());
    }

    #[test]
    fn category_accepts_display_ledger_and_slug_forms() {
        assert_eq!(Category::from_str("Light Side").unwrap(), Category::LightSide);
        assert_eq!(Category::from_str("Côté Obscur").unwrap(), Category::DarkSide);
        assert_eq!(Category::from_str("DARK").unwrap(), Category::DarkSide);
        assert!(Category::from_str("").is_err());
        assert!(Category::from_str("Grey Side").is_err());
    }

    #[test]
    fn accented_names_match_in_any_case() {
        assert_eq!(Entity::from_str("PADMÉ AMIDALA").unwrap(), Entity::PadmeAmidala);
        assert_eq!(Entity::from_str("padmé amidala").unwrap(), Entity::PadmeAmidala);
        assert_eq!(Category::from_str("CÔTÉ OBSCUR").unwrap(), Category::DarkSide);
        assert_eq!(Category::from_str("côté lumineux").unwrap(), Category::LightSide);
        assert!(Entity::from_str("PADME AMIDALA").is_err());
    }

    #[test]
    fn every_character_has_a_profile() {
        for entity in Entity::ALL {
            let profile = CharacterProfile::from(entity);
            assert_eq!(profile.label, entity.label());
            assert!(!profile.bio.is_empty());
            assert!(profile.image.starts_with("Images/"));
        }
    }

    #[test]
    fn closed_sets_have_expected_sizes() {
        assert_eq!(Entity::ALL.len(), 12);
        assert_eq!(Category::ALL.len(), 2);
    }
}
