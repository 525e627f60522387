use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Network environment a chain belongs to.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    Mainnet,
    Testnet,
}

impl Environment {
    pub fn is_testnet(&self) -> bool {
        matches!(self, Environment::Testnet)
    }

    /// Capitalized form used in document titles and section headings.
    pub fn title(&self) -> &'static str {
        match self {
            Environment::Mainnet => "Mainnet",
            Environment::Testnet => "Testnet",
        }
    }
}
