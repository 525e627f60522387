use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// Core contract deployments tracked per chain in the registry.
///
/// The camelCase keys match the registry's address maps and double as the
/// output file stems of the per-contract deployment documents.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    AsRefStr,
    strum::Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ContractKind {
    Mailbox,
    InterchainAccountRouter,
    InterchainGasPaymaster,
    ValidatorAnnounce,
    MerkleTreeHook,
    ProxyAdmin,
    StorageGasOracle,
    TestRecipient,
}

impl ContractKind {
    /// Registry address-map key, e.g. `interchainAccountRouter`.
    pub fn key(&self) -> &str {
        self.as_ref()
    }
}
