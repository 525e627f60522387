use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    consts::MULTISIG_FILE,
    traits::{FileConfigWithDefaultName, RegistryCollection},
};

/// Default ISM multisig validator sets keyed by chain name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultisigConfigs(pub BTreeMap<String, MultisigConfig>);

impl MultisigConfigs {
    pub fn get(&self, chain: &str) -> Option<&MultisigConfig> {
        self.0.get(chain)
    }
}

/// Signing threshold over an ordered validator set.
/// Invariant (checked at load time): `threshold <= validators.len()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultisigConfig {
    pub threshold: usize,
    #[serde(default)]
    pub validators: Vec<ValidatorEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorEntry {
    pub address: String,
    pub alias: String,
}

impl FileConfigWithDefaultName for MultisigConfigs {
    const FILE_NAME: &'static str = MULTISIG_FILE;
}

impl RegistryCollection for MultisigConfigs {}
