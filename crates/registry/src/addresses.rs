use std::collections::BTreeMap;

use hyperdoc_types::ContractKind;
use serde::{Deserialize, Serialize};

use crate::{
    consts::ADDRESSES_FILE,
    traits::{FileConfigWithDefaultName, RegistryCollection},
};

/// Contract addresses keyed by chain name, then by registry contract key.
///
/// Inner keys stay raw strings: the registry tracks more contract kinds than
/// these documents render, and unknown keys must not fail the load. An absent
/// entry means the contract is not deployed on that chain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainAddresses(pub BTreeMap<String, BTreeMap<String, String>>);

impl ChainAddresses {
    pub fn get(&self, chain: &str, kind: ContractKind) -> Option<&str> {
        self.0.get(chain)?.get(kind.key()).map(String::as_str)
    }

    pub fn has_mailbox(&self, chain: &str) -> bool {
        self.get(chain, ContractKind::Mailbox).is_some()
    }
}

impl FileConfigWithDefaultName for ChainAddresses {
    const FILE_NAME: &'static str = ADDRESSES_FILE;
}

impl RegistryCollection for ChainAddresses {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_contract_kind() {
        let addresses: ChainAddresses = serde_yaml::from_str(
            r#"
            ethereum:
              mailbox: "0xc005dc82818d67AF737725bD4bf75435d065D239"
              domainRoutingIsmFactory: "0x1052eF3419f26Bec74Ed7CEf4a4FA6812Bc09908"
            "#,
        )
        .unwrap();

        assert!(addresses.has_mailbox("ethereum"));
        assert_eq!(
            addresses.get("ethereum", ContractKind::Mailbox),
            Some("0xc005dc82818d67AF737725bD4bf75435d065D239")
        );
        assert_eq!(addresses.get("ethereum", ContractKind::ProxyAdmin), None);
        assert!(!addresses.has_mailbox("unknown"));
    }
}
