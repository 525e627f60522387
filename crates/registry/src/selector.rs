use std::collections::BTreeSet;

use hyperdoc_types::Environment;

use crate::{
    consts::{ABACUS_WORKS_DEPLOYER_NAME, AVAILABILITY_DISABLED, EXCLUDED_CHAINS},
    metadata::ChainMetadata,
    registry::Registry,
};

/// Selects the chains these documents publish: deployed by the configured
/// publisher, in the requested environment, not disabled, not excluded and
/// (when required) carrying a mailbox address in the registry.
#[derive(Debug, Clone)]
pub struct ChainSelector {
    deployer: String,
    exclusions: BTreeSet<String>,
}

impl Default for ChainSelector {
    fn default() -> Self {
        Self::new(
            ABACUS_WORKS_DEPLOYER_NAME,
            EXCLUDED_CHAINS.iter().map(|name| name.to_string()),
        )
    }
}

impl ChainSelector {
    pub fn new(deployer: impl AsRef<str>, exclusions: impl IntoIterator<Item = String>) -> Self {
        Self {
            deployer: deployer.as_ref().trim().to_lowercase(),
            exclusions: exclusions.into_iter().collect(),
        }
    }

    /// Filters the registry down to the publishable chains for one
    /// environment, preserving registry iteration order.
    pub fn select<'a>(
        &self,
        registry: &'a Registry,
        environment: Environment,
        require_mailbox: bool,
    ) -> Vec<&'a ChainMetadata> {
        registry
            .metadata
            .chains()
            .filter(|chain| self.includes(registry, chain, environment, require_mailbox))
            .collect()
    }

    fn includes(
        &self,
        registry: &Registry,
        chain: &ChainMetadata,
        environment: Environment,
        require_mailbox: bool,
    ) -> bool {
        let is_right_deployer = chain
            .deployer
            .as_ref()
            .is_some_and(|deployer| deployer.name.trim().to_lowercase() == self.deployer);

        // Boolean equality, not truthiness: mainnet means `isTestnet: false`.
        let is_right_environment = chain.is_testnet == environment.is_testnet();

        let has_mailbox = !require_mailbox || registry.addresses.has_mailbox(&chain.name);

        let is_disabled = chain
            .availability
            .as_ref()
            .and_then(|availability| availability.status.as_deref())
            .is_some_and(|status| status.trim().to_lowercase() == AVAILABILITY_DISABLED);

        let is_excluded = self.exclusions.contains(&chain.name);

        is_right_deployer && is_right_environment && has_mailbox && !is_disabled && !is_excluded
    }
}
