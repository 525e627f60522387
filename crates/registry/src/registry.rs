use std::path::Path;

use anyhow::{bail, Context};
use xshell::Shell;

use crate::{
    addresses::ChainAddresses, metadata::ChainMetadataMap, multisig::MultisigConfigs,
    traits::ReadConfigWithBasePath,
};

/// In-memory snapshot of the chain registry: chain metadata, contract
/// addresses and default multisig configs. Read-only once loaded; every
/// generator loads its own snapshot.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub metadata: ChainMetadataMap,
    pub addresses: ChainAddresses,
    pub multisig: MultisigConfigs,
}

impl Registry {
    pub fn load(shell: &Shell, dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        let registry = Self {
            metadata: ChainMetadataMap::read_with_base_path(shell, dir)
                .context("Failed to read chain metadata")?,
            addresses: ChainAddresses::read_with_base_path(shell, dir)
                .context("Failed to read chain addresses")?,
            multisig: MultisigConfigs::read_with_base_path(shell, dir)
                .context("Failed to read multisig configs")?,
        };
        registry.check_invariants()?;
        Ok(registry)
    }

    fn check_invariants(&self) -> anyhow::Result<()> {
        for (chain, config) in &self.multisig.0 {
            if config.threshold > config.validators.len() {
                bail!(
                    "Multisig config for {chain} has threshold {} above its {} validator(s)",
                    config.threshold,
                    config.validators.len()
                );
            }
        }
        Ok(())
    }
}
