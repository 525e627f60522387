use std::{collections::BTreeMap, fmt};

use hyperdoc_common::strings::capitalize_first;
use serde::{Deserialize, Serialize};

use crate::{
    consts::METADATA_FILE,
    traits::{FileConfigWithDefaultName, RegistryCollection},
};

/// Chain metadata records keyed by chain name. Chain names are unique across
/// the registry; iteration order follows the name order of the map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainMetadataMap(pub BTreeMap<String, ChainMetadata>);

impl ChainMetadataMap {
    pub fn chains(&self) -> impl Iterator<Item = &ChainMetadata> {
        self.0.values()
    }

    pub fn get(&self, name: &str) -> Option<&ChainMetadata> {
        self.0.get(name)
    }
}

/// One record per blockchain network, mirroring the upstream registry schema.
/// Optional fields degrade to an `N/A` cell in rendered tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    #[serde(default)]
    pub is_testnet: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployer: Option<Deployer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub block_explorers: Vec<BlockExplorer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<BlockSettings>,
}

impl ChainMetadata {
    /// `displayName` when present, otherwise the chain name with its first
    /// letter capitalized.
    pub fn display_name(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| capitalize_first(&self.name))
    }

    /// URL of the primary (first) block explorer, if any.
    pub fn primary_explorer_url(&self) -> Option<&str> {
        self.block_explorers
            .first()
            .map(|explorer| explorer.url.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployer {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockExplorer {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reorg_period: Option<ReorgPeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate_block_time: Option<f64>,
}

/// Finality configuration: either a block count or a named finality tag.
/// The upstream registry carries both; both render verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReorgPeriod {
    Blocks(u64),
    Tag(String),
}

impl fmt::Display for ReorgPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReorgPeriod::Blocks(blocks) => write!(f, "{blocks}"),
            ReorgPeriod::Tag(tag) => write!(f, "{tag}"),
        }
    }
}

impl FileConfigWithDefaultName for ChainMetadataMap {
    const FILE_NAME: &'static str = METADATA_FILE;
}

impl RegistryCollection for ChainMetadataMap {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_capitalized_name() {
        let chain: ChainMetadata = serde_yaml::from_str("name: zeta\nisTestnet: false").unwrap();
        assert_eq!(chain.display_name(), "Zeta");

        let chain: ChainMetadata =
            serde_yaml::from_str("name: bsc\ndisplayName: BNB Smart Chain").unwrap();
        assert_eq!(chain.display_name(), "BNB Smart Chain");
    }

    #[test]
    fn test_reorg_period_accepts_blocks_and_tags() {
        let blocks: ReorgPeriod = serde_yaml::from_str("14").unwrap();
        assert_eq!(blocks.to_string(), "14");

        let tag: ReorgPeriod = serde_yaml::from_str("finalized").unwrap();
        assert_eq!(tag.to_string(), "finalized");
    }

    #[test]
    fn test_metadata_map_parses_registry_shape() {
        let map: ChainMetadataMap = serde_yaml::from_str(
            r#"
            ethereum:
              name: ethereum
              displayName: Ethereum
              domainId: 1
              chainId: 1
              isTestnet: false
              deployer:
                name: Abacus Works
              blockExplorers:
                - url: https://etherscan.io
              blocks:
                reorgPeriod: 14
                estimateBlockTime: 13
            "#,
        )
        .unwrap();

        let chain = map.get("ethereum").unwrap();
        assert_eq!(chain.domain_id, Some(1));
        assert_eq!(chain.primary_explorer_url(), Some("https://etherscan.io"));
    }
}
