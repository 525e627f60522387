/// Registry snapshot file names.
pub const METADATA_FILE: &str = "metadata.yaml";
pub const ADDRESSES_FILE: &str = "addresses.yaml";
pub const MULTISIG_FILE: &str = "multisig.yaml";

/// Deployer identity whose chains these documents publish.
pub const ABACUS_WORKS_DEPLOYER_NAME: &str = "abacus works";

/// `availability.status` sentinel for chains that must not be published.
pub const AVAILABILITY_DISABLED: &str = "disabled";

/// Pre-mainnet chains excluded from all generated documents.
pub const EXCLUDED_CHAINS: &[&str] = &[];
