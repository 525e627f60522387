use std::path::{Path, PathBuf};

use hyperdoc_types::{ContractKind, Environment};

pub(super) const DEPLOYMENTS_DIR: &str = "deployments";
pub(super) const VALIDATORS_DIR: &str = "validators";
pub(super) const ADDRESSES_DIR: &str = "addresses";

pub(super) fn deployment_doc(out: &Path, kind: ContractKind) -> PathBuf {
    out.join(DEPLOYMENTS_DIR).join(format!("{kind}.mdx"))
}

pub(super) fn domains_doc(out: &Path) -> PathBuf {
    out.join(ADDRESSES_DIR).join("domains.mdx")
}

pub(super) fn ism_validators_doc(out: &Path, environment: Environment) -> PathBuf {
    out.join(VALIDATORS_DIR)
        .join(format!("{environment}-default-ism-validators.mdx"))
}

pub(super) fn latencies_doc(out: &Path) -> PathBuf {
    out.join(VALIDATORS_DIR).join("latencies.mdx")
}
