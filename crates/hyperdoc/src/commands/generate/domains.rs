use hyperdoc_common::{files::save_text_file, logger};
use hyperdoc_registry::{ChainMetadata, ChainSelector, Registry};
use hyperdoc_types::Environment;
use xshell::Shell;

use super::{args::GenerateArgs, output};
use crate::{markdown::or_na, messages::msg_wrote_doc};

const TABLE_HEADER: &str =
    "| Network | Domain Identifier (uint32) |\n|---------|---------------------------|";

pub(super) fn run(shell: &Shell, args: &GenerateArgs) -> anyhow::Result<()> {
    let registry = Registry::load(shell, args.registry_dir())?;
    let selector = ChainSelector::default();

    let mainnet_rows = table_rows(&selector.select(&registry, Environment::Mainnet, true));
    let testnet_rows = table_rows(&selector.select(&registry, Environment::Testnet, true));

    let path = output::domains_doc(&args.out_dir());
    save_text_file(shell, &path, &render_doc(&mainnet_rows, &testnet_rows))?;
    logger::success(msg_wrote_doc(&path));

    Ok(())
}

/// Rows sorted ascending by display name, case-insensitively, with a stable
/// tie-break on the original spelling.
fn table_rows(chains: &[&ChainMetadata]) -> Vec<String> {
    let mut chains = chains.to_vec();
    chains.sort_by(|a, b| {
        let name_a = a.display_name();
        let name_b = b.display_name();
        name_a
            .to_lowercase()
            .cmp(&name_b.to_lowercase())
            .then_with(|| name_a.cmp(&name_b))
    });

    chains
        .iter()
        .map(|chain| format!("| {} | {} |", chain.display_name(), or_na(chain.domain_id)))
        .collect()
}

fn render_doc(mainnet_rows: &[String], testnet_rows: &[String]) -> String {
    format!(
        "## Mainnet\n\n{header}\n{mainnet}\n\n## Testnet\n\n{header}\n{testnet}",
        header = TABLE_HEADER,
        mainnet = mainnet_rows.join("\n"),
        testnet = testnet_rows.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_sorted_by_display_name_ignoring_case() {
        // "zeta" has no displayName, so it sorts under its capitalized
        // fallback "Zeta" and lands after "Alpha".
        let metadata: hyperdoc_registry::ChainMetadataMap = serde_yaml::from_str(
            r#"
zeta:
  name: zeta
  domainId: 7000
alpha:
  name: alpha
  displayName: Alpha
  domainId: 11
"#,
        )
        .unwrap();
        let chains: Vec<&ChainMetadata> = metadata.chains().collect();

        let rows = table_rows(&chains);
        assert_eq!(rows, vec!["| Alpha | 11 |", "| Zeta | 7000 |"]);
    }

    #[test]
    fn test_missing_domain_id_renders_na() {
        let metadata: hyperdoc_registry::ChainMetadataMap = serde_yaml::from_str(
            r#"
mystery:
  name: mystery
"#,
        )
        .unwrap();
        let chains: Vec<&ChainMetadata> = metadata.chains().collect();

        assert_eq!(table_rows(&chains), vec!["| Mystery | N/A |"]);
    }
}
