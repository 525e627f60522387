use hyperdoc_common::{files::save_text_file, logger, strings::capitalize_first};
use hyperdoc_registry::{ChainMetadata, ChainSelector, Registry};
use hyperdoc_types::{ContractKind, Environment};
use strum::IntoEnumIterator;
use xshell::Shell;

use super::{args::GenerateArgs, output};
use crate::{
    markdown::{code, explorer_link, front_matter, or_na},
    messages::msg_wrote_doc,
};

const TABLE_HEADER: &str =
    "| Chain | Domain ID | Chain ID | Address | Explorer |\n|-------|-----------|----------|---------|----------|";

pub(super) fn run(shell: &Shell, args: &GenerateArgs) -> anyhow::Result<()> {
    let registry = Registry::load(shell, args.registry_dir())?;
    let selector = ChainSelector::default();
    let out = args.out_dir();

    let mainnet = selector.select(&registry, Environment::Mainnet, true);
    let testnet = selector.select(&registry, Environment::Testnet, true);

    for kind in ContractKind::iter() {
        let mainnet_rows = table_rows(&mainnet, &registry, kind)?;
        let testnet_rows = table_rows(&testnet, &registry, kind)?;

        // No deployments of this contract in either environment: no document.
        if mainnet_rows.is_empty() && testnet_rows.is_empty() {
            continue;
        }

        let path = output::deployment_doc(&out, kind);
        save_text_file(shell, &path, &render_doc(kind, &mainnet_rows, &testnet_rows))?;
        logger::success(msg_wrote_doc(&path));
    }

    Ok(())
}

/// One row per chain that has this contract deployed; chains without an
/// address for the kind are omitted entirely.
fn table_rows(
    chains: &[&ChainMetadata],
    registry: &Registry,
    kind: ContractKind,
) -> anyhow::Result<Vec<String>> {
    chains
        .iter()
        .filter_map(|chain| {
            registry
                .addresses
                .get(&chain.name, kind)
                .map(|address| table_row(chain, address))
        })
        .collect()
}

fn table_row(chain: &ChainMetadata, address: &str) -> anyhow::Result<String> {
    let explorer = explorer_link(chain.primary_explorer_url())?;
    Ok(format!(
        "| {} | {} | {} | {} | {} |",
        chain.display_name(),
        or_na(chain.domain_id),
        or_na(chain.chain_id),
        code(address),
        explorer,
    ))
}

fn render_doc(kind: ContractKind, mainnet_rows: &[String], testnet_rows: &[String]) -> String {
    let title = capitalize_first(kind.key());
    format!(
        "{front}\n## Mainnet\n\n{header}\n{mainnet}\n\n## Testnet\n\n{header}\n{testnet}",
        front = front_matter(
            &title,
            Some(&format!("{title} deployments across Mainnet and Testnet")),
        ),
        header = TABLE_HEADER,
        mainnet = mainnet_rows.join("\n"),
        testnet = testnet_rows.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_from_yaml(metadata: &str, addresses: &str) -> Registry {
        Registry {
            metadata: serde_yaml::from_str(metadata).unwrap(),
            addresses: serde_yaml::from_str(addresses).unwrap(),
            multisig: Default::default(),
        }
    }

    #[test]
    fn test_mailbox_row_for_selected_mainnet_chain() {
        let registry = registry_from_yaml(
            r#"
ethereum:
  name: ethereum
  displayName: Ethereum
  domainId: 1
  chainId: 1
  isTestnet: false
  deployer:
    name: Abacus Works
"#,
            r#"
ethereum:
  mailbox: "0xABC"
"#,
        );
        let selector = ChainSelector::default();
        let chains = selector.select(&registry, Environment::Mainnet, true);
        assert_eq!(chains.len(), 1);

        let rows = table_rows(&chains, &registry, ContractKind::Mailbox).unwrap();
        assert_eq!(rows, vec!["| Ethereum | 1 | 1 | `0xABC` | N/A |"]);
    }

    #[test]
    fn test_chain_without_address_is_omitted_from_kind_table() {
        let registry = registry_from_yaml(
            r#"
arbitrum:
  name: arbitrum
  displayName: Arbitrum
  domainId: 42161
  chainId: 42161
  isTestnet: false
  deployer:
    name: Abacus Works
ethereum:
  name: ethereum
  displayName: Ethereum
  domainId: 1
  chainId: 1
  isTestnet: false
  deployer:
    name: Abacus Works
"#,
            r#"
arbitrum:
  mailbox: "0xAAA"
ethereum:
  mailbox: "0xABC"
  proxyAdmin: "0xDEF"
"#,
        );
        let selector = ChainSelector::default();
        let chains = selector.select(&registry, Environment::Mainnet, true);
        assert_eq!(chains.len(), 2);

        let rows = table_rows(&chains, &registry, ContractKind::ProxyAdmin).unwrap();
        assert_eq!(rows, vec!["| Ethereum | 1 | 1 | `0xDEF` | N/A |"]);

        // A kind nobody deploys yields no rows at all, so its document is
        // skipped by the generator.
        let rows = table_rows(&chains, &registry, ContractKind::TestRecipient).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_explorer_cell_links_first_explorer() {
        let registry = registry_from_yaml(
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
    - url: https://eth.blockscout.com
"#,
            r#"
ethereum:
  mailbox: "0xABC"
"#,
        );
        let selector = ChainSelector::default();
        let chains = selector.select(&registry, Environment::Mainnet, true);

        let rows = table_rows(&chains, &registry, ContractKind::Mailbox).unwrap();
        assert_eq!(
            rows,
            vec!["| Ethereum | 1 | 1 | `0xABC` | [etherscan.io](https://etherscan.io) |"]
        );
    }
}
