use hyperdoc_common::{files::save_text_file, logger};
use hyperdoc_registry::{ChainMetadata, ChainSelector, Registry};
use hyperdoc_types::Environment;
use xshell::Shell;

use super::{args::GenerateArgs, output};
use crate::{markdown::or_na, messages::msg_wrote_doc};

const TABLE_HEADER: &str =
    "| Chain | Domain | Reorg Period (blocks) | Estimated Block Time (seconds) |\n|-------|--------|----------------------|-------------------------------|";

pub(super) fn run(shell: &Shell, args: &GenerateArgs) -> anyhow::Result<()> {
    let registry = Registry::load(shell, args.registry_dir())?;
    let selector = ChainSelector::default();

    let mainnet_rows = table_rows(&selector.select(&registry, Environment::Mainnet, true));
    let testnet_rows = table_rows(&selector.select(&registry, Environment::Testnet, true));

    let path = output::latencies_doc(&args.out_dir());
    save_text_file(shell, &path, &render_doc(&mainnet_rows, &testnet_rows))?;
    logger::success(msg_wrote_doc(&path));

    Ok(())
}

fn table_rows(chains: &[&ChainMetadata]) -> Vec<String> {
    chains
        .iter()
        .map(|chain| {
            let blocks = chain.blocks.as_ref();
            format!(
                "| {} | {} | {} | {} |",
                chain.display_name(),
                or_na(chain.domain_id),
                or_na(blocks.and_then(|blocks| blocks.reorg_period.as_ref())),
                or_na(blocks.and_then(|blocks| blocks.estimate_block_time)),
            )
        })
        .collect()
}

fn render_doc(mainnet_rows: &[String], testnet_rows: &[String]) -> String {
    format!(
        r#"---
title: "Latencies"
---

Validators must wait a certain number of blocks to be mined before they are considered valid and [reorg-safe](https://www.alchemy.com/overviews/what-is-a-reorg). Without this, validators could be slashed since they may have signed a checkpoint that is no longer valid.

Refer to the following sections for block finality configuration used by the Hyperlane validators.

<Tabs>
  <Tab title="Mainnet">
{header}
{mainnet}
  </Tab>

  <Tab title="Testnet">
{header}
{testnet}
  </Tab>
</Tabs>"#,
        header = TABLE_HEADER,
        mainnet = mainnet_rows.join("\n"),
        testnet = testnet_rows.join("\n"),
    )
}
