use hyperdoc_common::{files::save_text_file, logger};
use hyperdoc_registry::{ChainMetadata, ChainSelector, MultisigConfig, MultisigConfigs, Registry};
use hyperdoc_types::Environment;
use strum::IntoEnumIterator;
use xshell::Shell;

use super::{args::GenerateArgs, output};
use crate::{
    markdown::{code, front_matter, or_na},
    messages::msg_wrote_doc,
};

pub(super) fn run(shell: &Shell, args: &GenerateArgs) -> anyhow::Result<()> {
    let registry = Registry::load(shell, args.registry_dir())?;
    let selector = ChainSelector::default();
    let out = args.out_dir();

    for environment in Environment::iter() {
        let chains = selector.select(&registry, environment, true);
        let sections = chain_sections(&chains, &registry.multisig, environment);

        let path = output::ism_validators_doc(&out, environment);
        save_text_file(shell, &path, &render_doc(environment, &sections))?;
        logger::success(msg_wrote_doc(&path));
    }

    Ok(())
}

/// One section per chain with a known multisig config. Mainnet chains
/// secured by a single validator are not published; on testnet they are.
fn chain_sections(
    chains: &[&ChainMetadata],
    configs: &MultisigConfigs,
    environment: Environment,
) -> Vec<String> {
    chains
        .iter()
        .filter_map(|chain| {
            let config = configs.get(&chain.name)?;
            if environment == Environment::Mainnet && config.validators.len() <= 1 {
                return None;
            }
            Some(chain_section(chain, config))
        })
        .collect()
}

fn chain_section(chain: &ChainMetadata, config: &MultisigConfig) -> String {
    let rows: Vec<String> = config
        .validators
        .iter()
        .map(|validator| format!("| {} | {} |", validator.alias, code(&validator.address)))
        .collect();

    format!(
        "## {display} ({domain})\n\nThreshold: {threshold} of {count}\n\n| Operator | Address |\n|----------|---------|\n{rows}\n",
        display = chain.display_name(),
        domain = or_na(chain.domain_id),
        threshold = config.threshold,
        count = config.validators.len(),
        rows = rows.join("\n"),
    )
}

fn render_doc(environment: Environment, sections: &[String]) -> String {
    format!(
        "{front}\n{sections}",
        front = front_matter(
            environment.title(),
            Some(&format!(
                "Default ISM validator configurations for {environment} chains"
            )),
        ),
        sections = sections.join("\n"),
    )
}
