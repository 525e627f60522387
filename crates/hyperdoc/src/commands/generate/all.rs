use anyhow::Context;
use hyperdoc_common::logger;
use xshell::Shell;

use super::{args::GenerateArgs, deployments, domains, ism_validators, latencies};
use crate::messages::{msg_generator_failed, msg_running_generator, MSG_ALL_DOCS_GENERATED};

type Generator = fn(&Shell, &GenerateArgs) -> anyhow::Result<()>;

// Original publication order; domains last.
const GENERATORS: &[(&str, Generator)] = &[
    ("deployments", deployments::run),
    ("ism-validators", ism_validators::run),
    ("latencies", latencies::run),
    ("domains", domains::run),
];

pub(super) fn run(shell: &Shell, args: &GenerateArgs) -> anyhow::Result<()> {
    run_generators(shell, args, GENERATORS)?;
    logger::outro(MSG_ALL_DOCS_GENERATED);
    Ok(())
}

/// Runs generators in order, aborting on the first failure; generators that
/// already ran keep their output on disk.
fn run_generators(
    shell: &Shell,
    args: &GenerateArgs,
    generators: &[(&str, Generator)],
) -> anyhow::Result<()> {
    for (name, generator) in generators {
        logger::step(msg_running_generator(name));
        generator(shell, args).with_context(|| msg_generator_failed(name))?;
    }
    Ok(())
}
