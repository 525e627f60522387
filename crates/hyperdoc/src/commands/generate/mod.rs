use clap::Subcommand;
use xshell::Shell;

use crate::messages::{
    MSG_ALL_ABOUT, MSG_DEPLOYMENTS_ABOUT, MSG_DOMAINS_ABOUT, MSG_ISM_VALIDATORS_ABOUT,
    MSG_LATENCIES_ABOUT,
};

mod all;
mod args;
mod deployments;
mod domains;
mod ism_validators;
mod latencies;
mod output;

pub use args::GenerateArgs;

#[derive(Subcommand, Debug)]
pub enum GenerateCommands {
    #[command(about = MSG_DEPLOYMENTS_ABOUT)]
    Deployments(GenerateArgs),
    #[command(about = MSG_DOMAINS_ABOUT)]
    Domains(GenerateArgs),
    #[command(about = MSG_ISM_VALIDATORS_ABOUT, alias = "validators")]
    IsmValidators(GenerateArgs),
    #[command(about = MSG_LATENCIES_ABOUT)]
    Latencies(GenerateArgs),
    #[command(about = MSG_ALL_ABOUT)]
    All(GenerateArgs),
}

pub(crate) fn run(shell: &Shell, args: GenerateCommands) -> anyhow::Result<()> {
    match args {
        GenerateCommands::Deployments(args) => deployments::run(shell, &args),
        GenerateCommands::Domains(args) => domains::run(shell, &args),
        GenerateCommands::IsmValidators(args) => ism_validators::run(shell, &args),
        GenerateCommands::Latencies(args) => latencies::run(shell, &args),
        GenerateCommands::All(args) => all::run(shell, &args),
    }
}
