use clap::{Parser, Subcommand};
use hyperdoc_common::logger;
use xshell::Shell;

use crate::{
    commands::{autocomplete::AutocompleteArgs, generate::GenerateCommands},
    messages::{
        MSG_AUTOCOMPLETE_ABOUT, MSG_FAILED_TO_GENERATE, MSG_GENERATE_ABOUT, MSG_HYPERDOC_ABOUT,
    },
};

mod commands;
mod markdown;
mod messages;

#[derive(Parser, Debug)]
#[command(name = "hyperdoc", version, about = MSG_HYPERDOC_ABOUT)]
struct Hyperdoc {
    #[command(subcommand)]
    command: HyperdocSubcommands,
}

#[derive(Subcommand, Debug)]
enum HyperdocSubcommands {
    #[command(subcommand, about = MSG_GENERATE_ABOUT, alias = "gen")]
    Generate(GenerateCommands),
    #[command(about = MSG_AUTOCOMPLETE_ABOUT)]
    Autocomplete(AutocompleteArgs),
}

fn main() {
    human_panic::setup_panic!();

    let args = Hyperdoc::parse();

    logger::new_empty_line();
    logger::intro();

    match run_subcommand(args) {
        Ok(()) => {}
        Err(error) => {
            log_error(error);
            std::process::exit(1);
        }
    }
}

fn run_subcommand(args: Hyperdoc) -> anyhow::Result<()> {
    let shell = Shell::new()?;
    match args.command {
        HyperdocSubcommands::Generate(command) => commands::generate::run(&shell, command),
        HyperdocSubcommands::Autocomplete(args) => commands::autocomplete::run(args),
    }
}

fn log_error(error: anyhow::Error) {
    logger::error(format!("{error:#}"));
    logger::outro(MSG_FAILED_TO_GENERATE);
}
