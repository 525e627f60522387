use clap::{CommandFactory, Parser};
use hyperdoc_common::logger;

use crate::{
    messages::{msg_generate_autocomplete_file, MSG_OUTRO_AUTOCOMPLETE_GENERATION},
    Hyperdoc,
};

#[derive(Debug, Parser)]
pub struct AutocompleteArgs {
    /// The shell to generate the autocomplete script for
    #[arg(long = "generate", value_enum)]
    pub generator: clap_complete::Shell,
}

pub(crate) fn run(args: AutocompleteArgs) -> anyhow::Result<()> {
    logger::info(msg_generate_autocomplete_file(&args.generator.to_string()));

    let mut command = Hyperdoc::command();
    clap_complete::generate(
        args.generator,
        &mut command,
        "hyperdoc",
        &mut std::io::stdout(),
    );

    logger::outro(MSG_OUTRO_AUTOCOMPLETE_GENERATION);
    Ok(())
}
