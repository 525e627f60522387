use std::path::Path;

/// Common messages
pub(super) const MSG_HYPERDOC_ABOUT: &str =
    "Generate Hyperlane registry reference documentation";
pub(super) const MSG_GENERATE_ABOUT: &str = "Generate documentation from a registry snapshot";
pub(super) const MSG_FAILED_TO_GENERATE: &str = "Failed to generate documentation";

/// Autocomplete messages
pub(super) const MSG_AUTOCOMPLETE_ABOUT: &str = "Create shell autocompletion files";
pub(super) const MSG_OUTRO_AUTOCOMPLETE_GENERATION: &str =
    "Autocompletion file correctly generated";

pub(super) fn msg_generate_autocomplete_file(shell_name: &str) -> String {
    format!("Generating completion script for {shell_name}")
}

/// Generate args messages
pub(super) const MSG_REGISTRY_HELP: &str = "Path to the registry snapshot directory";
pub(super) const MSG_OUT_HELP: &str = "Output directory for generated documents";

/// Generator messages
pub(super) const MSG_DEPLOYMENTS_ABOUT: &str =
    "Generate per-contract deployment address tables";
pub(super) const MSG_DOMAINS_ABOUT: &str = "Generate the domain identifier tables";
pub(super) const MSG_ISM_VALIDATORS_ABOUT: &str =
    "Generate the default ISM validator documents";
pub(super) const MSG_LATENCIES_ABOUT: &str = "Generate the block finality latency tables";
pub(super) const MSG_ALL_ABOUT: &str = "Run every generator in order";
pub(super) const MSG_ALL_DOCS_GENERATED: &str = "All documentation generated successfully";

pub(super) fn msg_running_generator(name: &str) -> String {
    format!("Running {name} generator...")
}

pub(super) fn msg_generator_failed(name: &str) -> String {
    format!("Generator {name} failed")
}

pub(super) fn msg_wrote_doc(path: &Path) -> String {
    format!("Wrote {}", path.display())
}
