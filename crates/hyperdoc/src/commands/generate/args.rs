use std::path::PathBuf;

use clap::Parser;

use crate::messages::{MSG_OUT_HELP, MSG_REGISTRY_HELP};

pub(super) const DEFAULT_REGISTRY_DIR: &str = "registry";
pub(super) const DEFAULT_OUT_DIR: &str = "docs";

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[arg(long, help = MSG_REGISTRY_HELP)]
    pub registry: Option<PathBuf>,
    #[arg(long, help = MSG_OUT_HELP)]
    pub out: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn registry_dir(&self) -> PathBuf {
        self.registry
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REGISTRY_DIR))
    }

    pub fn out_dir(&self) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }
}
