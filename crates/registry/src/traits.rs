use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use hyperdoc_common::files::{read_json_file, read_yaml_file};
use serde::de::DeserializeOwned;
use xshell::Shell;

/// Collections read from a registry snapshot directory.
pub trait RegistryCollection {}

pub trait FileConfigWithDefaultName {
    const FILE_NAME: &'static str;

    fn get_path_with_base_path(base_path: impl AsRef<Path>) -> PathBuf {
        base_path.as_ref().join(Self::FILE_NAME)
    }
}

/// Reads a registry file from a given path, correctly parsing file extension.
/// Supported file extensions are: `yaml`, `yml`, `json`.
pub trait ReadConfig: Sized {
    fn read(shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<Self>;
}

impl<T> ReadConfig for T
where
    T: DeserializeOwned + Clone + RegistryCollection,
{
    fn read(shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let error_context = || format!("Failed to parse registry file {:?}.", path.as_ref());

        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => read_yaml_file(shell, &path).with_context(error_context),
            Some("json") => read_json_file(shell, &path).with_context(error_context),
            _ => bail!(format!(
                "Unsupported file extension for registry file {:?}.",
                path.as_ref()
            )),
        }
    }
}

/// Reads a registry file from a base path under its default name.
pub trait ReadConfigWithBasePath: ReadConfig + FileConfigWithDefaultName + Clone {
    fn read_with_base_path(shell: &Shell, base_path: impl AsRef<Path>) -> anyhow::Result<Self> {
        <Self as ReadConfig>::read(shell, base_path.as_ref().join(Self::FILE_NAME))
    }
}

impl<T> ReadConfigWithBasePath for T where T: FileConfigWithDefaultName + Clone + ReadConfig {}
