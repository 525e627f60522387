use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use xshell::Shell;

pub fn read_yaml_file<T>(shell: &Shell, file_path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let content = shell.read_file(&file_path)?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML file {:?}", file_path.as_ref()))
}

pub fn read_json_file<T>(shell: &Shell, file_path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let content = shell.read_file(&file_path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file {:?}", file_path.as_ref()))
}

/// Writes a rendered document, creating intermediate directories as needed.
/// Content is normalized to trimmed text with a single trailing newline.
pub fn save_text_file(
    shell: &Shell,
    file_path: impl AsRef<Path>,
    content: &str,
) -> anyhow::Result<()> {
    shell
        .write_file(&file_path, format!("{}\n", content.trim()))
        .with_context(|| format!("Failed to write {:?}", file_path.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_text_file_creates_parent_directories() {
        let shell = Shell::new().unwrap();
        let temp = shell.create_temp_dir().unwrap();
        let path = temp.path().join("nested/dir/doc.mdx");

        save_text_file(&shell, &path, "content").unwrap();

        assert_eq!(shell.read_file(&path).unwrap(), "content\n");
    }

    #[test]
    fn test_save_text_file_trims_and_appends_single_newline() {
        let shell = Shell::new().unwrap();
        let temp = shell.create_temp_dir().unwrap();
        let path = temp.path().join("doc.mdx");

        save_text_file(&shell, &path, "\n\n  body  \n\n\n").unwrap();

        assert_eq!(shell.read_file(&path).unwrap(), "body\n");
    }

    #[test]
    fn test_save_text_file_overwrites_existing_file() {
        let shell = Shell::new().unwrap();
        let temp = shell.create_temp_dir().unwrap();
        let path = temp.path().join("doc.mdx");

        save_text_file(&shell, &path, "first").unwrap();
        save_text_file(&shell, &path, "second").unwrap();

        assert_eq!(shell.read_file(&path).unwrap(), "second\n");
    }
}
