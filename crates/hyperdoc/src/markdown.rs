use std::fmt::Display;

use anyhow::Context;
use url::Url;

pub(crate) const NA: &str = "N/A";

/// Renders an optional value, falling back to the literal `N/A`.
pub(crate) fn or_na<T: Display>(value: Option<T>) -> String {
    value
        .map(|value| value.to_string())
        .unwrap_or_else(|| NA.to_string())
}

/// Inline-code cell, used for contract and validator addresses.
pub(crate) fn code(value: &str) -> String {
    format!("`{value}`")
}

/// YAML front-matter block with a title and optional description.
pub(crate) fn front_matter(title: &str, description: Option<&str>) -> String {
    match description {
        Some(description) => {
            format!("---\ntitle: \"{title}\"\ndescription: \"{description}\"\n---\n")
        }
        None => format!("---\ntitle: \"{title}\"\n---\n"),
    }
}

/// Markdown link to a block explorer, labeled with its hostname. An absent
/// URL renders as `N/A`; a present but unparsable one is a registry defect.
pub(crate) fn explorer_link(url: Option<&str>) -> anyhow::Result<String> {
    let Some(url) = url.filter(|url| !url.is_empty()) else {
        return Ok(NA.to_string());
    };
    let parsed = Url::parse(url).with_context(|| format!("Invalid block explorer URL {url}"))?;
    let host = parsed
        .host_str()
        .with_context(|| format!("Block explorer URL {url} has no host"))?;
    Ok(format!("[{host}]({url})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_na_renders_literal_for_missing_values() {
        assert_eq!(or_na::<u32>(None), "N/A");
        assert_eq!(or_na(Some(1)), "1");
    }

    #[test]
    fn test_explorer_link_uses_hostname_as_label() {
        assert_eq!(
            explorer_link(Some("https://etherscan.io")).unwrap(),
            "[etherscan.io](https://etherscan.io)"
        );
        assert_eq!(explorer_link(None).unwrap(), "N/A");
        assert_eq!(explorer_link(Some("")).unwrap(), "N/A");
        assert!(explorer_link(Some("not a url")).is_err());
    }

    #[test]
    fn test_front_matter_with_and_without_description() {
        assert_eq!(
            front_matter("Mailbox", Some("Mailbox deployments")),
            "---\ntitle: \"Mailbox\"\ndescription: \"Mailbox deployments\"\n---\n"
        );
        assert_eq!(front_matter("Latencies", None), "---\ntitle: \"Latencies\"\n---\n");
    }
}
