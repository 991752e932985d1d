//! CSS class configuration for the built-in renderers.
//!
//! Caller overrides are merged by concatenation, never replacement: the
//! built-in class always stays on the rendered element so default styling
//! keeps working when a caller adds their own.

const CLASS_PREFIX: &str = "--fe-text-parser";

/// Resolved class names used by the built-in recognizers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    /// Class attribute of asset ticker spans.
    pub asset_class: String,
    /// Class attribute of hashtag spans.
    pub hash_tag_class: String,
    /// Class attribute of link anchors.
    pub link_class: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            asset_class: format!("{}-token-asset", CLASS_PREFIX),
            hash_tag_class: format!("{}-token-hash-tag", CLASS_PREFIX),
            link_class: format!("{}-token-link", CLASS_PREFIX),
        }
    }
}

/// Additional class names a caller wants appended to the built-in ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleOverrides {
    pub asset: Option<String>,
    pub hash_tag: Option<String>,
    pub link: Option<String>,
}

impl StyleConfig {
    /// Merge caller overrides into the defaults.
    ///
    /// Each override is appended space-separated after the built-in class.
    pub fn merged(overrides: &StyleOverrides) -> Self {
        let defaults = StyleConfig::default();
        StyleConfig {
            asset_class: append_class(defaults.asset_class, overrides.asset.as_deref()),
            hash_tag_class: append_class(defaults.hash_tag_class, overrides.hash_tag.as_deref()),
            link_class: append_class(defaults.link_class, overrides.link.as_deref()),
        }
    }
}

fn append_class(base: String, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base,
    }
}
