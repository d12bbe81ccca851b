//! Plugin settings as delivered by the host platform.
//!
//! The platform serializes user-editable fields into a flat JSON object
//! (`custom_fields_values`). Everything here is carried through explicitly;
//! there is no ambient settings context anywhere in the crate.

use serde::Deserialize;

use crate::error::SettingsError;

/// Which catalog shelf the widget shows. Unknown or absent values fall
/// through to `Other`, which renders under the generic page title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FeedKind {
    Hot,
    New,
    Discover,
    #[default]
    Other,
}

impl FeedKind {
    /// Parse from a setting string. Case-sensitive; the platform stores
    /// the canonical lowercase values.
    pub fn parse(s: &str) -> Self {
        match s {
            "hot" => FeedKind::Hot,
            "new" => FeedKind::New,
            "discover" => FeedKind::Discover,
            _ => FeedKind::Other,
        }
    }
}

impl From<String> for FeedKind {
    fn from(s: String) -> Self {
        FeedKind::parse(&s)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginSettings {
    #[serde(default)]
    pub feed: FeedKind,
    /// Base URL of the catalog server, no trailing slash. Stored verbatim;
    /// cover hrefs are concatenated onto it without normalization.
    #[serde(default)]
    pub server_url: String,
    /// Consumed by the upstream fetch layer, carried through here only.
    #[serde(default)]
    pub reverse_proxy_header: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl PluginSettings {
    /// Parse the platform's `custom_fields_values` JSON object.
    pub fn from_custom_fields(input: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_fields_full() {
        let s = PluginSettings::from_custom_fields(
            r#"{"feed": "hot", "server_url": "https://cw.example", "username": "reader"}"#,
        )
        .unwrap();
        assert_eq!(s.feed, FeedKind::Hot);
        assert_eq!(s.server_url, "https://cw.example");
        assert_eq!(s.username.as_deref(), Some("reader"));
        assert!(s.reverse_proxy_header.is_none());
    }

    #[test]
    fn unknown_feed_value_falls_back_to_other() {
        let s = PluginSettings::from_custom_fields(r#"{"feed": "starred"}"#).unwrap();
        assert_eq!(s.feed, FeedKind::Other);
    }

    #[test]
    fn absent_fields_default() {
        let s = PluginSettings::from_custom_fields("{}").unwrap();
        assert_eq!(s.feed, FeedKind::Other);
        assert_eq!(s.server_url, "");
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(FeedKind::parse("hot"), FeedKind::Hot);
        assert_eq!(FeedKind::parse("new"), FeedKind::New);
        assert_eq!(FeedKind::parse("discover"), FeedKind::Discover);
        assert_eq!(FeedKind::parse("Hot"), FeedKind::Other);
        assert_eq!(FeedKind::parse(""), FeedKind::Other);
    }

    #[test]
    fn malformed_custom_fields_is_an_error() {
        assert!(PluginSettings::from_custom_fields("feed=hot").is_err());
    }
}
