/// Top-level error type. All fallible public API functions return this.
///
/// The render pipeline itself never fails: malformed entries degrade to
/// placeholder covers and default bylines. Errors only arise when a feed
/// document or settings blob cannot be parsed at all.
#[derive(Debug, thiserror::Error)]
pub enum ShelfError {
    #[error("Feed parse error: {0}")]
    Feed(#[from] FeedError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Malformed JSON feed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed OPDS document: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("Could not determine feed format: {0}")]
    UnknownFormat(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Malformed custom fields: {0}")]
    Json(#[from] serde_json::Error),
}
