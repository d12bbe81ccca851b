//! Derived view model: what the widget actually shows per book.
//!
//! Views are rebuilt from scratch on every render call; nothing is cached
//! or mutated across renders.

use serde::Serialize;

/// Where the book card gets its cover from. The placeholder is a real
/// variant so an empty URL can never leak into markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverSource {
    Url(String),
    Placeholder,
}

impl CoverSource {
    pub fn url(&self) -> Option<&str> {
        match self {
            CoverSource::Url(u) => Some(u),
            CoverSource::Placeholder => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookView {
    pub title: String,
    pub cover: CoverSource,
    pub author_line: String,
}
