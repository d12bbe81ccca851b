//! OPDS feed payload model and parsing.
//!
//! A catalog server (Calibre-Web and friends) hands the widget either a
//! single `entry` object or a list of them; the same ambiguity exists for
//! each entry's `author` field. Both are modeled as an explicit
//! [`OneOrMany`] union rather than inspected by duck typing.

use serde::Deserialize;

use crate::error::FeedError;

/// A value that may appear as a single object or a list in the source
/// document. OPDS-over-JSON collapses one-element lists to bare objects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(v) => std::slice::from_ref(v),
            OneOrMany::Many(v) => v.as_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// Parsed feed document. `entry` is absent for an empty catalog page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedPayload {
    #[serde(default)]
    pub entry: Option<OneOrMany<FeedEntry>>,
}

/// One catalog record describing a book. Fields missing from the source
/// default to empty; defaulting rules live in the formatter, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: OneOrMany<Author>,
    #[serde(default)]
    pub link: Vec<FeedLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
}

/// A typed hyperlink inside an entry. `rel` identifies the link's purpose
/// (acquisition, cover image, thumbnail, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedLink {
    #[serde(default)]
    pub rel: String,
    #[serde(default)]
    pub href: String,
}

impl FeedPayload {
    /// Parse the JSON shape the host platform hands a plugin.
    pub fn from_json(input: &str) -> Result<Self, FeedError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse an OPDS Atom document as served by the catalog itself.
    ///
    /// XML has no single-vs-list ambiguity: repeated `<entry>` elements
    /// always accumulate into the `Many` shape, a one-entry page included.
    pub fn from_xml(input: &str) -> Result<Self, FeedError> {
        let raw: AtomFeed = quick_xml::de::from_str(input)?;
        let entries: Vec<FeedEntry> = raw.entry.into_iter().map(FeedEntry::from).collect();
        Ok(FeedPayload {
            entry: Some(OneOrMany::Many(entries)),
        })
    }

    /// Sniff the document format from its first significant byte and parse.
    pub fn from_str_detect(input: &str) -> Result<Self, FeedError> {
        let trimmed = input.trim_start_matches('\u{feff}').trim_start();
        match trimmed.chars().next() {
            Some('<') => Self::from_xml(input),
            Some('{') => Self::from_json(input),
            Some(c) => Err(FeedError::UnknownFormat(format!(
                "document starts with {:?}, expected '<' or '{{'",
                c
            ))),
            None => Err(FeedError::UnknownFormat("empty document".to_string())),
        }
    }
}

// Raw Atom shapes. quick-xml's serde support dislikes untagged enums, so
// the XML path deserializes into list-only structs and converts.

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(default)]
    entry: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: Vec<AtomAuthor>,
    #[serde(default)]
    link: Vec<AtomLink>,
}

#[derive(Debug, Default, Deserialize)]
struct AtomAuthor {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct AtomLink {
    #[serde(default, rename = "@rel")]
    rel: String,
    #[serde(default, rename = "@href")]
    href: String,
}

impl From<AtomEntry> for FeedEntry {
    fn from(raw: AtomEntry) -> Self {
        FeedEntry {
            title: raw.title,
            author: OneOrMany::Many(
                raw.author
                    .into_iter()
                    .map(|a| Author { name: a.name })
                    .collect(),
            ),
            link: raw
                .link
                .into_iter()
                .map(|l| FeedLink {
                    rel: l.rel,
                    href: l.href,
                })
                .collect(),
        }
    }
}
