//! Feed-shape normalization: collapse the single-vs-list payload ambiguity
//! into a bounded, ordered slice of entries.

use crate::feed::{FeedEntry, FeedPayload, OneOrMany};

/// Maximum number of books shown on the widget grid.
pub const MAX_BOOKS: usize = 3;

/// Coerce a payload into at most [`MAX_BOOKS`] entries, original order.
///
/// A single bare entry collapses to exactly one; a list is capped; an
/// absent or empty `entry` yields an empty result (the renderer shows an
/// explicit empty state for that case). Pure, no validation: entries with
/// missing fields pass through and get defaulted by the formatter.
pub fn normalize(payload: &FeedPayload) -> Vec<&FeedEntry> {
    let books: Vec<&FeedEntry> = match &payload.entry {
        Some(OneOrMany::One(e)) => vec![e],
        Some(OneOrMany::Many(v)) => v.iter().take(MAX_BOOKS).collect(),
        None => Vec::new(),
    };
    tracing::debug!(count = books.len(), "normalized feed entries");
    books
}
