//! Markup assembly: book grid, empty state, and the title bar.
//!
//! This is the only layer that touches markup, so it is also the layer
//! that owns HTML escaping. View values stay raw until they land here.

use crate::feed::FeedPayload;
use crate::normalize::normalize;
use crate::settings::{FeedKind, PluginSettings};
use crate::view::{BookView, CoverSource};

/// Static label in the title bar, next to the derived page title.
pub const LIBRARY_LABEL: &str = "Calibre Library";

/// Page title lookup. Total; unknown feed kinds take the generic branch.
pub fn page_title(kind: FeedKind) -> &'static str {
    match kind {
        FeedKind::Hot => "Hot Books",
        FeedKind::New => "New Books",
        FeedKind::Discover => "Random Books",
        FeedKind::Other => "Calibre Books",
    }
}

/// Render the full widget fragment: a grid of up to three book cards plus
/// the title bar. Side-effect free; every call rebuilds the views from the
/// payload and settings it is handed.
pub fn render(payload: &FeedPayload, settings: &PluginSettings) -> String {
    let books: Vec<BookView> = normalize(payload)
        .into_iter()
        .map(|entry| crate::format::format(entry, settings))
        .collect();
    tracing::debug!(books = books.len(), feed = ?settings.feed, "rendering widget");

    let mut out = String::new();
    out.push_str("<div class=\"layout layout--top\">\n");
    if books.is_empty() {
        // Decision: an empty shelf says so instead of showing a blank grid.
        out.push_str("  <div class=\"label label--empty\">No books found</div>\n");
    } else {
        out.push_str("  <div class=\"columns\">\n");
        for book in &books {
            push_book_card(&mut out, book);
        }
        out.push_str("  </div>\n");
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"title_bar\">\n");
    out.push_str(&format!(
        "  <span class=\"title\">{}</span>\n",
        LIBRARY_LABEL
    ));
    out.push_str(&format!(
        "  <span class=\"instance\">{}</span>\n",
        page_title(settings.feed)
    ));
    out.push_str("</div>\n");
    out
}

fn push_book_card(out: &mut String, book: &BookView) {
    out.push_str("    <div class=\"column book-card\">\n");
    match &book.cover {
        CoverSource::Url(url) => {
            out.push_str(&format!(
                "      <img class=\"book-cover\" src=\"{}\" alt=\"{}\"/>\n",
                escape_html(url),
                escape_html(&book.title)
            ));
        }
        CoverSource::Placeholder => {
            out.push_str(
                "      <div class=\"book-cover book-cover--missing\">No Cover</div>\n",
            );
        }
    }
    out.push_str(&format!(
        "      <span class=\"title title--small\">{}</span>\n",
        escape_html(&book.title)
    ));
    out.push_str(&format!(
        "      <span class=\"label\">{}</span>\n",
        escape_html(&book.author_line)
    ));
    out.push_str("    </div>\n");
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
