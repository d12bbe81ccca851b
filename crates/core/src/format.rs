//! Per-entry formatting: cover link resolution and author byline rules.

use crate::feed::{Author, FeedEntry, FeedLink, OneOrMany};
use crate::settings::PluginSettings;
use crate::view::{BookView, CoverSource};

/// Link relation for a full-size cover image.
pub const COVER_REL: &str = "http://opds-spec.org/image";
/// Link relation for a cover thumbnail.
pub const THUMBNAIL_REL: &str = "http://opds-spec.org/image/thumbnail";

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// How many author names appear in a byline before "et al." takes over.
pub const MAX_BYLINE_AUTHORS: usize = 2;

/// Build the view record for one entry. Pure; every missing piece of the
/// entry degrades to a default, never an error.
pub fn format(entry: &FeedEntry, settings: &PluginSettings) -> BookView {
    BookView {
        title: entry.title.clone(),
        cover: resolve_cover(&entry.link, &settings.server_url),
        author_line: author_line(&entry.author),
    }
}

/// Single linear scan over the links in document order. The first link
/// whose `rel` is either cover relation wins, so a thumbnail listed before
/// the full image yields the thumbnail. Real feeds carry at most one of
/// each, making the scan order moot in practice.
fn resolve_cover(links: &[FeedLink], server_url: &str) -> CoverSource {
    for link in links {
        if link.rel == COVER_REL || link.rel == THUMBNAIL_REL {
            return CoverSource::Url(format!("{}{}", server_url, link.href));
        }
    }
    tracing::debug!("no cover link in entry, using placeholder");
    CoverSource::Placeholder
}

/// Byline rules: one author verbatim; two joined with ", "; more than two
/// keep the first pair and append " et al.". No author data at all, or a
/// blank single name, reads "Unknown Author".
fn author_line(authors: &OneOrMany<Author>) -> String {
    match authors {
        OneOrMany::One(a) if !a.name.is_empty() => a.name.clone(),
        OneOrMany::Many(v) if !v.is_empty() => {
            let joined = v
                .iter()
                .take(MAX_BYLINE_AUTHORS)
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            if v.len() > MAX_BYLINE_AUTHORS {
                format!("{} et al.", joined)
            } else {
                joined
            }
        }
        _ => UNKNOWN_AUTHOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(server_url: &str) -> PluginSettings {
        PluginSettings {
            server_url: server_url.to_string(),
            ..Default::default()
        }
    }

    fn link(rel: &str, href: &str) -> FeedLink {
        FeedLink {
            rel: rel.to_string(),
            href: href.to_string(),
        }
    }

    fn authors(names: &[&str]) -> OneOrMany<Author> {
        OneOrMany::Many(
            names
                .iter()
                .map(|n| Author {
                    name: n.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn full_image_link_resolves_against_server() {
        let entry = FeedEntry {
            title: "Dune".into(),
            link: vec![link("alternate", "/book/1"), link(COVER_REL, "/c1.jpg")],
            ..Default::default()
        };
        let view = format(&entry, &settings("https://cw.example"));
        assert_eq!(
            view.cover,
            CoverSource::Url("https://cw.example/c1.jpg".into())
        );
    }

    #[test]
    fn thumbnail_link_resolves_when_no_full_image() {
        let entry = FeedEntry {
            link: vec![link("other", "/x"), link(THUMBNAIL_REL, "/t.jpg")],
            ..Default::default()
        };
        let view = format(&entry, &settings("https://cw.example"));
        assert_eq!(
            view.cover,
            CoverSource::Url("https://cw.example/t.jpg".into())
        );
    }

    #[test]
    fn thumbnail_before_full_image_wins_the_scan() {
        let entry = FeedEntry {
            link: vec![link(THUMBNAIL_REL, "/t.jpg"), link(COVER_REL, "/c.jpg")],
            ..Default::default()
        };
        let view = format(&entry, &settings("https://s"));
        assert_eq!(view.cover, CoverSource::Url("https://s/t.jpg".into()));
    }

    #[test]
    fn rel_match_is_case_sensitive_and_exact() {
        let entry = FeedEntry {
            link: vec![
                link("http://opds-spec.org/IMAGE", "/a.jpg"),
                link("http://opds-spec.org/image/extra", "/b.jpg"),
            ],
            ..Default::default()
        };
        let view = format(&entry, &settings("https://s"));
        assert_eq!(view.cover, CoverSource::Placeholder);
    }

    #[test]
    fn no_links_means_placeholder() {
        let view = format(&FeedEntry::default(), &settings("https://s"));
        assert_eq!(view.cover, CoverSource::Placeholder);
    }

    #[test]
    fn single_author_used_verbatim() {
        let entry = FeedEntry {
            author: OneOrMany::One(Author {
                name: "F. Herbert".into(),
            }),
            ..Default::default()
        };
        let view = format(&entry, &settings(""));
        assert_eq!(view.author_line, "F. Herbert");
    }

    #[test]
    fn two_authors_joined_without_et_al() {
        let entry = FeedEntry {
            author: authors(&["A", "B"]),
            ..Default::default()
        };
        assert_eq!(format(&entry, &settings("")).author_line, "A, B");
    }

    #[test]
    fn three_authors_truncate_to_et_al() {
        let entry = FeedEntry {
            author: authors(&["A", "B", "C"]),
            ..Default::default()
        };
        assert_eq!(format(&entry, &settings("")).author_line, "A, B et al.");
    }

    #[test]
    fn five_authors_still_show_only_first_pair() {
        let entry = FeedEntry {
            author: authors(&["A", "B", "C", "D", "E"]),
            ..Default::default()
        };
        assert_eq!(format(&entry, &settings("")).author_line, "A, B et al.");
    }

    #[test]
    fn no_authors_reads_unknown() {
        let entry = FeedEntry {
            author: authors(&[]),
            ..Default::default()
        };
        assert_eq!(format(&entry, &settings("")).author_line, UNKNOWN_AUTHOR);
    }

    #[test]
    fn blank_single_author_reads_unknown() {
        let entry = FeedEntry {
            author: OneOrMany::One(Author { name: String::new() }),
            ..Default::default()
        };
        assert_eq!(format(&entry, &settings("")).author_line, UNKNOWN_AUTHOR);
    }

    #[test]
    fn title_passes_through_unescaped() {
        let entry = FeedEntry {
            title: "R&D <vol. 1>".into(),
            ..Default::default()
        };
        assert_eq!(format(&entry, &settings("")).title, "R&D <vol. 1>");
    }
}
