//! Free-text search over blog posts.
//!
//! Matching is a case-insensitive substring test against the title, body,
//! excerpt, and every tag. There is no index: each search scans the whole
//! table, which is fine for a catalogue of a few dozen posts.

use chrono::{DateTime, Utc};

use crate::model::BlogPost;

/// A lowercased search needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Builds a query from raw caller input.
    ///
    /// The input is taken as-is apart from case folding. An empty query
    /// matches every post, because the empty string is a substring of
    /// every string.
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    /// The case-folded needle.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Returns true when the query is the empty string.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Tests a post against the query.
    pub fn matches(&self, post: &BlogPost) -> bool {
        contains_folded(&post.title, &self.needle)
            || contains_folded(&post.content, &self.needle)
            || contains_folded(&post.excerpt, &self.needle)
            || post.tags.iter().any(|tag| contains_folded(tag, &self.needle))
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Sorts rows by timestamp, most recent first.
///
/// The sort is stable, so rows with equal timestamps keep the order they
/// were given in.
pub fn newest_first<T, F>(rows: &mut [T], key: F)
where
    F: Fn(&T) -> DateTime<Utc>,
{
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn post(title: &str, content: &str, excerpt: &str, tags: &[&str]) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            excerpt: excerpt.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            category: "General".to_string(),
            published_at: Utc::now(),
            reading_time: "1 min read".to_string(),
        }
    }

    #[test]
    fn test_matches_each_field() {
        let p = post("Rust Ownership", "Borrow checker notes", "A short tour", &["Memory"]);

        assert!(SearchQuery::new("ownership").matches(&p));
        assert!(SearchQuery::new("BORROW").matches(&p));
        assert!(SearchQuery::new("short tour").matches(&p));
        assert!(SearchQuery::new("memo").matches(&p));
        assert!(!SearchQuery::new("garbage collector").matches(&p));
    }

    #[test]
    fn test_tag_match_is_substring() {
        let p = post("t", "c", "e", &["Distributed Systems"]);
        assert!(SearchQuery::new("systems").matches(&p));
        assert!(SearchQuery::new("distributed systems").matches(&p));
        assert!(!SearchQuery::new("distributed  systems").matches(&p));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = SearchQuery::new("");
        assert!(query.is_empty());
        assert!(query.matches(&post("", "", "", &[])));
        assert!(query.matches(&post("a", "b", "c", &["d"])));
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let query = SearchQuery::new(" ");
        assert!(!query.is_empty());
        assert!(query.matches(&post("two words", "", "", &[])));
        assert!(!query.matches(&post("oneword", "x", "y", &["z"])));
    }

    #[test]
    fn test_unicode_case_folding() {
        let p = post("Überblick", "", "", &[]);
        assert!(SearchQuery::new("ÜBER").matches(&p));
        assert_eq!(SearchQuery::new("ÜBER").needle(), "über");
    }

    #[test]
    fn test_newest_first_is_stable() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut rows = vec![
            ("old", base),
            ("tie-a", base + Duration::days(1)),
            ("new", base + Duration::days(2)),
            ("tie-b", base + Duration::days(1)),
        ];
        newest_first(&mut rows, |row| row.1);

        let order: Vec<&str> = rows.iter().map(|row| row.0).collect();
        assert_eq!(order, vec!["new", "tie-a", "tie-b", "old"]);
    }
}
