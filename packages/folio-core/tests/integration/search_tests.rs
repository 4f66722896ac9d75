//! Search semantics over the seed catalogue.

use folio_core::{BlogPost, RecordStore};

use super::helpers::{assert_non_increasing, new_post};

/// Reference predicate written independently of `SearchQuery`.
fn expected_match(post: &BlogPost, query: &str) -> bool {
    let q = query.to_lowercase();
    [&post.title, &post.content, &post.excerpt]
        .iter()
        .any(|field| field.to_lowercase().contains(&q))
        || post.tags.iter().any(|tag| tag.to_lowercase().contains(&q))
}

fn titles(posts: &[BlogPost]) -> Vec<&str> {
    posts.iter().map(|post| post.title.as_str()).collect()
}

#[test]
fn test_search_returns_exact_matching_subset() {
    let store = RecordStore::seeded();
    let all = store.get_blog_posts();

    for query in ["aws", "REACT", "circuit", "keycloak", "cost", "e", "zzz-no-match"] {
        let results = store.search_blog_posts(query);
        let expected: Vec<&BlogPost> = all.iter().filter(|p| expected_match(p, query)).collect();

        assert_eq!(results.len(), expected.len(), "query {:?}", query);
        for (got, want) in results.iter().zip(expected) {
            assert_eq!(got, want, "query {:?}", query);
        }
        let dates: Vec<_> = results.iter().map(|post| post.published_at).collect();
        assert_non_increasing(&dates);
    }
}

#[test]
fn test_search_by_tag() {
    let store = RecordStore::seeded();
    let results = store.search_blog_posts("terraform");
    assert_eq!(titles(&results), vec!["Infrastructure as Code with Terraform"]);

    let results = store.search_blog_posts("AWS");
    assert_eq!(
        titles(&results),
        vec![
            "Serverless Cost Optimization Strategies",
            "Infrastructure as Code with Terraform",
        ]
    );
}

#[test]
fn test_search_is_case_insensitive() {
    let store = RecordStore::seeded();
    assert_eq!(
        store.search_blog_posts("microservices"),
        store.search_blog_posts("MICROSERVICES")
    );
    assert!(!store.search_blog_posts("MiCrOsErViCeS").is_empty());
}

#[test]
fn test_empty_query_matches_everything() {
    let store = RecordStore::seeded();
    assert_eq!(store.search_blog_posts(""), store.get_blog_posts());
}

#[test]
fn test_search_includes_created_posts() {
    let mut store = RecordStore::seeded();
    let created = store.create_blog_post(new_post("Async Rust in Practice", &["Tokio"]));

    let results = store.search_blog_posts("tokio");
    assert_eq!(results, vec![created]);
}

#[test]
fn test_search_on_empty_store() {
    let store = RecordStore::new();
    assert!(store.search_blog_posts("anything").is_empty());
    assert!(store.search_blog_posts("").is_empty());
}
