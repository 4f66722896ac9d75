//! Seeding behaviour at store construction.

use folio_core::config::FolioConfig;
use folio_core::seed::SEED_POSTS;
use folio_core::RecordStore;

#[test]
fn test_seeded_listing_matches_catalogue() {
    let store = RecordStore::seeded();
    let posts = store.get_blog_posts();

    assert_eq!(posts.len(), SEED_POSTS.len());
    for (post, seed) in posts.iter().zip(SEED_POSTS) {
        assert_eq!(post.title, seed.title);
        assert_eq!(post.content, seed.content);
        assert_eq!(post.excerpt, seed.excerpt);
        assert_eq!(post.category, seed.category);
        assert_eq!(post.reading_time, seed.reading_time);
        assert_eq!(post.published_at, seed.published_at());
        assert_eq!(post.tags, seed.tags.to_vec());
    }
}

#[test]
fn test_seeded_titles_in_publication_order() {
    let store = RecordStore::seeded();
    let titles: Vec<String> = store
        .get_blog_posts()
        .into_iter()
        .map(|post| post.title)
        .collect();

    assert_eq!(
        titles,
        vec![
            "Building Production-Ready LLM APIs",
            "Serverless Cost Optimization Strategies",
            "Infrastructure as Code with Terraform",
            "Implementing OAuth2 with Keycloak",
            "Optimizing React Performance",
            "Microservices Design Patterns",
        ]
    );
}

#[test]
fn test_seed_ids_differ_between_stores() {
    let a = RecordStore::seeded().get_blog_posts();
    let b = RecordStore::seeded().get_blog_posts();
    for (left, right) in a.iter().zip(&b) {
        assert_eq!(left.title, right.title);
        assert_ne!(left.id, right.id);
    }
}

#[test]
fn test_seeding_can_be_disabled() {
    let config = FolioConfig {
        seed_blog_posts: false,
        ..Default::default()
    };
    let store = RecordStore::from_config(&config);
    assert!(store.get_blog_posts().is_empty());
}
