//! Store contract tests: round trips, ordering, and absence.

use chrono::Utc;
use ntest::timeout;
use uuid::Uuid;

use folio_core::{parse_record_id, RecordStore};

use super::helpers::{assert_non_increasing, new_contact, new_post, new_user};

/// Every created post reads back equal to what create returned.
#[test]
fn test_created_posts_read_back_equal() {
    let mut store = RecordStore::seeded();
    let created: Vec<_> = (0..20)
        .map(|i| store.create_blog_post(new_post(&format!("Post {}", i), &["Rust"])))
        .collect();

    for post in &created {
        assert_eq!(store.get_blog_post(&post.id).as_ref(), Some(post));
    }
    assert_eq!(store.stats().blog_posts, 6 + created.len());
}

#[test]
fn test_blog_posts_are_newest_first() {
    let mut store = RecordStore::seeded();
    for i in 0..5 {
        store.create_blog_post(new_post(&format!("Post {}", i), &[]));
    }

    let posts = store.get_blog_posts();
    let dates: Vec<_> = posts.iter().map(|post| post.published_at).collect();
    assert_non_increasing(&dates);

    // Fresh posts outrank the 2024 catalogue
    assert!(posts[..5].iter().all(|post| post.category == "Testing"));
}

#[test]
fn test_contact_round_trip() {
    let mut store = RecordStore::new();
    let started = Utc::now();
    let created = store.create_contact(folio_core::NewContact {
        name: "A".to_string(),
        email: "a@x.com".to_string(),
        subject: "S".to_string(),
        message: "M".to_string(),
    });

    let contacts = store.get_contacts();
    let found = contacts
        .iter()
        .find(|contact| contact.id == created.id)
        .expect("created contact should be listed");
    assert_eq!(found.name, "A");
    assert_eq!(found.email, "a@x.com");
    assert_eq!(found.subject, "S");
    assert_eq!(found.message, "M");
    assert!(found.created_at >= started);
}

#[test]
fn test_contacts_are_newest_first() {
    let mut store = RecordStore::new();
    for name in ["Ann", "Bob", "Cid", "Dee"] {
        store.create_contact(new_contact(name));
    }

    let contacts = store.get_contacts();
    assert_eq!(contacts.len(), 4);
    let stamps: Vec<_> = contacts.iter().map(|contact| contact.created_at).collect();
    assert_non_increasing(&stamps);
}

#[test]
fn test_consecutive_users_get_distinct_ids() {
    let mut store = RecordStore::new();
    let first = store.create_user(new_user("first"));
    let second = store.create_user(new_user("second"));

    assert_ne!(first.id, second.id);
    assert_eq!(store.get_user(&first.id), Some(first));
    assert_eq!(store.get_user(&second.id), Some(second));
}

#[test]
fn test_duplicate_usernames_are_accepted() {
    let mut store = RecordStore::new();
    let first = store.create_user(new_user("taken"));
    let second = store.create_user(new_user("taken"));

    assert_ne!(first.id, second.id);
    assert_eq!(store.stats().users, 2);
    // Lookup by name returns the earliest insert
    assert_eq!(store.get_user_by_username("taken"), Some(first));
}

#[test]
fn test_unknown_ids_are_absent() {
    let store = RecordStore::seeded();

    assert!(parse_record_id("nonexistent-id").is_none());
    assert!(store.get_user(&Uuid::new_v4()).is_none());
    assert!(store.get_blog_post(&Uuid::new_v4()).is_none());
}

#[test]
#[timeout(10000)]
fn test_ids_unique_across_tables() {
    let mut store = RecordStore::new();
    let mut seen = std::collections::HashSet::new();
    for i in 0..500 {
        assert!(seen.insert(store.create_user(new_user(&format!("u{}", i))).id));
        assert!(seen.insert(store.create_blog_post(new_post(&format!("p{}", i), &[])).id));
        assert!(seen.insert(store.create_contact(new_contact(&format!("c{}", i))).id));
    }
    assert_eq!(seen.len(), 1500);
}
