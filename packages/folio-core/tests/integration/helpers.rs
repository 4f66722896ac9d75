//! Shared builders for store tests.

use folio_core::{NewBlogPost, NewContact, NewUser};

pub fn new_post(title: &str, tags: &[&str]) -> NewBlogPost {
    NewBlogPost {
        title: title.to_string(),
        content: format!("Content for {}", title),
        excerpt: format!("Excerpt for {}", title),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        category: "Testing".to_string(),
        reading_time: "2 min read".to_string(),
    }
}

pub fn new_contact(name: &str) -> NewContact {
    NewContact {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        subject: format!("Hello from {}", name),
        message: "Let's talk.".to_string(),
    }
}

pub fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: "secret".to_string(),
    }
}

/// Asserts a sequence of timestamps never increases.
pub fn assert_non_increasing<T: PartialOrd + std::fmt::Debug>(values: &[T]) {
    for pair in values.windows(2) {
        assert!(
            pair[0] >= pair[1],
            "expected non-increasing order, got {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
}
