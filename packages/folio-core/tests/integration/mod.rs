//! Integration tests for the record store.
//!
//! 1. Store contract: create/read round trips, ordering, absence
//! 2. Search semantics against the seed catalogue
//! 3. Seeding

pub mod helpers;
pub mod search_tests;
pub mod seed_tests;
pub mod store_tests;
