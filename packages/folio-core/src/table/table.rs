//! Arena storage for one entity kind.
//!
//! Each table has:
//! - Rows in insertion order
//! - A hash index from record id to row position
//! - Its own id generator

use std::collections::HashMap;

use uuid::Uuid;

use crate::model::{Record, RecordId};

/// Insertion-ordered rows with an id index.
///
/// Rows are never removed or replaced, so a position recorded in the index
/// stays valid for the lifetime of the table.
#[derive(Debug)]
pub struct Table<T> {
    /// Table name, used in log events
    name: &'static str,
    /// Rows in insertion order
    rows: Vec<T>,
    /// Record id to position in `rows`
    index: HashMap<RecordId, usize>,
}

impl<T: Record> Table<T> {
    /// Creates an empty table.
    ///
    /// # Arguments
    /// * `name` - Table name
    /// * `initial_capacity` - Number of rows to reserve up front
    pub fn new(name: &'static str, initial_capacity: usize) -> Self {
        Self {
            name,
            rows: Vec::with_capacity(initial_capacity),
            index: HashMap::with_capacity(initial_capacity),
        }
    }

    /// Returns the table name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Draws a fresh id that no row in this table uses.
    fn next_id(&self) -> RecordId {
        loop {
            let id = Uuid::new_v4();
            if !self.index.contains_key(&id) {
                return id;
            }
            tracing::warn!("Record id collision in table {}, drawing again", self.name);
        }
    }

    /// Inserts a row built from a freshly generated id.
    ///
    /// # Arguments
    /// * `build` - Constructs the row from its assigned id
    ///
    /// # Returns
    /// Reference to the stored row.
    pub fn insert_with<F>(&mut self, build: F) -> &T
    where
        F: FnOnce(RecordId) -> T,
    {
        let id = self.next_id();
        let row = build(id);
        debug_assert_eq!(row.id(), id, "row must keep the id it was built with");

        let position = self.rows.len();
        self.rows.push(row);
        self.index.insert(id, position);
        tracing::trace!("Inserted {} into table {}", id, self.name);
        &self.rows[position]
    }

    /// Looks up a row by id.
    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.index.get(id).map(|&position| &self.rows[position])
    }

    /// Returns the first row, in insertion order, matching the predicate.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.rows.iter().find(|row| predicate(row))
    }

    /// Iterates rows in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a, T: Record> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
