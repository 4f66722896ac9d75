use super::*;
use crate::model::{Record, RecordId};
use ntest::timeout;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: RecordId,
    label: String,
}

impl Record for Row {
    fn id(&self) -> RecordId {
        self.id
    }
}

fn insert(table: &mut Table<Row>, label: &str) -> RecordId {
    table
        .insert_with(|id| Row {
            id,
            label: label.to_string(),
        })
        .id
}

#[test]
fn test_new_table_is_empty() {
    let table: Table<Row> = Table::new("rows", 8);
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert_eq!(table.name(), "rows");
    assert!(table.get(&uuid::Uuid::new_v4()).is_none());
}

#[test]
fn test_insert_and_get() {
    let mut table = Table::new("rows", 0);
    let id = insert(&mut table, "first");

    let row = table.get(&id).unwrap();
    assert_eq!(row.id, id);
    assert_eq!(row.label, "first");
    assert_eq!(table.len(), 1);
}

#[test]
fn test_iteration_keeps_insertion_order() {
    let mut table = Table::new("rows", 0);
    for label in ["a", "b", "c", "d"] {
        insert(&mut table, label);
    }

    let labels: Vec<&str> = table.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_find_returns_first_match() {
    let mut table = Table::new("rows", 0);
    let first = insert(&mut table, "dup");
    insert(&mut table, "other");
    let second = insert(&mut table, "dup");

    let found = table.find(|row| row.label == "dup").unwrap();
    assert_eq!(found.id, first);
    assert_ne!(found.id, second);
    assert!(table.find(|row| row.label == "missing").is_none());
}

#[test]
#[timeout(5000)]
fn test_generated_ids_are_unique() {
    let mut table = Table::new("rows", 10_000);
    let mut seen = std::collections::HashSet::new();
    for i in 0..10_000 {
        let id = insert(&mut table, &i.to_string());
        assert!(seen.insert(id), "duplicate id {}", id);
    }
    assert_eq!(table.len(), 10_000);
    for id in &seen {
        assert!(table.get(id).is_some());
    }
}
