//! TodoStore: the ordered, exclusively-owned collection of items.
//!
//! Items live in a `Vec` in creation order and are looked up by linear scan.
//! Read operations hand out shared borrows, so nothing a caller holds can
//! change while it is held; mutating operations need `&mut self`.

use log::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::domain::Item;
use crate::error::{Result, TodoError};
use crate::id::{IdGenerator, UuidGenerator};

/// Owner of the todo items and the CRUD contract over them.
#[derive(Debug)]
pub struct TodoStore<I: IdGenerator = UuidGenerator, C: Clock = SystemClock> {
    /// Items in creation order
    items: Vec<Item>,

    /// Supplies ids for new items
    ids: I,

    /// Supplies created_at / updated_at values
    clock: C,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new(UuidGenerator, SystemClock::new())
    }
}

impl<I: IdGenerator, C: Clock> TodoStore<I, C> {
    /// Create an empty store with the given capabilities.
    pub fn new(ids: I, clock: C) -> Self {
        Self {
            items: Vec::new(),
            ids,
            clock,
        }
    }

    /// All items, oldest first.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id. Absence is a normal result, not an error.
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append a new, incomplete item and return a copy of it.
    pub fn create(&mut self, content: impl Into<String>) -> Item {
        let id = self.ids.next_id();
        let now = self.clock.now();
        let item = Item::new(id, content.into(), now);

        debug!("Created item {}", item.id);
        self.items.push(item.clone());
        item
    }

    /// Flip an item's completion flag and refresh its `updated_at`.
    pub fn toggle(&mut self, id: &str) -> Result<()> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            warn!("Toggle failed, no item with id {}", id);
            return Err(TodoError::NotFound(id.to_string()));
        };

        item.toggle(self.clock.now());
        debug!("Toggled item {} (completed: {})", item.id, item.completed);
        Ok(())
    }

    /// Remove an item; later items move up one position.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let Some(index) = self.position(id) else {
            warn!("Remove failed, no item with id {}", id);
            return Err(TodoError::NotFound(id.to_string()));
        };

        self.items.remove(index);
        debug!("Removed item {}", id);
        Ok(())
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SteppingClock;
    use crate::id::SequentialIds;
    use chrono::{Duration, TimeZone, Utc};
    use std::collections::HashSet;

    fn create_test_store() -> TodoStore<SequentialIds, SteppingClock> {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        TodoStore::new(SequentialIds::new("item"), SteppingClock::new(start, Duration::seconds(1)))
    }

    fn ids(store: &TodoStore<SequentialIds, SteppingClock>) -> Vec<String> {
        store.list().iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn test_empty_store() {
        let store = create_test_store();
        assert!(store.list().is_empty());
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_create_returns_fresh_item() {
        let mut store = create_test_store();
        let item = store.create("buy milk");

        assert_eq!(item.id, "item-0001");
        assert_eq!(item.content, "buy milk");
        assert!(!item.completed);
        assert_eq!(item.created_at, "2026-01-01T00:00:00.000Z");
        assert_eq!(item.created_at, item.updated_at);
        assert_eq!(store.list(), &[item]);
    }

    #[test]
    fn test_create_accepts_empty_content() {
        let mut store = create_test_store();
        let item = store.create("");
        assert_eq!(item.content, "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_in_creation_order() {
        let mut store = create_test_store();
        let a = store.create("buy milk");
        let b = store.create("buy eggs");
        let c = store.create("buy bread");
        assert_eq!(ids(&store), vec![a.id, b.id, c.id]);
    }

    #[test]
    fn test_ids_unique() {
        let mut store = create_test_store();
        let created: HashSet<String> = (0..50).map(|n| store.create(format!("task {}", n)).id).collect();
        assert_eq!(created.len(), 50);
    }

    #[test]
    fn test_find_present_and_absent() {
        let mut store = create_test_store();
        let a = store.create("buy milk");

        assert_eq!(store.find(&a.id), Some(&a));
        assert_eq!(store.find("nonexistent-id"), None);
        assert_eq!(store.find(""), None);
    }

    #[test]
    fn test_toggle_flips_and_advances_updated_at() {
        let mut store = create_test_store();
        let a = store.create("buy milk");
        let b = store.create("buy eggs");

        store.toggle(&a.id).unwrap();

        let toggled = store.find(&a.id).unwrap();
        assert!(toggled.completed);
        assert_eq!(toggled.created_at, a.created_at);
        assert!(toggled.updated_at > a.updated_at);
        assert_eq!(store.find(&b.id), Some(&b));
    }

    #[test]
    fn test_toggle_twice_restores_flag_not_timestamp() {
        let mut store = create_test_store();
        let a = store.create("buy milk");

        store.toggle(&a.id).unwrap();
        let after_first = store.find(&a.id).unwrap().updated_at.clone();
        store.toggle(&a.id).unwrap();
        let item = store.find(&a.id).unwrap();

        assert!(!item.completed);
        assert!(item.updated_at > after_first);
        assert!(after_first > a.updated_at);
    }

    #[test]
    fn test_toggle_keeps_position() {
        let mut store = create_test_store();
        let a = store.create("one");
        let b = store.create("two");
        let c = store.create("three");

        store.toggle(&b.id).unwrap();
        assert_eq!(ids(&store), vec![a.id, b.id, c.id]);
    }

    #[test]
    fn test_toggle_missing_is_not_found() {
        let mut store = create_test_store();
        let a = store.create("buy milk");

        let err = store.toggle("nonexistent-id").unwrap_err();
        assert_eq!(err, TodoError::NotFound("nonexistent-id".to_string()));
        assert_eq!(store.list(), &[a]);
    }

    #[test]
    fn test_remove_shifts_later_items() {
        let mut store = create_test_store();
        let a = store.create("one");
        let b = store.create("two");
        let c = store.create("three");

        store.remove(&b.id).unwrap();
        assert_eq!(store.list(), &[a, c]);
    }

    #[test]
    fn test_remove_then_lookups_fail() {
        let mut store = create_test_store();
        let a = store.create("buy milk");

        store.remove(&a.id).unwrap();

        assert_eq!(store.find(&a.id), None);
        assert_eq!(store.remove(&a.id), Err(TodoError::NotFound(a.id.clone())));
        assert_eq!(store.toggle(&a.id), Err(TodoError::NotFound(a.id.clone())));
        assert!(store.is_empty());
    }

    #[test]
    fn test_recreate_gets_new_id() {
        let mut store = create_test_store();
        let a = store.create("buy milk");
        store.remove(&a.id).unwrap();

        let again = store.create("buy milk");
        assert_ne!(again.id, a.id);
    }

    #[test]
    fn test_created_never_after_updated() {
        let mut store = create_test_store();
        let a = store.create("one");
        store.create("two");
        store.toggle(&a.id).unwrap();
        store.toggle(&a.id).unwrap();

        assert!(store.list().iter().all(|item| item.created_at <= item.updated_at));
    }

    #[test]
    fn test_returned_item_is_a_copy() {
        let mut store = create_test_store();
        let a = store.create("buy milk");
        store.toggle(&a.id).unwrap();

        assert!(!a.completed);
        assert!(store.find(&a.id).unwrap().completed);
    }

    #[test]
    fn test_default_store_uses_uuid_and_system_clock() {
        let mut store: TodoStore = TodoStore::default();
        let item = store.create("buy milk");
        assert!(uuid::Uuid::parse_str(&item.id).is_ok());
        assert!(item.created_at.ends_with('Z'));
    }
}
