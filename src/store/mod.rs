//! In-memory record store for todo items.
//!
//! # Example
//!
//! ```
//! use todor::store::TodoStore;
//!
//! let mut store: TodoStore = TodoStore::default();
//! let item = store.create("buy milk");
//! store.toggle(&item.id)?;
//! assert!(store.find(&item.id).is_some_and(|i| i.completed));
//! store.remove(&item.id)?;
//! assert!(store.list().is_empty());
//! # Ok::<(), todor::TodoError>(())
//! ```

mod todo_store;

pub use todo_store::TodoStore;
