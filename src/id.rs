//! ID generation for todo items
//!
//! The store never invents ids itself; it asks an injected [`IdGenerator`].
//! [`UuidGenerator`] is the default used by hosts.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of globally unique, opaque item identifiers.
///
/// Implementations must never return a value they have returned before
/// for the lifetime of the store that owns them.
pub trait IdGenerator: Send + Sync {
    /// Produce the next identifier
    fn next_id(&self) -> String;
}

/// Generate a unique item ID
///
/// Format: hyphenated lowercase UUID v4
/// Example: `9b2f6c1e-3d4a-4e8b-9c0d-1f2e3a4b5c6d`
pub fn generate_item_id() -> String {
    Uuid::new_v4().to_string()
}

/// Random UUID v4 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        generate_item_id()
    }
}

/// Deterministic ids for tests and scripted sessions
///
/// Format: `{prefix}-{counter:04}`, counter starting at 1.
/// Example: `item-0001`
#[derive(Debug, Default)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{:04}", self.prefix, n)
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}
