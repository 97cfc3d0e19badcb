//! todor - an in-memory todo record store
//!
//! The store owns an ordered collection of items and serves five operations:
//! list, find, create, toggle, and remove. Identifier generation and the
//! clock are injected so hosts and tests control them.

pub mod clock;
pub mod domain;
pub mod error;
pub mod id;
pub mod payload;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use domain::Item;
pub use error::{Result, TodoError};
pub use id::{IdGenerator, UuidGenerator};
pub use payload::{Request, Response};
pub use store::TodoStore;
