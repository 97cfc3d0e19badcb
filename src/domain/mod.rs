//! Domain types for todor
//!
//! The store manages a single record type, [`Item`].

pub mod item;

pub use item::Item;
