//! Catalog domain module.
//!
//! An in-memory, append-only catalog of inventory items, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod catalog;
pub mod item;

pub use catalog::{Catalog, CatalogCommand, CatalogEvent, StockUpdate};
pub use item::{Item, NewItem};
