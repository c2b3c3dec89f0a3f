//! Catalog of fiction excerpts.
//!
//! - [`Catalog`] - insertion-ordered works, addressable by position
//! - [`CatalogStore`] - shared catalog with serialized, persisted writes
//! - [`CatalogPersistence`] / [`JsonFilePersistence`] - load/save contract
//! - [`SelectionEngine`] - random work and excerpt choice
//! - [`split_sentences`] - turns submitted text into excerpts

#![warn(missing_docs)]

mod catalog;
mod persistence;
mod segment;
mod selection;
mod store;

pub use catalog::Catalog;
pub use persistence::{CatalogPersistence, JsonFilePersistence};
pub use segment::split_sentences;
pub use selection::SelectionEngine;
pub use store::CatalogStore;
