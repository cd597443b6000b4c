//! menagerie-store: `RecordStore` adapters.
//!
//! Two backends: an in-memory map for tests and demos, and a REST adapter
//! speaking a PostgREST-style row API for hosted backends.

mod memory;
mod rest;

pub use memory::MemoryRecordStore;
pub use rest::{RestConfig, RestRecordStore};
