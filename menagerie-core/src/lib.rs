//! menagerie-core: domain model and capability contracts for the
//! menagerie admin workflow.

pub mod config;
pub mod record;
pub mod store;
pub mod validate;

pub use config::{AdminConfig, AdminConfigSnapshot};
pub use record::{AnimalDraft, AnimalRecord, RecordId};
pub use store::{RecordStore, StoreError, StoreResult};
pub use validate::{validate_draft, FieldErrors};
