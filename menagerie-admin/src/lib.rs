//! menagerie-admin: the animal-records admin workflow.
//!
//! One list page plus one modal form. The `FormController` owns every piece
//! of transient UI state (mode, field values, validation errors, pending
//! attachment) and orchestrates submit; the `ListView` owns the fetched
//! record set and its loading/error phases. Both talk to the record store
//! and blob storage through the capability traits in `menagerie-core` and
//! `menagerie-blob`, and surface every outcome through the `Notifier` seam.

pub mod app;
pub mod form;
pub mod list;
pub mod notify;

pub use app::AdminApp;
pub use form::{Attachment, FormController, FormMode, SubmitOutcome};
pub use list::{ListPhase, ListView};
pub use notify::{MemoryNotifier, Notice, NoticeLevel, Notifier, TracingNotifier};
