//! The add/edit form: a small state machine plus submit orchestration.
//!
//! State is `Closed`, `Add`, or `Edit(record)`. Submit validates first,
//! uploads an attachment if one is pending, then dispatches create or update.
//! Validation and upload failures leave the dialog exactly as the user left
//! it; only a successful save closes it.

use std::sync::Arc;

use bytes::Bytes;

use menagerie_blob::{BlobAdapter, BlobUpload};
use menagerie_core::{
    validate_draft, AnimalDraft, AnimalRecord, FieldErrors, RecordStore,
};

use crate::notify::{Notice, Notifier};

/// A file the user picked but has not yet submitted.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl Attachment {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type<S: Into<String>>(mut self, content_type: S) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Which dialog, if any, is open.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Closed,
    Add,
    Edit(AnimalRecord),
}

/// What a submit attempt came to.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Saved and closed; the caller should refresh the list.
    Saved(AnimalRecord),
    /// Field validation failed; no remote call was issued.
    Invalid,
    /// The attachment upload failed; no create/update was issued.
    UploadFailed,
    /// The create/update call failed; the dialog stays open.
    SaveFailed,
    /// Submit with no dialog open does nothing.
    NotOpen,
}

/// Owns the transient form state and runs the submit pipeline.
pub struct FormController {
    store: Arc<dyn RecordStore>,
    blobs: BlobAdapter,
    notifier: Arc<dyn Notifier>,

    mode: FormMode,
    name: String,
    species: String,
    image_url: String,
    errors: FieldErrors,
    attachment: Option<Attachment>,
}

impl FormController {
    pub fn new(store: Arc<dyn RecordStore>, blobs: BlobAdapter, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            blobs,
            notifier,
            mode: FormMode::Closed,
            name: String::new(),
            species: String::new(),
            image_url: String::new(),
            errors: FieldErrors::default(),
            attachment: None,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Open the dialog in add mode with empty fields.
    pub fn open_add(&mut self) {
        self.reset_fields();
        self.mode = FormMode::Add;
    }

    /// Open the dialog pre-populated from an existing record.
    pub fn open_edit(&mut self, record: AnimalRecord) {
        self.reset_fields();
        let draft = record.draft();
        self.name = draft.name;
        self.species = draft.species;
        self.image_url = draft.image_url.unwrap_or_default();
        self.mode = FormMode::Edit(record);
    }

    /// Close the dialog, discarding all field state. Issues no remote calls.
    pub fn cancel(&mut self) {
        self.reset_fields();
        self.mode = FormMode::Closed;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_species(&mut self, species: impl Into<String>) {
        self.species = species.into();
    }

    pub fn set_image_url(&mut self, url: impl Into<String>) {
        self.image_url = url.into();
    }

    pub fn attach(&mut self, attachment: Attachment) {
        self.attachment = Some(attachment);
    }

    pub fn clear_attachment(&mut self) {
        self.attachment = None;
    }

    /// Run the submit pipeline: validate, upload, dispatch, report.
    ///
    /// An uploaded image always overrides a manually entered URL. Within one
    /// submit the upload resolves before the create/update call is issued.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let editing = match &self.mode {
            FormMode::Closed => {
                tracing::debug!("submit with no dialog open");
                return SubmitOutcome::NotOpen;
            }
            FormMode::Add => None,
            FormMode::Edit(record) => Some(record.clone()),
        };

        let mut draft = match validate_draft(&self.current_draft()) {
            Ok(draft) => draft,
            Err(errors) => {
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };
        self.errors = FieldErrors::default();

        if let Some(attachment) = &self.attachment {
            let mut upload = BlobUpload::new(attachment.filename.clone(), attachment.bytes.clone());
            if let Some(ct) = &attachment.content_type {
                upload = upload.with_content_type(ct.clone());
            }

            match self.blobs.upload(upload).await {
                Ok(receipt) => {
                    draft.image_url = Some(receipt.public_url);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "image upload failed");
                    self.notifier.notify(Notice::error("Failed to upload image"));
                    return SubmitOutcome::UploadFailed;
                }
            }
        }

        let saved = match &editing {
            Some(record) => self.store.update(&record.id, draft).await,
            None => self.store.create(draft).await,
        };

        match saved {
            Ok(record) => {
                let message = if editing.is_some() {
                    "Animal updated successfully"
                } else {
                    "Animal added successfully"
                };
                self.reset_fields();
                self.mode = FormMode::Closed;
                self.notifier.notify(Notice::success(message));
                SubmitOutcome::Saved(record)
            }
            Err(err) => {
                let operation = if editing.is_some() { "update" } else { "add" };
                tracing::warn!(error = %err, operation, "save failed");
                self.notifier
                    .notify(Notice::error(format!("Failed to {operation} animal")));
                SubmitOutcome::SaveFailed
            }
        }
    }

    fn current_draft(&self) -> AnimalDraft {
        let mut draft = AnimalDraft::new(self.name.clone(), self.species.clone());
        if !self.image_url.is_empty() {
            draft = draft.with_image_url(self.image_url.clone());
        }
        draft
    }

    fn reset_fields(&mut self) {
        self.name.clear();
        self.species.clear();
        self.image_url.clear();
        self.errors = FieldErrors::default();
        self.attachment = None;
    }
}
