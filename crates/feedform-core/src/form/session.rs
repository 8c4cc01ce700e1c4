//! An editing session over one form and its submit lifecycle.
//!
//! `Idle → Submitting → Succeeded | Failed`. While a submission is in flight
//! further submits are refused; the URL is fixed from the values present
//! when the submit started.

use std::sync::Arc;

use super::{FormModel, FormValues};
use crate::assemble::{AssembleError, AssembledUrl};
use crate::fetch::{FeedFetcher, FetchError, FetchedFeed};
use crate::schema::{FieldError, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting { url: AssembledUrl },
    Succeeded(FetchedFeed),
    Failed { message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("form is invalid: {0}")]
    Invalid(ValidationErrors),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("no submission in flight")]
    NotInFlight,
    #[error(transparent)]
    Assembly(#[from] AssembleError),
    #[error("failed to fetch feed")]
    Fetch(#[source] FetchError),
}

#[derive(Debug)]
pub struct FormSession {
    model: Arc<FormModel>,
    values: FormValues,
    state: SubmitState,
}

impl FormSession {
    pub fn new(model: Arc<FormModel>) -> Self {
        let values = model.defaults().clone();
        Self {
            model,
            values,
            state: SubmitState::Idle,
        }
    }

    pub fn model(&self) -> &FormModel {
        &self.model
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmitState::Submitting { .. })
    }

    /// Sets a field and returns its validation error, if any.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Option<FieldError> {
        self.values.set(name, value);
        self.field_error(name)
    }

    pub fn clear(&mut self, name: &str) -> Option<FieldError> {
        self.values.clear(name);
        self.field_error(name)
    }

    pub fn field_error(&self, name: &str) -> Option<FieldError> {
        self.model.schema().field_error(name, &self.values)
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.model.schema().validate(&self.values)
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.validate().is_ok()
    }

    /// True once values differ from the declared defaults.
    pub fn is_dirty(&self) -> bool {
        self.values != *self.model.defaults()
    }

    /// Dismissing would discard edits or abandon a pending submit.
    pub fn can_dismiss(&self) -> bool {
        !self.is_dirty() && !self.is_submitting()
    }

    /// Validates, assembles and enters `Submitting`. The fetcher must not be
    /// called when this fails.
    pub fn begin_submit(&mut self) -> Result<AssembledUrl, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        self.validate().map_err(SubmitError::Invalid)?;
        let url = self.model.assemble(&self.values).map_err(|err| {
            tracing::warn!(%err, "cannot assemble feed url");
            err
        })?;
        tracing::info!(url = %url, "submitting feed url");
        self.state = SubmitState::Submitting { url: url.clone() };
        Ok(url)
    }

    /// Records the fetch outcome of the in-flight submission.
    pub fn settle(
        &mut self,
        result: Result<FetchedFeed, FetchError>,
    ) -> Result<FetchedFeed, SubmitError> {
        if !self.is_submitting() {
            return Err(SubmitError::NotInFlight);
        }
        match result {
            Ok(feed) => {
                tracing::info!(url = %feed.url, id = ?feed.id, "feed resolved");
                self.state = SubmitState::Succeeded(feed.clone());
                Ok(feed)
            }
            Err(err) => {
                tracing::warn!(%err, "feed fetch failed");
                self.state = SubmitState::Failed {
                    message: err.to_string(),
                };
                Err(SubmitError::Fetch(err))
            }
        }
    }

    /// Synchronous submit: begin, fetch, settle.
    pub fn submit_with<F: FeedFetcher + ?Sized>(
        &mut self,
        fetcher: &F,
    ) -> Result<FetchedFeed, SubmitError> {
        let url = self.begin_submit()?;
        let result = fetcher.fetch_feed(&url);
        self.settle(result)
    }
}
