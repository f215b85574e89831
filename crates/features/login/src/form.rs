//! Login form view-model.
//!
//! Holds what the login form renders: per-field messages, the error banner
//! and whether the submit control is busy.

use std::sync::Arc;

use domain::{AuthOutcome, Credentials, Field, FieldErrors, Session};

use crate::flow::LoginFlow;

/// Submit button label when idle
pub const SUBMIT_LABEL: &str = "Login";

/// Submit button label while a submission is in flight
pub const SUBMITTING_LABEL: &str = "Logging in...";

/// Render-ready form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub field_errors: FieldErrors,
    pub error: Option<String>,
    pub is_submitting: bool,
}

impl FormView {
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(field)
    }

    /// Whether the field should be marked invalid (`aria-invalid`).
    pub fn is_invalid(&self, field: Field) -> bool {
        self.field_errors.contains(field)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.is_submitting
    }
}

/// A login form bound to a shared [`LoginFlow`].
#[derive(Debug)]
pub struct LoginForm {
    flow: Arc<LoginFlow>,
    field_errors: FieldErrors,
    error: Option<String>,
}

impl LoginForm {
    pub fn new(flow: Arc<LoginFlow>) -> Self {
        Self {
            flow,
            field_errors: FieldErrors::new(),
            error: None,
        }
    }

    pub fn view(&self) -> FormView {
        FormView {
            field_errors: self.field_errors.clone(),
            error: self.error.clone(),
            is_submitting: self.flow.state().is_submitting(),
        }
    }

    /// Submit the typed credentials.
    ///
    /// Validation failures only replace the field messages; the banner keeps
    /// whatever the last real attempt left there.
    pub async fn submit(&mut self, input: Credentials) -> Option<Session> {
        match self.flow.submit(input).await {
            Err(errors) => {
                self.field_errors = errors;
                None
            }
            Ok(outcome) => {
                self.field_errors = FieldErrors::new();
                match outcome {
                    AuthOutcome::Success(session) => {
                        self.error = None;
                        Some(session)
                    }
                    AuthOutcome::Failure(message) => {
                        self.error = Some(message);
                        None
                    }
                }
            }
        }
    }
}
