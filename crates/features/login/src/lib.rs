//! Login feature.
//!
//! Wires credential validation, the authentication collaborator and token
//! storage into a single submission flow, plus the form view-model that
//! renders its state.

mod bootstrap;
mod flow;
mod form;

pub use flow::{LoginFlow, SubmissionState};
pub use form::{FormView, LoginForm, SUBMIT_LABEL, SUBMITTING_LABEL};
