//! Authentication collaborator.
//!
//! The login flow only depends on the [`AuthApi`] trait. Two implementations
//! are provided: [`StubAuthApi`], an in-process placeholder with one hardcoded
//! account, and [`HttpAuthApi`], which talks to a real backend.

mod api;
mod http;
mod stub;

pub use api::AuthApi;
#[cfg(any(test, feature = "test-utils"))]
pub use api::MockAuthApi;
pub use http::HttpAuthApi;
pub use stub::{StubAuthApi, STUB_EMAIL, STUB_PASSWORD, STUB_TOKEN};
