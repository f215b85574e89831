//! Login credentials and their validation.
//!
//! Validation is a plain function returning a tagged result, so it can be
//! shared by the submission flow, form view-models and tests without any
//! binding to a particular UI mechanism.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::constants::{
    password_too_long_message, password_too_short_message, EMAIL_INVALID_MESSAGE,
    EMAIL_REQUIRED_MESSAGE, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
use crate::error::{DomainError, DomainResult};

/// Raw email/password pair as typed by the user.
///
/// Serialized as the login request body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Don't expose the password in debug output (security)
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Form field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level validation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field. The first message recorded wins.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Outcome of validating a set of credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(Credentials),
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// Convert into a `Result`, carrying field errors as a domain error.
    pub fn into_result(self) -> DomainResult<Credentials> {
        match self {
            ValidationResult::Valid(credentials) => Ok(credentials),
            ValidationResult::Invalid(errors) => Err(DomainError::Validation(errors)),
        }
    }
}

/// Validate raw credentials.
///
/// Returns the input unchanged when both fields pass; otherwise one message
/// per failing field.
pub fn validate(input: Credentials) -> ValidationResult {
    let mut errors = FieldErrors::new();

    if input.email.is_empty() {
        errors.add(Field::Email, EMAIL_REQUIRED_MESSAGE);
    } else if !input.email.validate_email() {
        errors.add(Field::Email, EMAIL_INVALID_MESSAGE);
    }

    let password_len = input.password.chars().count();
    if password_len < MIN_PASSWORD_LENGTH {
        errors.add(Field::Password, password_too_short_message());
    } else if password_len > MAX_PASSWORD_LENGTH {
        errors.add(Field::Password, password_too_long_message());
    }

    if errors.is_empty() {
        ValidationResult::Valid(input)
    } else {
        ValidationResult::Invalid(errors)
    }
}
