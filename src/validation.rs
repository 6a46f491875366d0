//! Payload validation.
//!
//! Request bodies implement [`Validatable`]; handlers call `validate()` before
//! anything touches the store, and the collected [`ValidationErrors`] convert
//! straight into a 400 response.

use serde::Serialize;
use std::fmt;

/// Maximum title length, counted in characters.
pub const TITLE_MAX_LEN: usize = 50;

/// Validation error with field name and message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Record the outcome of a single check, keeping only failures.
    pub fn check(&mut self, outcome: Result<(), ValidationError>) {
        if let Err(error) = outcome {
            self.add(error);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// User-facing messages, one per failed check.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    /// Convert to Result
    ///
    /// # Errors
    /// Returns `self` when at least one check failed.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Types that can check their own invariants before being persisted.
pub trait Validatable {
    /// # Errors
    /// Returns every failed check.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

pub mod validators {
    use super::{TITLE_MAX_LEN, ValidationError};

    /// Value must contain something other than whitespace.
    ///
    /// # Errors
    /// Fails for empty or whitespace-only input.
    pub fn validate_required(
        field: &str,
        value: &str,
        message: &str,
    ) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new(field, message));
        }
        Ok(())
    }

    /// Value must have at most `max` characters (not bytes).
    ///
    /// # Errors
    /// Fails when the character count exceeds `max`.
    pub fn validate_max_chars(
        field: &str,
        value: &str,
        max: usize,
        message: &str,
    ) -> Result<(), ValidationError> {
        if value.chars().count() > max {
            return Err(ValidationError::new(field, message));
        }
        Ok(())
    }

    /// Title rules shared by create and update bodies.
    ///
    /// # Errors
    /// Fails for a blank title or one longer than [`TITLE_MAX_LEN`].
    pub fn validate_title(title: &str) -> Result<(), ValidationError> {
        validate_required("title", title, "The title is required")?;
        validate_max_chars(
            "title",
            title,
            TITLE_MAX_LEN,
            "The title must be between 1 and 50 characters long",
        )
    }
}
