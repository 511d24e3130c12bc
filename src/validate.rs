//! Structural validation of decoded API objects.
//!
//! Decoding an object from JSON only checks its shape. [Validate] goes further and checks the documented invariants:
//! numeric ranges, non-negative counts, enumerated strings and `type` discriminators. Validation is recursive; a
//! container validates its nested objects before its own fields and returns the first failure it finds.
//!
//! Most validators only run in [ValidationMode::Strict]. A handful of leaf validators, such as the `type` checks on
//! artists and tracks, always run.

use crate::error::{Error, Result};

/// How thoroughly to validate an object.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationMode {
    /// Run every check.
    Strict,
    /// Only run the checks that are never skipped.
    #[default]
    Lenient,
}

pub trait Validate {
    /// Validate this object and everything nested in it, returning the first failure.
    fn validate(&self, mode: ValidationMode) -> Result<()>;
}

/// The items of a multi-object endpoint response.
///
/// A failed validation doesn't discard the decoded items; they stay available alongside the error of the first item
/// that failed.
#[derive(Debug)]
pub struct Collection<T> {
    items: Vec<T>,
    validation_error: Option<Error>,
}

impl ValidationMode {
    pub fn is_strict(self) -> bool {
        self == ValidationMode::Strict
    }
}

impl<T> Validate for Vec<T>
where
    T: Validate,
{
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        self.iter().try_for_each(|item| item.validate(mode))
    }
}

impl<T> Validate for Option<T>
where
    T: Validate,
{
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        match self {
            Some(inner) => inner.validate(mode),
            None => Ok(()),
        }
    }
}

impl<T> Collection<T>
where
    T: Validate,
{
    pub(crate) fn validated(items: Vec<T>, mode: ValidationMode) -> Self {
        let validation_error = items.validate(mode).err();
        Self {
            items,
            validation_error,
        }
    }
}

impl<T> Collection<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Return the items, whether they validated or not.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// The error of the first item that failed validation, if any.
    pub fn validation_error(&self) -> Option<&Error> {
        self.validation_error.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.validation_error.is_none()
    }

    /// Return the items if they all validated, otherwise the first validation error.
    pub fn into_result(self) -> Result<Vec<T>> {
        match self.validation_error {
            Some(err) => Err(err),
            None => Ok(self.items),
        }
    }
}

pub(crate) fn ensure_non_negative(object: &'static str, field: &'static str, value: i64) -> Result<()> {
    if value < 0 {
        Err(Error::validation(object, field, format!("{value} is less than 0")))
    } else {
        Ok(())
    }
}

pub(crate) fn ensure_in_range<T>(object: &'static str, field: &'static str, value: T, min: T, max: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        Err(Error::validation(
            object,
            field,
            format!("{value} is out of bounds [{min}, {max}]"),
        ))
    } else {
        Ok(())
    }
}

/// Checks the value against an allow-list, ignoring case.
pub(crate) fn ensure_one_of(object: &'static str, field: &'static str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.iter().any(|candidate| candidate.eq_ignore_ascii_case(value)) {
        Ok(())
    } else {
        Err(Error::validation(object, field, format!("unknown value '{value}'")))
    }
}

/// Checks a `type` discriminator is either empty or equal to the expected literal.
pub(crate) fn ensure_object_type(object: &'static str, value: &str, expected: &str) -> Result<()> {
    if value.is_empty() || value == expected {
        Ok(())
    } else {
        Err(Error::validation(
            object,
            "type",
            format!("expected '{expected}', got '{value}'"),
        ))
    }
}
