//! Validation - pluggable correctness checks over one entity.

mod article;
mod product;

pub use article::*;
pub use product::*;

use serde::{Deserialize, Serialize};

/// Structured outcome of a validation check.
///
/// `errors` is absent when valid, matching the wire shape callers expect;
/// a failed check carries every violated rule's message in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ValidationResult {
    /// A passing result with no error list.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: None,
        }
    }

    /// A failing result carrying the given messages.
    pub fn invalid(errors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            is_valid: false,
            errors: Some(errors.into_iter().map(Into::into).collect()),
        }
    }

    /// Build a result from collected messages: valid iff the list is empty.
    pub fn from_errors(errors: Vec<String>) -> Self {
        if errors.is_empty() {
            Self::valid()
        } else {
            Self {
                is_valid: false,
                errors: Some(errors),
            }
        }
    }

    /// The error messages, empty when valid.
    pub fn messages(&self) -> &[String] {
        self.errors.as_deref().unwrap_or(&[])
    }

    /// Number of error messages.
    pub fn error_count(&self) -> usize {
        self.messages().len()
    }

    /// Check whether a specific message is present.
    pub fn has_error(&self, message: &str) -> bool {
        self.messages().iter().any(|m| m == message)
    }
}

/// A correctness check over one entity.
///
/// Validators are pure functions of their input: no I/O, no store access, no
/// mutation. Malformed input yields a failing result, never a panic.
pub trait Validator<T> {
    fn validate(&self, content: &T) -> ValidationResult;
}

/// Adapter making a plain function usable as a [`Validator`].
///
/// Built with [`validator_fn`].
pub struct FnValidator<F> {
    f: F,
}

impl<T, F> Validator<T> for FnValidator<F>
where
    F: Fn(&T) -> ValidationResult,
{
    fn validate(&self, content: &T) -> ValidationResult {
        (self.f)(content)
    }
}

/// Wrap a plain function as a [`Validator`].
pub fn validator_fn<T, F>(f: F) -> FnValidator<F>
where
    F: Fn(&T) -> ValidationResult,
{
    FnValidator { f }
}

/// An ordered chain of validators merged into one.
///
/// Every member runs on every call - there is no short-circuit - so a single
/// `validate` surfaces the complete error set, concatenated in insertion
/// order. Members are not deduplicated: adding the same validator twice runs
/// it twice.
pub struct CompositeValidator<T> {
    validators: Vec<Box<dyn Validator<T>>>,
}

impl<T> Default for CompositeValidator<T> {
    fn default() -> Self {
        Self {
            validators: Vec::new(),
        }
    }
}

impl<T> CompositeValidator<T> {
    /// Create an empty composite; with no members it accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validator to the chain.
    pub fn add_validator(&mut self, validator: impl Validator<T> + 'static) {
        self.validators.push(Box::new(validator));
    }

    /// Builder form of [`CompositeValidator::add_validator`].
    pub fn with_validator(mut self, validator: impl Validator<T> + 'static) -> Self {
        self.add_validator(validator);
        self
    }

    /// Number of validators in the chain.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Check whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl<T> Validator<T> for CompositeValidator<T> {
    fn validate(&self, content: &T) -> ValidationResult {
        let mut errors = Vec::new();

        for validator in &self.validators {
            let result = validator.validate(content);
            if let Some(messages) = result.errors {
                errors.extend(messages);
            }
        }

        ValidationResult::from_errors(errors)
    }
}
