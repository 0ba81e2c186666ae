//! Validation rules gating construction of typed files from imported data.
//!
//! Each [`Kind`] owns one [`ValidatorSuite`] composed of one
//! [`KeywordValidator`] per required keyword. A suite collects every
//! failure instead of stopping at the first, so a single bad record
//! reports all of its missing keywords at once.

use crate::model::{has_keyword, Kind, Metadata};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required keyword: {keyword}")]
    MissingKeyword { keyword: String },
}

impl ValidationError {
    /// The keyword this failure is about.
    pub fn keyword(&self) -> &str {
        match self {
            ValidationError::MissingKeyword { keyword } => keyword,
        }
    }
}

/// A single validation rule over a metadata list.
pub trait Validator: Send + Sync {
    fn validate(&self, data: &[Metadata]) -> Result<(), ValidationError>;
}

/// Passes iff the metadata list contains at least one entry with the
/// target keyword. The check is case-insensitive, consistent with every
/// other comparison in the crate.
pub struct KeywordValidator {
    keyword: String,
}

impl KeywordValidator {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }
}

impl Validator for KeywordValidator {
    fn validate(&self, data: &[Metadata]) -> Result<(), ValidationError> {
        if has_keyword(data, &self.keyword) {
            Ok(())
        } else {
            Err(ValidationError::MissingKeyword {
                keyword: self.keyword.clone(),
            })
        }
    }
}

/// A set of validators run together.
#[derive(Default)]
pub struct ValidatorSuite {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorSuite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Run every validator, collecting all failures. An empty result
    /// means the data passed.
    pub fn validate(&self, data: &[Metadata]) -> Vec<ValidationError> {
        self.validators
            .iter()
            .filter_map(|v| v.validate(data).err())
            .collect()
    }

    /// The shared suite for a kind, one keyword validator per required
    /// keyword.
    pub fn for_kind(kind: Kind) -> &'static ValidatorSuite {
        static SUITES: Lazy<HashMap<Kind, ValidatorSuite>> = Lazy::new(|| {
            Kind::ALL
                .into_iter()
                .map(|kind| {
                    let mut suite = ValidatorSuite::new();
                    for keyword in kind.required_keywords() {
                        suite.add(Box::new(KeywordValidator::new(*keyword)));
                    }
                    (kind, suite)
                })
                .collect()
        });
        &SUITES[&kind]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md(kw: &str, v: &str) -> Metadata {
        Metadata::new(kw, v)
    }

    #[test]
    fn keyword_validator_passes_on_presence() {
        let validator = KeywordValidator::new("creator");
        assert!(validator.validate(&[md("creator", "x")]).is_ok());
        assert!(validator.validate(&[md("CREATOR", "x")]).is_ok());
    }

    #[test]
    fn keyword_validator_fails_on_absence() {
        let validator = KeywordValidator::new("creator");
        let err = validator.validate(&[md("editor", "x")]).unwrap_err();
        assert_eq!(err.keyword(), "creator");
    }

    #[test]
    fn suite_collects_every_failure() {
        let suite = ValidatorSuite::for_kind(Kind::Video);
        let errors = suite.validate(&[md("creator", "x")]);
        let mut missing: Vec<_> = errors.iter().map(|e| e.keyword()).collect();
        missing.sort_unstable();
        assert_eq!(missing, ["resolution", "runtime"]);
    }

    #[test]
    fn suite_passes_with_extra_metadata() {
        let suite = ValidatorSuite::for_kind(Kind::Audio);
        let data = vec![md("creator", "x"), md("runtime", "60"), md("genre", "jazz")];
        assert!(suite.validate(&data).is_empty());
    }

    #[test]
    fn suites_match_required_sets() {
        for kind in Kind::ALL {
            let complete: Vec<_> = kind
                .required_keywords()
                .iter()
                .map(|kw| md(kw, "v"))
                .collect();
            assert!(ValidatorSuite::for_kind(kind).validate(&complete).is_empty());
            assert_eq!(
                ValidatorSuite::for_kind(kind).validate(&[]).len(),
                kind.required_keywords().len()
            );
        }
    }
}
