//! Validation engine.
//!
//! Pure checks run by the service on every add and update. Each validator
//! evaluates its rules in a fixed order and stops at the first failure, so
//! a given record always yields the same error.

mod address;
mod contact;
mod phone;
pub mod rules;

pub use rules::{
    full_match, ValidationRules, CONTACT_NAME_PATTERN, CPF_PATTERN, DDD_PATTERN, DDI_PATTERN,
    FIX_NUMBER_PATTERN, MOBILE_NUMBER_PATTERN, ZIP_CODE_PATTERN,
};

use crate::error::{ContactError, ServiceResult};
use regex::Regex;

/// Return the value if present and not blank, else a Mandatory error.
fn require<'a>(value: Option<&'a str>, element: &str) -> ServiceResult<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ContactError::mandatory(element)),
    }
}

fn check_format(value: &str, rule: &Regex, element: &str) -> ServiceResult<()> {
    if rule.is_match(value) {
        Ok(())
    } else {
        Err(ContactError::invalid(element))
    }
}

/// Apply `rule` only when a value was supplied.
fn check_optional_format(value: Option<&str>, rule: &Regex, element: &str) -> ServiceResult<()> {
    match value {
        Some(v) => check_format(v, rule, element),
        None => Ok(()),
    }
}
