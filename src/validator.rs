//! Per-domain validation of populated section stores.
//!
//! Validation short-circuits on the first violated rule and never mutates
//! the filesystem; it only reads existence and file-type metadata for the
//! paths the configuration references.

use std::path::Path;

use crate::constants::{CPP_STANDARDS, C_STANDARDS};
use crate::error::{Error, Result};
use crate::store::{ConfigSet, Domain, SectionStore};

/// Validates all four domain stores, returning the first violated rule.
pub fn validate(configs: &ConfigSet) -> Result<()> {
    validate_core(configs.store(Domain::Core))?;
    validate_language(configs.store(Domain::LangC), "C", &C_STANDARDS)?;
    validate_language(configs.store(Domain::LangCpp), "C++", &CPP_STANDARDS)?;
    validate_python(configs.store(Domain::LangPython))?;
    Ok(())
}

fn validate_core(store: &SectionStore) -> Result<()> {
    if store.is_empty() {
        return Err(Error::ValidationError(
            "`Core` must have a `name` key value pair".to_string(),
        ));
    }

    if store.get("name").is_none() {
        return Err(Error::ValidationError("no `name` specified".to_string()));
    }

    if let Some(value) = store.get("gitrepo") {
        if !is_bool_literal(value) {
            return Err(Error::ValidationError(format!(
                "`gitrepo` expects a boolean value, `{}` provided",
                value
            )));
        }
    }

    if let Some(license) = store.get("license") {
        let path = Path::new(license);
        if !path.exists() {
            return Err(Error::ValidationError(format!(
                "license file `{}` does not exist",
                license
            )));
        }
        if !path.is_file() {
            return Err(Error::ValidationError(format!(
                "license path `{}` is not a regular file",
                license
            )));
        }
    }

    Ok(())
}

fn validate_language(store: &SectionStore, language: &str, standards: &[&str]) -> Result<()> {
    if store.is_empty() {
        return Ok(());
    }

    for key in ["src", "bin"] {
        if let Some(value) = store.get(key) {
            check_path(value)?;
        }
    }

    if let Some(build) = store.get("build") {
        let path = Path::new(build);
        if !path.exists() {
            return Err(Error::ValidationError(format!(
                "build file `{}` does not exist",
                build
            )));
        }
        if !path.is_file() {
            return Err(Error::ValidationError(format!(
                "build path `{}` is not a regular file",
                build
            )));
        }
    }

    if let Some(version) = store.get("version") {
        if !standards.contains(&version) {
            return Err(Error::ValidationError(format!(
                "`{}` is not a recognized {} standard",
                version, language
            )));
        }
    }

    Ok(())
}

fn validate_python(store: &SectionStore) -> Result<()> {
    if let Some(src) = store.get("src") {
        check_path(src)?;
    }
    Ok(())
}

fn is_bool_literal(value: &str) -> bool {
    value == "true" || value == "false"
}

// Text can never carry an embedded NUL, but the invariant is checked
// explicitly rather than assumed.
fn check_path(value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(Error::ValidationError(format!(
            "`{}` is not a valid path",
            value.escape_default()
        )));
    }
    Ok(())
}
