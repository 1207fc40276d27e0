//! Variables taken from file names.
//!
//! A `--pattern` regex names its capture groups after expression variables:
//! `(?P<N>\d+)-(?P<M>\d+)\.log` makes `N` and `M` known, and matching it
//! against `100-7.log` binds `N = 100`, `M = 7`.

use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;

use crate::error::CliError;

/// Names of the regex's named capture groups.
pub fn named_vars(pattern: &Regex) -> BTreeSet<String> {
    pattern
        .capture_names()
        .flatten()
        .map(str::to_string)
        .collect()
}

/// Binds each named group of `pattern` to its numeric match in `file`.
///
/// Groups that do not take part in the match are left unbound.
pub fn bindings_for(pattern: &Regex, file: &str) -> Result<BTreeMap<String, f64>, CliError> {
    let captures = pattern.captures(file).ok_or_else(|| CliError::NoMatch {
        file: file.to_string(),
        pattern: pattern.as_str().to_string(),
    })?;

    let mut bindings = BTreeMap::new();
    for name in pattern.capture_names().flatten() {
        let Some(m) = captures.name(name) else {
            continue;
        };
        let value = m
            .as_str()
            .parse::<f64>()
            .map_err(|_| CliError::NotANumber {
                file: file.to_string(),
                name: name.to_string(),
                text: m.as_str().to_string(),
            })?;
        bindings.insert(name.to_string(), value);
    }
    Ok(bindings)
}
