//! File filtering functionality
//!
//! This module provides the predicates a [`Finder`](super::Finder) applies to
//! every file it discovers. Name predicates look at the base name only, except
//! the case-insensitive ones which look at the whole path.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use glob::Pattern;
use regex::Regex;

use super::fs::FileSystem;
use crate::errors::{FindError, FindResult};

/// Trait for file filters
pub trait FileFilter {
    /// Check if the file at `path` matches the filter.
    ///
    /// Filters that need file metadata read it through `fs`, and report
    /// `false` when it cannot be read.
    fn matches(&self, path: &Path, fs: &dyn FileSystem) -> bool;

    /// Get the filter description
    fn description(&self) -> String;
}

/// A single search predicate
pub enum Predicate {
    /// Base name starts with the prefix
    NameStartsWith(String),
    /// Base name ends with the suffix
    NameEndsWith(String),
    /// Base name contains the substring
    NameContains(String),
    /// Base name does not contain the substring
    NameDoesNotContain(String),
    /// Lowercased full path contains the (already lowercased) substring
    NameContainsCaseInsensitive(String),
    /// Lowercased full path does not contain the (already lowercased) substring
    NameDoesNotContainCaseInsensitive(String),
    /// Base name contains a match of the regex
    NameMatchesRegex(Regex),
    /// Base name matches the shell glob
    NameMatchesGlob(Pattern),
    /// File size is at least this many bytes
    SizeAtLeast(u64),
    /// File size is at most this many bytes
    SizeAtMost(u64),
    /// Caller-supplied filter
    Custom(Box<dyn FileFilter>),
}

impl Predicate {
    /// Create a case-insensitive substring predicate over the full path
    pub fn contains_ignore_case(needle: &str) -> Self {
        Predicate::NameContainsCaseInsensitive(needle.to_lowercase())
    }

    /// Create the negation of [`Predicate::contains_ignore_case`]
    pub fn does_not_contain_ignore_case(needle: &str) -> Self {
        Predicate::NameDoesNotContainCaseInsensitive(needle.to_lowercase())
    }

    /// Compile a regex predicate
    pub fn regex(pattern: &str) -> FindResult<Self> {
        let regex = Regex::new(pattern).map_err(|source| FindError::RegexError {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Predicate::NameMatchesRegex(regex))
    }

    /// Compile a glob predicate
    pub fn glob(pattern: &str) -> FindResult<Self> {
        let pattern = Pattern::new(pattern).map_err(|source| FindError::PatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Predicate::NameMatchesGlob(pattern))
    }
}

impl FileFilter for Predicate {
    fn matches(&self, path: &Path, fs: &dyn FileSystem) -> bool {
        match self {
            Predicate::NameStartsWith(prefix) => base_name(path).starts_with(prefix.as_str()),
            Predicate::NameEndsWith(suffix) => base_name(path).ends_with(suffix.as_str()),
            Predicate::NameContains(needle) => base_name(path).contains(needle.as_str()),
            Predicate::NameDoesNotContain(needle) => !base_name(path).contains(needle.as_str()),
            Predicate::NameContainsCaseInsensitive(needle) => {
                lowered_path(path).contains(needle.as_str())
            }
            Predicate::NameDoesNotContainCaseInsensitive(needle) => {
                !lowered_path(path).contains(needle.as_str())
            }
            Predicate::NameMatchesRegex(regex) => regex.is_match(&base_name(path)),
            Predicate::NameMatchesGlob(pattern) => pattern.matches(&base_name(path)),
            Predicate::SizeAtLeast(min) => {
                fs.size_of(path).map(|size| size >= *min).unwrap_or(false)
            }
            Predicate::SizeAtMost(max) => {
                fs.size_of(path).map(|size| size <= *max).unwrap_or(false)
            }
            Predicate::Custom(filter) => filter.matches(path, fs),
        }
    }

    fn description(&self) -> String {
        match self {
            Predicate::NameStartsWith(prefix) => format!("name starts with '{}'", prefix),
            Predicate::NameEndsWith(suffix) => format!("name ends with '{}'", suffix),
            Predicate::NameContains(needle) => format!("name contains '{}'", needle),
            Predicate::NameDoesNotContain(needle) => format!("name does not contain '{}'", needle),
            Predicate::NameContainsCaseInsensitive(needle) => {
                format!("path contains '{}' (ignore case)", needle)
            }
            Predicate::NameDoesNotContainCaseInsensitive(needle) => {
                format!("path does not contain '{}' (ignore case)", needle)
            }
            Predicate::NameMatchesRegex(regex) => {
                format!("name matches regex '{}'", regex.as_str())
            }
            Predicate::NameMatchesGlob(pattern) => format!("name matches '{}'", pattern.as_str()),
            Predicate::SizeAtLeast(min) => format!("size >= {} bytes", min),
            Predicate::SizeAtMost(max) => format!("size <= {} bytes", max),
            Predicate::Custom(filter) => filter.description(),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.description()).finish()
    }
}

/// Adapts a closure over the path into a [`FileFilter`]
pub struct FnFilter<F> {
    func: F,
    description: String,
}

impl<F> FnFilter<F>
where
    F: Fn(&Path) -> bool,
{
    /// Create a new FnFilter with a description used in logs
    pub fn new(description: impl Into<String>, func: F) -> Self {
        Self {
            func,
            description: description.into(),
        }
    }
}

impl<F> FileFilter for FnFilter<F>
where
    F: Fn(&Path) -> bool,
{
    fn matches(&self, path: &Path, _fs: &dyn FileSystem) -> bool {
        (self.func)(path)
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

/// Check a path against every predicate in order, stopping at the first miss
pub fn matches_all(predicates: &[Predicate], path: &Path, fs: &dyn FileSystem) -> bool {
    predicates.iter().all(|predicate| predicate.matches(path, fs))
}

fn base_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default()
}

fn lowered_path(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}
