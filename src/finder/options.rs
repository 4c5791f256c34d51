//! Options for file finding
//!
//! This module provides options for configuring the file finding process.

use crate::cli::Cli;

/// Options for configuring the file finding process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindOptions {
    /// Maximum number of directory descents below the root's listing
    /// (None for unlimited)
    pub max_depth: Option<usize>,

    /// Whether to descend into symbolic links to directories (on by default)
    pub follow_links: bool,

    /// Whether to report each match to the observer as soon as it is found
    pub emit_on_match: bool,
}

impl FindOptions {
    /// Create a new FindOptions with default values
    pub fn new() -> Self {
        Self {
            max_depth: None,
            follow_links: true,
            emit_on_match: false,
        }
    }

    /// Set the maximum depth to search
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Set whether matches are emitted while searching
    pub fn with_emit_on_match(mut self, emit_on_match: bool) -> Self {
        self.emit_on_match = emit_on_match;
        self
    }

    /// Create FindOptions from CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new()
            .with_max_depth(cli.max_depth)
            .with_follow_links(!cli.no_follow_links)
            .with_emit_on_match(!cli.quiet)
    }

    /// Whether a layer at `depth` may be visited
    pub(crate) fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }

    /// Whether directories found in a layer at `depth` may be expanded
    pub(crate) fn allows_expansion(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_options_defaults() {
        let options = FindOptions::new();
        assert_eq!(options.max_depth, None);
        assert!(options.follow_links);
        assert!(!options.emit_on_match);
        assert_eq!(options, FindOptions::default());
    }

    #[test]
    fn test_find_options_with_max_depth() {
        let options = FindOptions::new().with_max_depth(Some(3));
        assert_eq!(options.max_depth, Some(3));
    }

    #[test]
    fn test_find_options_with_flags() {
        let options = FindOptions::new()
            .with_follow_links(false)
            .with_emit_on_match(true);
        assert!(!options.follow_links);
        assert!(options.emit_on_match);
    }

    #[test]
    fn test_depth_bounds() {
        let unbounded = FindOptions::new();
        assert!(unbounded.allows_depth(usize::MAX));
        assert!(unbounded.allows_expansion(usize::MAX));

        let bounded = FindOptions::new().with_max_depth(Some(1));
        assert!(bounded.allows_depth(0));
        assert!(bounded.allows_depth(1));
        assert!(!bounded.allows_depth(2));
        assert!(bounded.allows_expansion(0));
        assert!(!bounded.allows_expansion(1));

        let root_only = FindOptions::new().with_max_depth(Some(0));
        assert!(root_only.allows_depth(0));
        assert!(!root_only.allows_expansion(0));
    }
}
