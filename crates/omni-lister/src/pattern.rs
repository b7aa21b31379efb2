//! Glob matching against bare file names.
//!
//! [`NamePattern`] compiles a shell-style glob once and tests file names
//! (never full paths) against it.
//!
//! # Syntax
//!
//! - `?` matches any single character
//! - `*` matches any sequence of characters, including none
//! - `[abc]`, `[a-z]` match one character from the set
//! - `[!abc]` matches one character not in the set
//! - `{log,txt}` matches any of the comma-separated alternatives
//!
//! A backslash is an ordinary character, not an escape: `a\b` matches only
//! the name `a\b`. Use a class such as `[*]` to match a metacharacter.
//!
//! Matching is case-sensitive. A leading `.` is not special: `*` matches
//! hidden names too, which are excluded separately by the lister.
//!
//! # Examples
//!
//! ```
//! use omni_lister::NamePattern;
//!
//! let pattern = NamePattern::new("*.log")?;
//! assert!(pattern.is_match("app.log"));
//! assert!(!pattern.is_match("app.log.1"));
//! # Ok::<(), omni_lister::ListError>(())
//! ```

use globset::{GlobBuilder, GlobMatcher};

use crate::error::ListError;

/// A compiled glob pattern for file names.
#[derive(Debug, Clone)]
pub struct NamePattern {
    /// The pattern as supplied.
    source: String,
    /// Compiled matcher.
    matcher: GlobMatcher,
}

impl NamePattern {
    /// Compiles a glob pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidPattern`] if the pattern contains a path
    /// separator (it could never match a bare name) or is not a valid glob.
    pub fn new(pattern: &str) -> Result<Self, ListError> {
        if pattern.contains('/') {
            return Err(ListError::invalid_pattern(
                pattern,
                "patterns match file names only and must not contain '/'",
            ));
        }

        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .backslash_escape(false)
            .build()
            .map_err(|e| ListError::invalid_pattern(pattern, e.kind().to_string()))?;

        Ok(Self {
            source: pattern.to_owned(),
            matcher: glob.compile_matcher(),
        })
    }

    /// Returns `true` if `name` matches the pattern.
    #[inline]
    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }

    /// Returns the pattern as supplied.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}
