use crate::origin::{OriginPattern, PatternError};
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::warn;

/// Compiled set of origin patterns permitted to receive cross-origin responses.
///
/// Order carries no meaning: an origin is allowed when any entry matches it.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    patterns: Arc<[OriginPattern]>,
}

impl AllowList {
    /// A list that matches nothing; this is what a missing configuration means.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compiles every entry, stopping at the first one that is not a valid pattern.
    pub fn compile<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| OriginPattern::parse(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_patterns(patterns))
    }

    pub fn from_patterns(patterns: Vec<OriginPattern>) -> Self {
        for pattern in patterns.iter().filter(|pattern| pattern.is_unconstrained()) {
            warn!(
                pattern = pattern.as_str(),
                "allow-list entry admits every origin of its scheme; review with the system owner"
            );
        }

        Self {
            patterns: patterns.into(),
        }
    }

    pub fn matches(&self, origin: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(origin))
    }

    /// Returns the first entry that accepts `origin`.
    pub fn find_match(&self, origin: &str) -> Option<&OriginPattern> {
        self.patterns.iter().find(|pattern| pattern.matches(origin))
    }

    pub fn patterns(&self) -> &[OriginPattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl From<Vec<OriginPattern>> for AllowList {
    fn from(patterns: Vec<OriginPattern>) -> Self {
        Self::from_patterns(patterns)
    }
}

/// An [`AllowList`] that can be replaced wholesale while readers are active.
///
/// Replacement is a single pointer swap; a reader sees either the previous or
/// the new list in full, never a mix of both.
#[derive(Debug)]
pub struct SharedAllowList {
    current: ArcSwap<AllowList>,
}

impl SharedAllowList {
    pub fn new(list: AllowList) -> Self {
        Self {
            current: ArcSwap::from_pointee(list),
        }
    }

    pub fn load(&self) -> Arc<AllowList> {
        self.current.load_full()
    }

    /// Installs `list` and hands back the one it replaced.
    pub fn replace(&self, list: AllowList) -> Arc<AllowList> {
        self.current.swap(Arc::new(list))
    }
}

impl Default for SharedAllowList {
    fn default() -> Self {
        Self::new(AllowList::empty())
    }
}

#[cfg(test)]
#[path = "allow_list_test.rs"]
mod allow_list_test;
