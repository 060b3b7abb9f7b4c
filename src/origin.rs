use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use thiserror::Error;

pub(crate) const MAX_PATTERN_LENGTH: usize = 4_096;
pub(crate) const MAX_ORIGIN_LENGTH: usize = 4_096;

const WILDCARD: char = '*';
const ANY_RUN: &str = "(?s:.*)";
const WEB_SCHEMES: [&str; 4] = ["http", "https", "ws", "wss"];

/// Errors raised while compiling an allow-list entry.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("origin pattern is empty")]
    Empty,
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
    #[error("origin pattern contains invalid character {character:?} at byte {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
}

/// A single compiled allow-list entry.
///
/// Entries without `*` compare byte-for-byte. Entries with `*` are compiled once
/// into a matcher anchored at both ends, where every `*` stands for any run of
/// characters (including none) and everything else is literal.
#[derive(Clone)]
pub enum OriginPattern {
    Exact(String),
    Wildcard { source: String, regex: Regex },
}

impl OriginPattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }
        if let Some((position, character)) = pattern
            .char_indices()
            .find(|(_, ch)| !ch.is_ascii_graphic())
        {
            return Err(PatternError::InvalidCharacter {
                character,
                position,
            });
        }

        if !pattern.contains(WILDCARD) {
            return Ok(Self::Exact(pattern.to_owned()));
        }

        let regex = Regex::new(&Self::anchored_expression(pattern))
            .map_err(|err| PatternError::Build(Box::new(err)))?;

        Ok(Self::Wildcard {
            source: pattern.to_owned(),
            regex,
        })
    }

    fn anchored_expression(pattern: &str) -> String {
        let mut expression = String::with_capacity(pattern.len() * 2 + 4);
        expression.push_str(r"\A");
        for (index, segment) in pattern.split(WILDCARD).enumerate() {
            if index > 0 && !expression.ends_with(ANY_RUN) {
                expression.push_str(ANY_RUN);
            }
            expression.push_str(&regex_syntax::escape(segment));
        }
        expression.push_str(r"\z");
        expression
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact(value) => value,
            Self::Wildcard { source, .. } => source,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard { .. })
    }

    /// Returns `true` for entries that admit every origin of a web scheme, such
    /// as `*`, `https://*` or `*://*`.
    pub fn is_unconstrained(&self) -> bool {
        let Self::Wildcard { source, .. } = self else {
            return false;
        };
        let only_wildcards = |value: &str| value.chars().all(|ch| ch == WILDCARD);

        if only_wildcards(source) {
            return true;
        }

        match source.split_once("://") {
            Some((scheme, rest)) => {
                let open_scheme = only_wildcards(scheme)
                    || WEB_SCHEMES
                        .iter()
                        .any(|known| known.eq_ignore_ascii_case(scheme));
                open_scheme && only_wildcards(rest)
            }
            None => false,
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Exact(value) => value == candidate,
            Self::Wildcard { regex, .. } => regex.is_match(candidate),
        }
    }
}

impl fmt::Debug for OriginPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            Self::Wildcard { source, .. } => f.debug_tuple("Wildcard").field(source).finish(),
        }
    }
}

impl fmt::Display for OriginPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for OriginPattern {
    type Error = PatternError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for OriginPattern {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
