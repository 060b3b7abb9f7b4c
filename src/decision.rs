use crate::allow_list::AllowList;
use crate::environment::EnvironmentMode;
use crate::util::is_well_formed_origin;
use std::fmt;

/// Why an origin was allowed or denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionReason {
    /// Outside production every origin passes.
    Bypassed,
    /// The origin matched an allow-list entry.
    ExplicitMatch,
    /// The request carried no `Origin`, so it is not a browser cross-origin call.
    NoOriginHeader,
    /// The origin is malformed or matched nothing.
    NoMatch,
}

impl DecisionReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bypassed => "bypassed",
            Self::ExplicitMatch => "explicit_match",
            Self::NoOriginHeader => "no_origin_header",
            Self::NoMatch => "no_match",
        }
    }
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one request's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessDecision {
    pub allowed: bool,
    pub reason: DecisionReason,
}

impl AccessDecision {
    pub const BYPASSED: Self = Self::allow(DecisionReason::Bypassed);
    pub const EXPLICIT_MATCH: Self = Self::allow(DecisionReason::ExplicitMatch);
    pub const NO_ORIGIN_HEADER: Self = Self::allow(DecisionReason::NoOriginHeader);
    pub const NO_MATCH: Self = Self {
        allowed: false,
        reason: DecisionReason::NoMatch,
    };

    const fn allow(reason: DecisionReason) -> Self {
        Self {
            allowed: true,
            reason,
        }
    }
}

/// Decides whether `origin` may receive a cross-origin response.
///
/// The result depends only on the three inputs; repeated calls with the same
/// arguments always agree.
pub fn evaluate(
    origin: Option<&str>,
    mode: EnvironmentMode,
    allow_list: &AllowList,
) -> AccessDecision {
    if !mode.is_production() {
        return AccessDecision::BYPASSED;
    }

    let Some(origin) = origin else {
        return AccessDecision::NO_ORIGIN_HEADER;
    };

    if is_well_formed_origin(origin) && allow_list.matches(origin) {
        AccessDecision::EXPLICIT_MATCH
    } else {
        AccessDecision::NO_MATCH
    }
}

#[cfg(test)]
#[path = "decision_test.rs"]
mod decision_test;
