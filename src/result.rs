use crate::decision::AccessDecision;
use crate::headers::Headers;

/// Status used when denied requests are refused outright.
pub const FORBIDDEN_STATUS: u16 = 403;

/// Headers and response metadata emitted for either a preflight or simple request.
#[derive(Debug, Clone)]
pub struct CorsResult {
    pub decision: AccessDecision,
    pub headers: Headers,
    /// Status to answer with when `end_response` is set.
    pub status: Option<u16>,
    /// The request must be answered here and never forwarded to a route handler.
    pub end_response: bool,
}

/// Overall outcome returned by [`crate::Cors::check`].
#[derive(Debug, Clone)]
pub enum CorsDecision {
    Preflight(CorsResult),
    Simple(CorsResult),
}

impl CorsDecision {
    pub fn result(&self) -> &CorsResult {
        match self {
            Self::Preflight(result) | Self::Simple(result) => result,
        }
    }

    pub fn into_result(self) -> CorsResult {
        match self {
            Self::Preflight(result) | Self::Simple(result) => result,
        }
    }

    pub fn access(&self) -> AccessDecision {
        self.result().decision
    }

    pub fn is_preflight(&self) -> bool {
        matches!(self, Self::Preflight(_))
    }
}
