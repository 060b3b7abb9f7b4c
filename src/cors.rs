use crate::allow_list::{AllowList, SharedAllowList};
use crate::context::{RequestContext, RequestKind};
use crate::decision::{AccessDecision, DecisionReason, evaluate};
use crate::environment::EnvironmentMode;
use crate::header_builder::build_headers;
use crate::options::{CorsOptions, ValidationError};
use crate::result::{CorsDecision, CorsResult, FORBIDDEN_STATUS};
use std::sync::Arc;
use tracing::{debug, warn};

/// Origin access controller shared by every request of the gateway.
///
/// Everything except the allow-list is fixed at construction. The allow-list
/// may be replaced wholesale with [`Cors::reload_allow_list`].
#[derive(Debug)]
pub struct Cors {
    options: CorsOptions,
    origins: SharedAllowList,
}

impl Cors {
    pub fn new(mut options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        let origins = SharedAllowList::new(std::mem::take(&mut options.origins));

        debug!(
            mode = %options.mode,
            patterns = origins.load().len(),
            credentials = options.credentials,
            "origin access control configured"
        );

        Ok(Self { options, origins })
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let kind = request.kind();
        let origin = request.declared_origin();
        let decision = self.evaluate_origin(origin);
        let headers = build_headers(&decision, origin, &self.options, kind);
        let refuse = !decision.allowed && self.options.reject_disallowed;

        match kind {
            RequestKind::Preflight => CorsDecision::Preflight(CorsResult {
                decision,
                headers,
                status: Some(if refuse {
                    FORBIDDEN_STATUS
                } else {
                    self.options.options_success_status
                }),
                end_response: true,
            }),
            RequestKind::Simple => CorsDecision::Simple(CorsResult {
                decision,
                headers,
                status: refuse.then_some(FORBIDDEN_STATUS),
                end_response: refuse,
            }),
        }
    }

    /// Runs the bare allow/deny decision for `origin` against the current list.
    pub fn evaluate_origin(&self, origin: Option<&str>) -> AccessDecision {
        let allow_list = self.origins.load();
        let decision = evaluate(origin, self.options.mode, &allow_list);

        match decision.reason {
            DecisionReason::NoMatch => {
                warn!(origin = origin.unwrap_or_default(), "origin not allowed")
            }
            reason => debug!(origin = origin.unwrap_or_default(), %reason, "origin allowed"),
        }

        decision
    }

    /// Atomically installs a new allow-list; requests already being evaluated
    /// finish against the list they started with.
    pub fn reload_allow_list(&self, allow_list: AllowList) {
        let previous = self.origins.replace(allow_list);
        debug!(
            previous = previous.len(),
            current = self.origins.load().len(),
            "allow-list replaced"
        );
    }

    pub fn allow_list(&self) -> Arc<AllowList> {
        self.origins.load()
    }

    pub fn mode(&self) -> EnvironmentMode {
        self.options.mode
    }

    pub fn credentials(&self) -> bool {
        self.options.credentials
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
