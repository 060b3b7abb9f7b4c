use crate::constants::header;
use crate::context::RequestKind;
use crate::decision::{AccessDecision, DecisionReason};
use crate::headers::{HeaderCollection, Headers};
use crate::options::CorsOptions;
use crate::util::is_well_formed_origin;

/// Synthesizes the CORS response headers for one evaluated request.
///
/// Denied requests only carry `Vary: Origin`; the browser then refuses to hand
/// the response to the calling page.
pub fn build_headers(
    decision: &AccessDecision,
    origin: Option<&str>,
    options: &CorsOptions,
    kind: RequestKind,
) -> Headers {
    let builder = HeaderBuilder::new(options);
    let mut headers = builder.build_origin_headers(decision, origin);
    if !decision.allowed {
        return headers.into_headers();
    }

    builder.build_credentials_header(&mut headers);
    match kind {
        RequestKind::Preflight => {
            builder.build_methods_header(&mut headers);
            builder.build_allowed_headers(&mut headers);
            builder.build_max_age_header(&mut headers);
        }
        RequestKind::Simple => builder.build_exposed_headers(&mut headers),
    }

    headers.into_headers()
}

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build_origin_headers(
        &self,
        decision: &AccessDecision,
        origin: Option<&str>,
    ) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if !decision.allowed {
            headers.add_vary(header::ORIGIN);
            return headers;
        }

        let wildcard = !self.options.credentials && decision.reason == DecisionReason::Bypassed;
        if wildcard {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
            return headers;
        }

        headers.add_vary(header::ORIGIN);
        if let Some(origin) = origin.filter(|value| is_well_formed_origin(value)) {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
        headers
    }

    pub(crate) fn build_credentials_header(&self, headers: &mut HeaderCollection) {
        if self.options.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
    }

    pub(crate) fn build_methods_header(&self, headers: &mut HeaderCollection) {
        headers.push_optional(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.options.methods.header_value(),
        );
    }

    pub(crate) fn build_allowed_headers(&self, headers: &mut HeaderCollection) {
        headers.push_optional(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.options.allowed_headers.header_value(),
        );
    }

    pub(crate) fn build_exposed_headers(&self, headers: &mut HeaderCollection) {
        headers.push_optional(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            self.options.exposed_headers.header_value(),
        );
    }

    pub(crate) fn build_max_age_header(&self, headers: &mut HeaderCollection) {
        headers.push_optional(
            header::ACCESS_CONTROL_MAX_AGE,
            self.options.max_age.map(|seconds| seconds.to_string()),
        );
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
