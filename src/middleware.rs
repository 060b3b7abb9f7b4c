//! Axum wiring for the gateway: the CORS middleware and the `/api` router it guards.

use crate::constants::header;
use crate::context::RequestContext;
use crate::cors::Cors;
use crate::headers::Headers;
use axum::Router;
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, Request, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::middleware::{Next, from_fn_with_state};
use axum::response::Response;
use std::sync::Arc;
use tracing::warn;

pub type SharedCors = Arc<Cors>;

/// Prefix every route module is mounted under.
pub const API_PREFIX: &str = "/api";

/// Largest request body accepted by the JSON extractors, in bytes.
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

/// Runs the origin check before routing.
///
/// Preflight requests, and denied requests when rejection is enabled, are
/// answered here and never reach a handler. Everything else is forwarded and
/// the synthesized headers are applied to the handler's response.
pub async fn cors_middleware(
    State(cors): State<SharedCors>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let result = cors.check(&owned_ctx.as_request_context()).into_result();

    if result.end_response {
        return finished_response(result.status, &result.headers);
    }

    let mut response = next.run(request).await;
    apply_headers(response.headers_mut(), &result.headers);
    response
}

/// Layers [`cors_middleware`] over every route and the fallback of `router`.
pub fn with_cors<S>(router: Router<S>, cors: SharedCors) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(from_fn_with_state(cors, cors_middleware))
}

/// Mounts the gateway's route modules under [`API_PREFIX`], bounds request
/// bodies and puts the CORS check in front of everything.
pub fn gateway_router<S>(routes: Router<S>, cors: SharedCors) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let router = Router::new()
        .nest(API_PREFIX, routes)
        .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT));
    with_cors(router, cors)
}

fn finished_response(status: Option<u16>, headers: &Headers) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::NO_CONTENT);
    apply_headers(response.headers_mut(), headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) else {
            warn!(header = %name, "skipping CORS header that is not a valid HTTP header");
            continue;
        };

        if name.eq_ignore_ascii_case(header::VARY) {
            map.append(header_name, header_value);
        } else {
            map.insert(header_name, header_value);
        }
    }
}

struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
        }
    }
}

/// Header values that are not visible ASCII are kept as raw text so the
/// controller can refuse them rather than treating them as absent.
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
