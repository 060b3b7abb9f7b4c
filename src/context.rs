/// Whether a request is a CORS preflight or an actual request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Preflight,
    Simple,
}

/// The slice of an inbound request the controller looks at.
///
/// Only the method and `Origin` header matter. Adapters pass `None` for a
/// missing `Origin`; an empty value is treated the same as a missing one.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// Returns the declared origin, folding an empty header value into `None`.
    pub fn declared_origin(&self) -> Option<&'a str> {
        self.origin.filter(|value| !value.is_empty())
    }

    pub fn kind(&self) -> RequestKind {
        if self.method.eq_ignore_ascii_case(crate::constants::method::OPTIONS) {
            RequestKind::Preflight
        } else {
            RequestKind::Simple
        }
    }
}
