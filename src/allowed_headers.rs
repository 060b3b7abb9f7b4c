use crate::constants::header;
use crate::util::dedupe_ignore_case;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedHeaders {
    /// Emit a comma-separated list of header names in the configured order.
    List(Vec<String>),
    /// Emit the wildcard `*`. Browsers only honour it on requests without credentials.
    Any,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        Self::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::X_REQUESTED_WITH,
            header::ACCEPT,
            header::CACHE_CONTROL,
            header::PRAGMA,
            header::EXPIRES,
            header::DEVTOOLS_REQUEST_ID,
        ])
    }
}

impl AllowedHeaders {
    /// Construct an explicit list, dropping blanks and case-insensitive
    /// duplicates. A list made of a single `*` becomes [`Self::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let deduped = dedupe_ignore_case(values);
        if deduped.len() == 1 && deduped[0] == "*" {
            return Self::Any;
        }

        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Any => Some("*".to_string()),
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
        }
    }

    pub(crate) fn entries(&self) -> &[String] {
        match self {
            Self::Any => &[],
            Self::List(values) => values,
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
