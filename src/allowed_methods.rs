use crate::constants::method;
use crate::util::dedupe_ignore_case;

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Emit the wildcard `*`. Browsers only honour it on requests without credentials.
    Any,
    /// Emit a comma-separated list of methods in the configured order.
    List(Vec<String>),
}

impl AllowedMethods {
    /// Construct an explicit list, dropping blanks and case-insensitive duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(dedupe_ignore_case(values))
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn header_value(&self) -> Option<String> {
        match self {
            AllowedMethods::Any => Some("*".to_string()),
            AllowedMethods::List(values) if values.is_empty() => None,
            AllowedMethods::List(values) => Some(values.join(",")),
        }
    }

    pub(crate) fn entries(&self) -> &[String] {
        match self {
            AllowedMethods::Any => &[],
            AllowedMethods::List(values) => values,
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::POST,
            method::PUT,
            method::DELETE,
            method::OPTIONS,
            method::PATCH,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
