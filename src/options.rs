use crate::allow_list::AllowList;
use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::environment::EnvironmentMode;
use crate::exposed_headers::ExposedHeaders;
use crate::util::is_http_token;
use thiserror::Error;

/// Configuration for [`crate::Cors`], built once at process start.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origins: AllowList,
    pub mode: EnvironmentMode,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    /// Seconds a browser may reuse a preflight answer.
    pub max_age: Option<u64>,
    pub options_success_status: u16,
    /// Answer denied requests with `403 Forbidden` instead of only omitting headers.
    pub reject_disallowed: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origins: AllowList::empty(),
            mode: EnvironmentMode::default(),
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            credentials: true,
            max_age: None,
            options_success_status: 204,
            reject_disallowed: false,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("preflight success status {0} is outside the 2xx range")]
    InvalidSuccessStatus(u16),
    #[error("allowed method {0:?} is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("header name {0:?} is not a valid HTTP token")]
    InvalidHeaderName(String),
    #[error("allowed methods cannot be '*' when credentials are enabled")]
    AllowedMethodsCannotBeWildcardWithCredentials,
    #[error("allowed headers cannot be '*' when credentials are enabled")]
    AllowedHeadersCannotBeWildcardWithCredentials,
    #[error("exposed headers cannot be '*' when credentials are enabled")]
    ExposedHeadersCannotBeWildcardWithCredentials,
    #[error("allowed headers list cannot contain '*'; use AllowedHeaders::any() instead")]
    AllowedHeadersListCannotContainWildcard,
    #[error("exposed headers list cannot contain '*'; use ExposedHeaders::any() instead")]
    ExposedHeadersListCannotContainWildcard,
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(200..=299).contains(&self.options_success_status) {
            return Err(ValidationError::InvalidSuccessStatus(
                self.options_success_status,
            ));
        }

        if let Some(method) = self
            .methods
            .entries()
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidMethod(method.clone()));
        }

        if self.allowed_headers.entries().iter().any(|name| name == "*") {
            return Err(ValidationError::AllowedHeadersListCannotContainWildcard);
        }
        if self.exposed_headers.entries().iter().any(|name| name == "*") {
            return Err(ValidationError::ExposedHeadersListCannotContainWildcard);
        }

        if let Some(name) = self
            .allowed_headers
            .entries()
            .iter()
            .chain(self.exposed_headers.entries())
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidHeaderName(name.clone()));
        }

        if self.credentials {
            if matches!(self.methods, AllowedMethods::Any) {
                return Err(ValidationError::AllowedMethodsCannotBeWildcardWithCredentials);
            }
            if matches!(self.allowed_headers, AllowedHeaders::Any) {
                return Err(ValidationError::AllowedHeadersCannotBeWildcardWithCredentials);
            }
            if matches!(self.exposed_headers, ExposedHeaders::Any) {
                return Err(ValidationError::ExposedHeadersCannotBeWildcardWithCredentials);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
