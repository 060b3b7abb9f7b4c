mod allow_list;
mod allowed_headers;
mod allowed_methods;
mod config;
pub mod constants;
mod context;
mod cors;
mod decision;
mod environment;
mod exposed_headers;
mod header_builder;
mod headers;
#[cfg(feature = "axum")]
pub mod middleware;
mod options;
mod origin;
mod result;
mod util;

pub use allow_list::{AllowList, SharedAllowList};
pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{ConfigError, CorsConfig, DEFAULT_ALLOWED_ORIGINS, DEFAULT_PORT};
pub use context::{RequestContext, RequestKind};
pub use cors::Cors;
pub use decision::{AccessDecision, DecisionReason, evaluate};
pub use environment::EnvironmentMode;
pub use exposed_headers::ExposedHeaders;
pub use header_builder::build_headers;
pub use headers::Headers;
pub use options::{CorsOptions, ValidationError};
pub use origin::{OriginPattern, PatternError};
pub use result::{CorsDecision, CorsResult, FORBIDDEN_STATUS};
