//! HTTP inbound adapter exposing REST endpoints.

pub mod employees;
pub mod error;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::HttpState;
