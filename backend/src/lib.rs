//! Employee API backend: a minimal employee CRUD service instrumented by
//! a declarative interception pipeline used for cross-cutting logging.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod intercept;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
pub use middleware::Trace;
