//! Backend entry-point: wires logging, state, and the HTTP server.

use actix_web::{App, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use employee_api::server::{build_state, configure, ServerConfig};
use employee_api::Trace;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env()?;
    let state = build_state();
    info!(addr = %config.bind_addr(), "starting employee api");

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Trace)
            .configure(|service_config| configure(service_config, state))
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
