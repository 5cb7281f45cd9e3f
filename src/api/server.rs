use crate::api::routes;
use crate::config::SharedConfig;
use crate::error::Error;
use crate::verify::Verifier;
use axum::Router;
use std::future::Future;

#[derive(Clone)]
pub(super) struct AppState {
    pub config: SharedConfig,
    pub verifier: Verifier,
}

/// Build the API [`Router`] without binding a socket.
pub fn router(config: SharedConfig, verifier: Verifier) -> Router {
    routes::new(AppState { config, verifier })
}

/// Bind the API to [`Config::listen_addr`][crate::config::Config::listen_addr] and return the
/// server future. The server stops accepting connections once `shutdown` completes and resolves
/// after in-flight requests finish.
///
/// # Errors
///
/// Returns [`Error::HttpServer`] if the listen address can't be bound.
pub fn new<F>(
    config: SharedConfig,
    verifier: Verifier,
    shutdown: F,
) -> Result<impl Future<Output = hyper::Result<()>>, Error>
where
    F: Future<Output = ()>,
{
    let addr = config.listen_addr();
    Ok(axum::Server::try_bind(&addr)?
        .serve(router(config, verifier).into_make_service())
        .with_graceful_shutdown(shutdown))
}
