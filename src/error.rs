//! Error types.

use trust_dns_resolver::error::ResolveError;

/// Error enumerates the possible pointcheck error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a generic IO error occurs, e.g. the
    /// [domain log file][crate::domain_log::file::FileDomainLog] can't be read or replaced.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when processing JSON from disk (e.g. [trying to load a
    /// `Config`][crate::config::Config::try_from_file], or reading the
    /// [domain log][crate::domain_log::file::FileDomainLog]) fails due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),

    /// Returned when an A record lookup through a [`Resolver`][crate::resolver::Resolver] fails
    /// for any reason. NXDOMAIN, empty answers, timeouts and network errors are not told apart.
    #[error("DNS resolution failed")]
    Resolution(#[from] ResolveError),

    /// Returned when the [HTTP API][crate::api] server stops with an error.
    #[error("HTTP server error")]
    HttpServer(#[from] hyper::Error),
}
