//! HTTP API for DNS pointing verification.
//!
//! # API Endpoints
//!
//! ## `/?domain=<domain>` (GET)
//!
//!   Checks whether the A records of `domain` include one of the configured
//!   [`Config::ips`][crate::config::Config::ips]. Responds with a plain text body:
//!
//!   | Status | Body | When |
//!   |---|---|---|
//!   | 200 | `DNS is pointing to the IP` | an A record matches a configured IP |
//!   | 403 | `DNS is not pointing to the IP` | the domain resolves, but to other addresses |
//!   | 403 | `DNS resolution failed` | the lookup failed for any reason |
//!   | 400 | `Disallowed` | `domain` is missing, empty, blocked, or the query is malformed |
//!
//!   E.g. with `"ips": ["93.184.216.34"]` configured:
//!
//!   ```bash
//!   ❯ curl -i 'http://localhost:3001/?domain=example.com'
//!   HTTP/1.1 200 OK
//!   content-type: text/plain; charset=utf-8
//!
//!   DNS is pointing to the IP
//!   ```
//!
//!   The only other response is `408 Request Timeout` with an empty body, sent when a request
//!   takes longer than [`Config::api_timeout`][crate::config::Config::api_timeout], e.g. because
//!   the DNS lookup stalls. The domain has already been recorded by then.
//!
//!   Accepted domains are recorded in the [domain log][crate::domain_log], whatever the
//!   outcome of the lookup.

mod api_error;
mod model;
mod routes;
pub mod server;

pub use server::{new, router};
