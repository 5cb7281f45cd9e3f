//! pointcheck
//!
//! A small HTTP service that answers one question: do the A records of a domain point at one of
//! our IP addresses? Useful for checking domain ownership, or that a CDN or reverse proxy
//! cutover has propagated, before provisioning anything for the domain.
//!
//! The service is configured with a JSON file:
//!
//! ```json
//! {
//!   "port": 3001,
//!   "blockList": ["localhost"],
//!   "ips": ["93.184.216.34"]
//! }
//! ```
//!
//! See the [HTTP API][api] for the endpoint, [`config::Config`] for every setting, and
//! [`domain_log`] for the record kept of checked domains.
//!
#![warn(clippy::pedantic)]

pub mod api;
pub mod config;
pub mod domain_log;
pub mod error;
pub mod resolver;
pub mod verify;

use crate::domain_log::{file, memory};
pub use api::new as new_http;
pub use config::{Config, SharedConfig};
pub use file::FileDomainLog;
pub use memory::InMemoryDomainLog;
pub use resolver::{Resolver, SystemResolver};
pub use verify::{Verification, Verifier};
