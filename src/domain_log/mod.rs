//! Durable record of verified domain names.
//!
//! Every domain submitted in an accepted verification request is recorded exactly once, before
//! its DNS lookup is attempted. Only names are recorded, never addresses.
//!
//! Two implementations are provided, [`memory::InMemoryDomainLog`] and [`file::FileDomainLog`].
//! The former is not durable across restarts. The latter keeps a JSON array of domain names on
//! disk, rewriting it whenever a new domain is seen.

use crate::error::Error;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod file;
pub mod memory;

#[allow(clippy::module_name_repetitions)]
pub use file::FileDomainLog;
#[allow(clippy::module_name_repetitions)]
pub use memory::InMemoryDomainLog;

/// `DynDomainLog` is a type alias for a [`DomainLog`] shared by concurrent requests. Writers
/// coordinate through the [`RwLock`], so one request's read-modify-write can't clobber
/// another's.
#[allow(clippy::module_name_repetitions)]
pub type DynDomainLog = Arc<RwLock<dyn DomainLog + Send + Sync>>;

/// An async trait describing a deduplicated, append-only set of domain names.
#[async_trait::async_trait]
pub trait DomainLog {
    /// Record `domain` if it isn't already present. Returns `true` when the domain was newly
    /// recorded and `false` when it was already known, in which case nothing is written.
    async fn log_domain(&mut self, domain: &str) -> Result<bool, Error>;

    /// Every recorded domain, in the order first seen.
    async fn domains(&self) -> Result<Vec<String>, Error>;
}
