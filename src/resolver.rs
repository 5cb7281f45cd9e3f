//! IPv4 address resolution.
//!
//! The [verifier][crate::verify::Verifier] only needs one capability from DNS: the A records of
//! a name. [`SystemResolver`] provides it using the host's resolver configuration. Other
//! [`Resolver`] implementations can be swapped in, e.g. in tests.

use crate::error::Error;
use std::net::Ipv4Addr;
use std::sync::Arc;
use trust_dns_resolver::TokioAsyncResolver;

/// `DynResolver` is a type alias for a [`Resolver`] shared between concurrent requests.
pub type DynResolver = Arc<dyn Resolver + Send + Sync>;

#[async_trait::async_trait]
pub trait Resolver {
    /// Resolve the IPv4 addresses of `domain`.
    ///
    /// Every failure, whether the name doesn't exist, has no A records, or the lookup timed out
    /// or couldn't reach a nameserver, is returned as [`Error::Resolution`].
    async fn resolve4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, Error>;
}

/// A [`Resolver`] backed by a [`TokioAsyncResolver`] using the system configuration
/// (`/etc/resolv.conf` on Unix). Timeouts and attempts are the library defaults.
#[derive(Clone)]
pub struct SystemResolver {
    resolver: TokioAsyncResolver,
}

impl SystemResolver {
    /// # Errors
    ///
    /// Returns [`Error::Resolution`] if the system resolver configuration can't be read.
    pub fn from_system_conf() -> Result<Self, Error> {
        Ok(Self {
            resolver: TokioAsyncResolver::tokio_from_system_conf()?,
        })
    }
}

#[async_trait::async_trait]
impl Resolver for SystemResolver {
    async fn resolve4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, Error> {
        let lookup = self.resolver.ipv4_lookup(domain).await?;
        Ok(lookup.iter().copied().collect())
    }
}
