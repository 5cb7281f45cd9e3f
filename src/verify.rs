//! Domain verification.
//!
//! A [`Verifier`] decides whether a domain's A records point at one of the configured
//! [`Config::ips`][crate::config::Config::ips]:
//!
//! 1. Missing, empty or [blocked][crate::config::Config::is_blocked] domains are
//!    [`Verification::Disallowed`]. Nothing else happens for them.
//! 2. Any other domain is recorded in the [domain log][crate::domain_log] before it is looked up.
//!    Failing to record it is reported but doesn't change the outcome.
//! 3. The domain is resolved once. A failed lookup is [`Verification::ResolutionFailed`],
//!    otherwise the result is [`Verification::Valid`] if any returned address is expected and
//!    [`Verification::Invalid`] if none is.

use crate::config::SharedConfig;
use crate::domain_log::DynDomainLog;
use crate::resolver::DynResolver;
use std::fmt;
use std::net::IpAddr;

/// The outcome of verifying one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Valid,
    Invalid,
    ResolutionFailed,
    Disallowed,
}

impl Verification {
    pub fn message(self) -> &'static str {
        match self {
            Verification::Valid => "DNS is pointing to the IP",
            Verification::Invalid => "DNS is not pointing to the IP",
            Verification::ResolutionFailed => "DNS resolution failed",
            Verification::Disallowed => "Disallowed",
        }
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Clone)]
pub struct Verifier {
    config: SharedConfig,
    domain_log: DynDomainLog,
    resolver: DynResolver,
}

impl Verifier {
    pub fn new(config: SharedConfig, domain_log: DynDomainLog, resolver: DynResolver) -> Self {
        Verifier {
            config,
            domain_log,
            resolver,
        }
    }

    pub async fn verify(&self, domain: Option<&str>) -> Verification {
        let domain = match domain {
            Some(domain) if !domain.is_empty() && !self.config.is_blocked(domain) => domain,
            _ => return Verification::Disallowed,
        };

        self.log_domain(domain).await;

        let addrs = match self.resolver.resolve4(domain).await {
            Ok(addrs) => addrs,
            Err(err) => {
                tracing::debug!("lookup of \"{domain}\" failed: {err}");
                return Verification::ResolutionFailed;
            }
        };

        let verification = if addrs.into_iter().any(|ip| self.config.expects(IpAddr::V4(ip))) {
            Verification::Valid
        } else {
            Verification::Invalid
        };
        tracing::info!("verified \"{domain}\": {verification}");
        verification
    }

    async fn log_domain(&self, domain: &str) {
        // The write lock is dropped before resolving so lookups don't queue behind each other.
        let res = self.domain_log.write().await.log_domain(domain).await;
        match res {
            Ok(true) => tracing::debug!("recorded new domain \"{domain}\""),
            Ok(false) => {}
            Err(err) => tracing::error!("error logging domain \"{domain}\": {err:?}"),
        }
    }
}
