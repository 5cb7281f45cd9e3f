use crate::domain_log::{DynDomainLog, FileDomainLog};
use crate::error::Error;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub type SharedConfig = Arc<Config>;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DOMAIN_LOG_PATH: &str = "fulldomains.json";

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: IpAddr,
    #[serde(default)]
    pub block_list: HashSet<String>,
    #[serde(default)]
    pub ips: Vec<IpAddr>,
    #[serde(default = "default_domain_log_path")]
    pub domain_log_path: String,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_api_timeout")]
    pub api_timeout: Duration,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_bind_addr() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_domain_log_path() -> String {
    DEFAULT_DOMAIN_LOG_PATH.to_string()
}

fn default_api_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: default_port(),
            bind_addr: default_bind_addr(),
            block_list: HashSet::default(),
            ips: Vec::default(),
            domain_log_path: default_domain_log_path(),
            api_timeout: default_api_timeout(),
        }
    }
}

impl Config {
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: Config = serde_json::from_reader(reader)?;
        Ok(conf)
    }

    /// Exact membership test against the block list. Domains are compared as given: no case
    /// folding and no trimming.
    pub fn is_blocked(&self, domain: &str) -> bool {
        self.block_list.contains(domain)
    }

    pub fn expects(&self, addr: IpAddr) -> bool {
        self.ips.contains(&addr)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Open the file-backed domain log at [`Config::domain_log_path`], creating it empty if it
    /// doesn't exist yet. An existing file that isn't a JSON array of strings is reported and
    /// served anyway; requests keep being verified while it can't be updated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the file doesn't exist and can't be created.
    pub async fn domain_log(&self) -> Result<DynDomainLog, Error> {
        let domain_log = FileDomainLog::open(&self.domain_log_path).await?;
        Ok(Arc::new(RwLock::new(domain_log)))
    }
}
