//! A JSON file-backed implementation of the [`DomainLog`][super::DomainLog] trait.
//!
//! The file holds a JSON array of unique domain names. It is read in full for every logged
//! domain and, when the domain is new, rewritten in full through an
//! [`InMemoryDomainLog`][super::memory::InMemoryDomainLog].
use crate::domain_log::memory::InMemoryDomainLog;
use crate::domain_log::DomainLog;
use crate::error::Error;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// A file-backed domain log. Each newly seen domain is persisted before
/// [`DomainLog::log_domain`] returns, so the log survives restarts.
///
/// The file is re-read on every call rather than cached, so edits made to it while the process
/// runs are kept.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct FileDomainLog {
    path: PathBuf,
}

impl FileDomainLog {
    pub fn new(p: impl AsRef<Path>) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    /// Open the domain log at the given path, creating it as an empty JSON array if it doesn't
    /// exist, and check that its current content is valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJSON`] if the file isn't a JSON array of strings.
    ///
    /// Returns [`Error::IO`] if the path can't be created, opened or read.
    pub async fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let domain_log = Self::new(p);
        domain_log.ensure_exists().await?;
        let domains = domain_log.load().await?;
        tracing::debug!(
            "loaded {} domains from {}",
            domains.len(),
            domain_log.path.display()
        );
        Ok(domain_log)
    }

    /// Open the domain log at the given path for serving, creating it as an empty JSON array if
    /// it doesn't exist. Content that can't be read or parsed is reported but not fatal: each
    /// [`DomainLog::log_domain`] call reports it again until the file is repaired.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the file doesn't exist and can't be created.
    pub async fn open(p: impl AsRef<Path>) -> Result<Self, Error> {
        let domain_log = Self::new(p);
        domain_log.ensure_exists().await?;
        match domain_log.load().await {
            Ok(domains) => tracing::debug!(
                "loaded {} domains from {}",
                domains.len(),
                domain_log.path.display()
            ),
            Err(err) => tracing::error!(
                "domain log {} is unusable: {err:?}",
                domain_log.path.display()
            ),
        }
        Ok(domain_log)
    }

    /// Create the backing file holding an empty array, unless it already exists. Safe to call
    /// any number of times; an existing file is never modified.
    ///
    /// The empty array is written to a sibling temporary file and then linked into place, so the
    /// log path never holds a partially written file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the file doesn't exist and can't be created.
    pub async fn ensure_exists(&self) -> Result<(), Error> {
        let tmp_path = self.tmp_path();
        Self::write_state(File::create(&tmp_path).await?, &InMemoryDomainLog::default()).await?;
        let linked = fs::hard_link(&tmp_path, &self.path).await;
        fs::remove_file(&tmp_path).await?;
        match linked {
            Ok(()) => {
                tracing::info!("created empty domain log {}", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(Error::IO(err)),
        }
    }

    /// Read the current state of the domain log from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJSON`] if the file isn't a JSON array of strings.
    ///
    /// Returns [`Error::IO`] if the file can't be opened or read.
    pub async fn load(&self) -> Result<InMemoryDomainLog, Error> {
        let mut f = File::open(&self.path).await?;
        let mut buf = vec![];
        f.read_to_end(&mut buf).await?;
        Ok(serde_json::from_slice(&buf)?)
    }

    /// Replace the file with the given state, pretty-printed. The data is written to a sibling
    /// temporary file first and then renamed over the log.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the temporary file can't be written or renamed.
    pub async fn save(&self, domains: &InMemoryDomainLog) -> Result<(), Error> {
        let tmp_path = self.tmp_path();
        Self::write_state(File::create(&tmp_path).await?, domains).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    async fn write_state(mut f: File, domains: &InMemoryDomainLog) -> Result<(), Error> {
        let data = serde_json::to_string_pretty(domains)?;
        f.write_all(data.as_bytes()).await?;
        f.flush().await?;
        f.sync_all().await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl DomainLog for FileDomainLog {
    async fn log_domain(&mut self, domain: &str) -> Result<bool, Error> {
        let mut domains = self.load().await?;
        if !domains.insert(domain) {
            return Ok(false);
        }
        self.save(&domains).await?;
        Ok(true)
    }

    async fn domains(&self) -> Result<Vec<String>, Error> {
        Ok(self.load().await?.into())
    }
}
