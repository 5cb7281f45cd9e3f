use crate::domain_log::DomainLog;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An ordered set of domain names. Serializes as a plain JSON array of strings; duplicates in a
/// deserialized array collapse onto their first occurrence.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct InMemoryDomainLog {
    domains: Vec<String>,
    seen: HashSet<String>,
}

impl InMemoryDomainLog {
    pub fn insert(&mut self, domain: &str) -> bool {
        if self.seen.contains(domain) {
            return false;
        }
        self.seen.insert(domain.to_string());
        self.domains.push(domain.to_string());
        true
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.seen.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for InMemoryDomainLog {
    fn from(domains: Vec<String>) -> Self {
        let mut log = Self::default();
        for domain in &domains {
            log.insert(domain);
        }
        log
    }
}

impl From<InMemoryDomainLog> for Vec<String> {
    fn from(log: InMemoryDomainLog) -> Self {
        log.domains
    }
}

#[async_trait::async_trait]
impl DomainLog for InMemoryDomainLog {
    async fn log_domain(&mut self, domain: &str) -> Result<bool, Error> {
        Ok(self.insert(domain))
    }

    async fn domains(&self) -> Result<Vec<String>, Error> {
        Ok(self.domains.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_domain_deduplicates() {
        let mut log = InMemoryDomainLog::default();
        assert!(log.log_domain("example.com").await.unwrap());
        assert!(!log.log_domain("example.com").await.unwrap());
        assert!(log.log_domain("example.org").await.unwrap());
        assert_eq!(log.len(), 2);
        assert_eq!(
            log.domains().await.unwrap(),
            vec!["example.com".to_string(), "example.org".to_string()]
        );
    }

    #[test]
    fn domains_are_opaque_strings() {
        let mut log = InMemoryDomainLog::default();
        assert!(log.insert("Example.com"));
        assert!(log.insert("example.com"));
        assert!(log.insert("example.com."));
        assert_eq!(log.len(), 3);
        assert!(log.contains("Example.com"));
    }

    #[test]
    fn serializes_as_array() {
        let mut log = InMemoryDomainLog::default();
        log.insert("b.example");
        log.insert("a.example");
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(json, r#"["b.example","a.example"]"#);
    }

    #[test]
    fn deserialize_drops_duplicates() {
        let log: InMemoryDomainLog =
            serde_json::from_str(r#"["a.example", "b.example", "a.example"]"#).unwrap();
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["a.example", "b.example"]);
    }

    #[test]
    fn deserialize_rejects_non_strings() {
        let res: Result<InMemoryDomainLog, _> = serde_json::from_str(r#"["a.example", 1]"#);
        assert!(res.is_err());
        let res: Result<InMemoryDomainLog, _> = serde_json::from_str(r#"{"a": 1}"#);
        assert!(res.is_err());
    }
}
