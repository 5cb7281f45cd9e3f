#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pointcheck::domain_log::DynDomainLog;
use pointcheck::error::Error;
use pointcheck::{Config, FileDomainLog, Resolver, Verifier};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::RwLock;
use tower::ServiceExt;
use trust_dns_resolver::error::ResolveError;

/// Answers A lookups from a fixed table; every other name fails like an NXDOMAIN.
#[derive(Default)]
pub struct FakeResolver {
    answers: HashMap<String, Vec<Ipv4Addr>>,
}

impl FakeResolver {
    pub fn with_answer(mut self, domain: &str, addrs: &[&str]) -> Self {
        let addrs = addrs.iter().map(|a| a.parse().unwrap()).collect();
        self.answers.insert(domain.to_string(), addrs);
        self
    }
}

#[async_trait::async_trait]
impl Resolver for FakeResolver {
    async fn resolve4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, Error> {
        self.answers
            .get(domain)
            .cloned()
            .ok_or_else(|| ResolveError::from("no record found").into())
    }
}

/// Never answers, like a nameserver that drops every query.
pub struct StalledResolver;

#[async_trait::async_trait]
impl Resolver for StalledResolver {
    async fn resolve4(&self, _domain: &str) -> Result<Vec<Ipv4Addr>, Error> {
        std::future::pending().await
    }
}

pub struct TestApp {
    pub router: Router,
    pub domain_log: FileDomainLog,
    pub log_path: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new(config: &str, resolver: impl Resolver + Send + Sync + 'static) -> Self {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("fulldomains.json");
        let mut config: Config = serde_json::from_str(config).unwrap();
        config.domain_log_path = log_path.to_string_lossy().into_owned();
        let config = Arc::new(config);

        let domain_log = FileDomainLog::try_from_file(&log_path).await.unwrap();
        let dyn_log: DynDomainLog = Arc::new(RwLock::new(domain_log.clone()));
        let verifier = Verifier::new(config.clone(), dyn_log, Arc::new(resolver));
        let router = pointcheck::api::router(config, verifier);

        Self {
            router,
            domain_log,
            log_path,
            _dir: dir,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        (
            status,
            content_type,
            String::from_utf8(body.to_vec()).unwrap(),
        )
    }

    pub fn log_contents(&self) -> String {
        std::fs::read_to_string(&self.log_path).unwrap()
    }

    pub fn logged(&self) -> Vec<String> {
        serde_json::from_str(&self.log_contents()).unwrap()
    }
}
