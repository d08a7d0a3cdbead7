use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use farmwise_advisor::AdvisoryEngine;
use farmwise_catalog::ReferenceCatalog;

pub const BIND_ADDR_VAR: &str = "FARMWISE_BIND_ADDR";
pub const CATALOG_PATH_VAR: &str = "FARMWISE_CATALOG_PATH";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// JSON catalog replacing the built-in tables.
    pub catalog_path: Option<PathBuf>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = read(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("{BIND_ADDR_VAR} is not a socket address: {raw_addr:?}"))?;

        let catalog_path = read(CATALOG_PATH_VAR).map(PathBuf::from);

        Ok(Self {
            bind_addr,
            catalog_path,
        })
    }

    /// Engine over the configured catalog, or the standard one.
    pub fn load_engine(&self) -> anyhow::Result<AdvisoryEngine> {
        match &self.catalog_path {
            Some(path) => {
                let catalog = ReferenceCatalog::from_path(path).with_context(|| {
                    format!("{CATALOG_PATH_VAR} could not be loaded from {}", path.display())
                })?;
                Ok(AdvisoryEngine::new(Arc::new(catalog)))
            }
            None => Ok(AdvisoryEngine::standard()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.catalog_path, None);
    }

    #[test]
    fn reads_both_variables() {
        let cfg = ApiConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (CATALOG_PATH_VAR, "/etc/farmwise/catalog.json"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(
            cfg.catalog_path,
            Some(PathBuf::from("/etc/farmwise/catalog.json"))
        );
    }

    #[test]
    fn bad_bind_addr_names_the_variable() {
        let err = ApiConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "not-an-addr")])).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_VAR));
    }

    #[test]
    fn missing_catalog_file_names_the_variable() {
        let cfg = ApiConfig::from_lookup(lookup(&[(
            CATALOG_PATH_VAR,
            "/definitely/not/here/catalog.json",
        )]))
        .unwrap();
        let err = cfg.load_engine().unwrap_err();
        assert!(err.to_string().contains(CATALOG_PATH_VAR));
    }

    #[test]
    fn standard_engine_without_path() {
        let cfg = ApiConfig::from_lookup(lookup(&[])).unwrap();
        let engine = cfg.load_engine().unwrap();
        assert!(engine.catalog().commodity("tomato").is_ok());
    }
}
