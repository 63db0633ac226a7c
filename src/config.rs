//! Store selection configuration.
//!
//! A backend is described by an opaque `kind:dsn` string, e.g. `memory` or
//! `memory:unused-descriptor`. Everything after the first `:` is handed to the
//! backend's constructor uninterpreted. Loaded from the `GOLINKS_STORE`
//! environment variable by [`StoreConfig::from_env`]; the bootstrap layer that
//! reads flags or files is expected to funnel its value through
//! [`StoreConfig::open`] and hold on to the resulting store.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Result, bail};

use crate::domain::repositories::LinkStore;
use crate::infrastructure::persistence::MemoryLinkStore;

/// The kind of storage backend to construct.
///
/// Only the in-memory reference backend ships with this crate; an unknown
/// kind is a configuration error rather than a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
}

impl FromStr for StoreKind {
    type Err = anyhow::Error;

    fn from_str(v: &str) -> Result<Self> {
        match v {
            "memory" | "mem" => Ok(Self::Memory),
            other => bail!("unknown store kind {other:?}"),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// A parsed store descriptor: backend kind plus its connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub kind: StoreKind,
    pub dsn: String,
}

impl FromStr for StoreConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, dsn) = s.split_once(':').unwrap_or((s, ""));
        Ok(Self {
            kind: kind.parse()?,
            dsn: dsn.to_string(),
        })
    }
}

impl StoreConfig {
    /// Loads the store descriptor from `GOLINKS_STORE`.
    ///
    /// Defaults to the in-memory backend when the variable is unset.
    pub fn from_env() -> Result<Self> {
        env::var("GOLINKS_STORE")
            .unwrap_or_else(|_| "memory".to_string())
            .parse()
    }

    /// Constructs the configured backend.
    pub fn open(&self) -> Result<Arc<dyn LinkStore>> {
        tracing::info!(kind = %self.kind, "opening link store");
        match self.kind {
            StoreKind::Memory => Ok(Arc::new(MemoryLinkStore::from_dsn(&self.dsn)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_kind_aliases() {
        assert_eq!("memory".parse::<StoreKind>().unwrap(), StoreKind::Memory);
        assert_eq!("mem".parse::<StoreKind>().unwrap(), StoreKind::Memory);
        assert!("leveldb".parse::<StoreKind>().is_err());
    }

    #[test]
    fn test_parse_config_splits_dsn() {
        let config: StoreConfig = "memory:some/opaque/descriptor".parse().unwrap();
        assert_eq!(config.kind, StoreKind::Memory);
        assert_eq!(config.dsn, "some/opaque/descriptor");

        let config: StoreConfig = "memory".parse().unwrap();
        assert_eq!(config.dsn, "");
    }

    #[test]
    fn test_parse_config_unknown_kind() {
        let err = "sqlite:links.db".parse::<StoreConfig>().unwrap_err();
        assert!(err.to_string().contains("unknown store kind"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_to_memory() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("GOLINKS_STORE");
        }

        let config = StoreConfig::from_env().unwrap();
        assert_eq!(config.kind, StoreKind::Memory);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variable() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("GOLINKS_STORE", "mem:dsn-value");
        }

        let config = StoreConfig::from_env().unwrap();
        assert_eq!(config.kind, StoreKind::Memory);
        assert_eq!(config.dsn, "dsn-value");

        // Cleanup
        unsafe {
            env::remove_var("GOLINKS_STORE");
        }
    }

    #[tokio::test]
    async fn test_open_memory_store() {
        use chrono::Utc;

        use crate::domain::entities::{Link, Match};

        let store = "memory".parse::<StoreConfig>().unwrap().open().unwrap();

        let link = Link::new(
            "a",
            vec![Match::new("^(.*)$", "https://a.com/$1").unwrap()],
            Utc::now(),
        )
        .unwrap();

        store.put(link.clone()).await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), link);
    }
}
