//! # golinks
//!
//! Core of a go-links service: short mnemonic names that expand to full
//! destination URLs by matching the remainder of the request path against an
//! ordered list of regex patterns and substituting captured groups into a URL
//! template.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The [`Link`](domain::entities::Link) /
//!   [`Match`](domain::entities::Match) expansion model and the
//!   [`LinkStore`](domain::repositories::LinkStore) trait every persistence
//!   backend implements
//! - **Application Layer** ([`application`]) -
//!   [`ResolverService`](application::services::ResolverService), the glue that
//!   turns a raw request path into a destination URL
//! - **Infrastructure Layer** ([`infrastructure`]) - Storage backends; the
//!   in-memory store is the reference implementation of the contract
//!
//! HTTP handling, authentication, and rate limiting are deliberately outside
//! this crate; a front end consumes the resolver and maps its results to
//! redirects.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use chrono::Utc;
//! use golinks::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let store = Arc::new(MemoryLinkStore::new());
//!
//! let link = Link::new(
//!     "issues",
//!     vec![Match::new("^(\\d+)$", "https://bugs.example.com/show?id=$1")?],
//!     Utc::now(),
//! )?;
//! store.put(link).await?;
//!
//! let resolver = ResolverService::new(store);
//! let resolved = resolver.resolve("/issues/1234").await?.unwrap();
//! assert_eq!(resolved.url, "https://bugs.example.com/show?id=1234");
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage
//!
//! Backends are selected by an opaque `kind:dsn` descriptor consumed by
//! [`config::StoreConfig`]; see the [`config`] module for details.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{StoreError, ValidationError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Resolution, ResolverService};
    pub use crate::config::{StoreConfig, StoreKind};
    pub use crate::domain::entities::{ExpandedUrl, Link, Match};
    pub use crate::domain::repositories::{LinkStore, ListOptions};
    pub use crate::error::{StoreError, ValidationError};
    pub use crate::infrastructure::persistence::MemoryLinkStore;
}
