//! Request path resolution service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkStore;
use crate::error::StoreError;

/// Resolves raw request paths to destination URLs.
///
/// Splits the first path segment off as the candidate link name, fetches the
/// link from the store, and asks it to expand the full path. An unknown name
/// and a known name whose rules all fail are the same outcome: `Ok(None)`.
/// Unmatched paths are expected traffic, not errors.
pub struct ResolverService<S: LinkStore + ?Sized> {
    store: Arc<S>,
}

/// A successful resolution: the destination URL plus which link and which of
/// its rules produced it.
///
/// Unlike [`ExpandedUrl`](crate::domain::entities::ExpandedUrl), this owns its
/// link, since the borrowed copy fetched from the store does not outlive the
/// call.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub url: String,
    pub match_index: usize,
    pub link: Link,
}

impl<S: LinkStore + ?Sized> ResolverService<S> {
    /// Creates a new resolver backed by the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolves a request path like `/issues/1234` to a destination URL.
    ///
    /// Leading `/` runs are stripped before the first segment is taken as the
    /// link name, so `/issues/1234` and `issues/1234` resolve identically.
    ///
    /// # Errors
    ///
    /// Propagates backend failures unchanged. [`StoreError::NotFound`] is
    /// folded into `Ok(None)`.
    pub async fn resolve(&self, path: &str) -> Result<Option<Resolution>, StoreError> {
        let path = path.trim_start_matches('/');

        let Some(name) = path.split('/').next().filter(|n| !n.is_empty()) else {
            return Ok(None);
        };

        let link = match self.store.get(name).await {
            Ok(link) => link,
            Err(StoreError::NotFound) => {
                debug!(name, "no link for request path");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let (url, match_index) = match link.expand(path) {
            Some(expanded) => (expanded.url, expanded.match_index),
            None => {
                debug!(name, path, "link matched no rule");
                return Ok(None);
            }
        };

        debug!(name, match_index, url = %url, "resolved request path");
        Ok(Some(Resolution {
            url,
            match_index,
            link,
        }))
    }
}
