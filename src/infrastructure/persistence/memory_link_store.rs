//! In-memory reference implementation of the store contract.

use std::collections::BTreeMap;
use std::ops::Bound;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkStore, LinkStream, ListOptions};
use crate::error::StoreError;

/// Ordered, concurrency-safe in-memory store.
///
/// Backed by a `BTreeMap` keyed by link name, so [`LinkStore::list`] satisfies
/// its ascending-order contract without a separate sort step. A single
/// reader/writer lock guards the map: `put`/`delete` take exclusive access,
/// `get`/`list` shared access. `list` snapshots under the read lock and then
/// streams lock-free, so the produced sequence reflects the store as it
/// existed at one instant.
///
/// This is the reference behavior all other backends must satisfy. It never
/// fails with anything but [`StoreError::NotFound`], and it provides no
/// durability: dropping the store drops the links.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: RwLock<BTreeMap<String, Link>>,
}

impl MemoryLinkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from an opaque connection descriptor.
    ///
    /// The memory backend has nothing to connect to; the descriptor is
    /// accepted for uniformity with I/O-backed stores and ignored.
    pub fn from_dsn(_dsn: &str) -> Result<Self, StoreError> {
        Ok(Self::new())
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn put(&self, link: Link) -> Result<(), StoreError> {
        debug!(name = link.name(), "put link");
        self.links
            .write()
            .await
            .insert(link.name().to_string(), link);
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Link, StoreError> {
        self.links
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, name: &str) -> Result<(), StoreError> {
        debug!(name, "delete link");
        self.links
            .write()
            .await
            .remove(name)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self, opts: ListOptions) -> LinkStream {
        let guard = self.links.read().await;
        let limit = opts.limit.unwrap_or(usize::MAX);

        let snapshot: Vec<Link> = match &opts.start_after {
            Some(cursor) => guard
                .range::<str, _>((Bound::Excluded(cursor.as_str()), Bound::Unbounded))
                .take(limit)
                .map(|(_, link)| link.clone())
                .collect(),
            None => guard.values().take(limit).cloned().collect(),
        };

        stream::iter(snapshot.into_iter().map(Ok)).boxed()
    }

    async fn close(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
