//! Store contract for link persistence.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::entities::Link;
use crate::error::StoreError;

/// The lazy, single-pass sequence produced by [`LinkStore::list`].
///
/// Entries arrive in ascending name order; a corrupt entry surfaces as an
/// `Err` at its position without necessarily aborting the rest, unless the
/// backend considers the corruption fatal.
pub type LinkStream = BoxStream<'static, Result<Link, StoreError>>;

/// Pagination options for [`LinkStore::list`].
///
/// The default value lists everything.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Resume strictly after this name; acts as an opaque cursor, so the
    /// named link does not need to still exist.
    pub start_after: Option<String>,
    /// Maximum number of entries to yield.
    pub limit: Option<usize>,
}

/// Persistence contract for [`Link`]s, keyed by name.
///
/// Every backend implements exactly these five operations. Cancellation and
/// timeouts follow the usual async contract: dropping the returned future
/// cancels the operation, and callers impose deadlines with
/// `tokio::time::timeout`; I/O-backed implementations are expected to
/// propagate both into their underlying calls.
///
/// [`StoreError::NotFound`] is the only error variant all backends agree on;
/// anything else is opaque to callers.
///
/// # Implementations
///
/// - [`MemoryLinkStore`](crate::infrastructure::persistence::MemoryLinkStore) -
///   ordered, concurrency-safe reference implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Upserts a link by name: create-or-replace, never a partial update.
    ///
    /// Taking the link by value hands the store sole ownership, so a stored
    /// link never aliases memory the caller can still mutate.
    async fn put(&self, link: Link) -> Result<(), StoreError>;

    /// Fetches the link with the given name.
    ///
    /// The returned value is an independent copy; mutating it never affects
    /// the stored link.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no link has that name.
    async fn get(&self, name: &str) -> Result<Link, StoreError>;

    /// Removes the link with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no link has that name.
    async fn delete(&self, name: &str) -> Result<(), StoreError>;

    /// Streams links in ascending name order.
    ///
    /// The ordering is a contract guarantee - pagination cursors and
    /// deterministic test comparisons depend on it. The stream reflects a
    /// state of the store that existed at a single instant.
    async fn list(&self, opts: ListOptions) -> LinkStream;

    /// Releases backend resources.
    ///
    /// Non-durable backends may treat process exit as an implicit close.
    async fn close(&self) -> Result<(), StoreError>;
}
