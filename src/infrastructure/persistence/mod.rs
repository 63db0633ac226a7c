//! Storage backend implementations of [`LinkStore`](crate::domain::repositories::LinkStore).

pub mod memory_link_store;

pub use memory_link_store::MemoryLinkStore;
