//! Persistence traits implemented by the infrastructure layer.

pub mod link_store;

pub use link_store::{LinkStore, LinkStream, ListOptions};

#[cfg(test)]
pub use link_store::MockLinkStore;
