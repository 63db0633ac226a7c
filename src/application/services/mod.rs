//! Application services.

pub mod resolver_service;

pub use resolver_service::{Resolution, ResolverService};
