//! Core domain entities.

pub mod link;
pub mod link_match;

pub use link::{ExpandedUrl, Link};
pub use link_match::Match;
