//! Domain layer: the link expansion model and the store contract.

pub mod entities;
pub mod repositories;
