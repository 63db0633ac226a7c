//! Application layer: services orchestrating the domain model.

pub mod services;
