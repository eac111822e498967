//! Concrete backends for the service traits.

pub mod school;
