//! Course service endpoints, one module per remote operation.

pub mod extraction;
pub mod topics;
pub mod modules;
