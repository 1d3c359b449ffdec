//! Server-side client of the remote course service.

pub mod api;
pub mod service_utils;
