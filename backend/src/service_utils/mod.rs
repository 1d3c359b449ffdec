//! Shared plumbing for talking to the course service.

pub mod course_service_client;
