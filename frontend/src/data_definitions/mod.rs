//! Page-level state and configuration.

pub mod recommender_config;
pub mod recommender_state;
