//! Server functions exposed to the browser.

pub mod recommender_api;
