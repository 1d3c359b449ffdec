//! Free-text preference extraction.

mod start_extraction;
pub use start_extraction::start_extraction;
