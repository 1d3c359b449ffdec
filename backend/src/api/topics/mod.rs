//! Topic label to concept mapping.

mod map_topic;
pub use map_topic::{TopicMappingOptions, map_topic};
