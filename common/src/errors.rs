//! Errors raised by the recommender state machines.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommenderError {
    #[error("topic label is empty")]
    EmptyTopicLabel,
    #[error("module {0} is not in the active result list")]
    ModuleNotInActiveList(String),
    #[error("unknown school: {0}")]
    UnknownSchool(String),
}

pub type Result<T> = std::result::Result<T, RecommenderError>;
