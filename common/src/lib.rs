//! Common library exports shared between frontend and backend.

extern crate serde;

pub mod recommender_const;
pub mod errors;
pub mod module;
pub mod organisations;
pub mod topic_mapping;
pub mod service_types;
pub mod filter_criteria;
pub mod module_query;
pub mod result_selection;
pub mod module_pager;
pub mod previous_module_finder;
pub mod notice_log;
