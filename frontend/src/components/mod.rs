pub mod error_boundary;
pub mod suspend_boundary;
pub mod navbar;
pub mod error_banner;
pub mod recommender_components;
pub mod module_detail;
