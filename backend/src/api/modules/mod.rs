//! Module listings, search and lookup.

mod list_modules;
pub use list_modules::list_modules;

mod list_ranked_modules;
pub use list_ranked_modules::list_ranked_modules;

mod search_modules;
pub use search_modules::search_modules;

mod modules_by_id;
pub use modules_by_id::modules_by_id;
