pub mod free_text_input;
pub mod filter_panel;
pub mod topic_chips;
pub mod previous_module_search;
pub mod result_tabs;
pub mod module_list;
pub mod pagination_controls;
