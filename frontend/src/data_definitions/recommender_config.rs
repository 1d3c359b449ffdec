//! Switches that used to be separate page variants.

use common::{module_pager::PagerOptions, recommender_const::PAGE_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub struct RecommenderConfig {
    pub show_digital_score: bool,
    pub ranked_tab_enabled: bool,
    pub page_size: u32,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self { show_digital_score: true, ranked_tab_enabled: true, page_size: PAGE_SIZE }
    }
}

impl RecommenderConfig {
    pub fn pager_options(&self) -> PagerOptions {
        PagerOptions {
            page_size: self.page_size,
            with_digital_score: self.show_digital_score,
            ranked_enabled: self.ranked_tab_enabled,
        }
    }
}
