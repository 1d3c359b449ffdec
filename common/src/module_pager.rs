//! Primary and ranked module listings that share one page cursor.
//!
//! The pager does no IO. [`ModulePager::refresh`] returns the requests to
//! issue, each tagged with a per-kind sequence number, and the caller feeds
//! the responses back through [`ModulePager::complete_primary`] and
//! [`ModulePager::complete_ranked`]. A response whose sequence number is not
//! the latest one issued for its kind is dropped, so a slow fetch for an old
//! page or old filters never overwrites a newer result.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::filter_criteria::FilterCriteria;
use crate::module::{ModuleSummary, PageResult};
use crate::module_query::{ListingKind, ModuleListQuery};
use crate::recommender_const::{PAGE_BUTTON_RADIUS, PAGE_SIZE};
use crate::result_selection::ResultSelection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResultTab {
    #[default]
    Primary,
    Ranked,
}

impl ResultTab {
    pub fn index(&self) -> usize {
        match self {
            ResultTab::Primary => 0,
            ResultTab::Ranked => 1,
        }
    }
}

/// One slot of the page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(u32),
    Gap,
}

/// First page, last page and a window around `current`, with gaps between.
pub fn page_slots(current: u32, total_pages: u32) -> Vec<PageSlot> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let from = current.saturating_sub(PAGE_BUTTON_RADIUS).max(1);
    let to = (current + PAGE_BUTTON_RADIUS).min(total_pages);

    let mut slots = Vec::new();
    if from > 1 {
        slots.push(PageSlot::Page(1));
        if from > 2 {
            slots.push(PageSlot::Gap);
        }
    }
    slots.extend((from..=to).map(PageSlot::Page));
    if to < total_pages {
        if to + 1 < total_pages {
            slots.push(PageSlot::Gap);
        }
        slots.push(PageSlot::Page(total_pages));
    }
    slots
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRequest {
    pub kind: ListingKind,
    pub seq: u64,
    pub query: ModuleListQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefreshPlan {
    pub primary: ListingRequest,
    pub ranked: Option<ListingRequest>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagerOptions {
    pub page_size: u32,
    pub with_digital_score: bool,
    pub ranked_enabled: bool,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self { page_size: PAGE_SIZE, with_digital_score: true, ranked_enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModulePager {
    options: PagerOptions,
    current_page: u32,
    total_pages: u32,
    total_modules: Option<u64>,
    primary: Vec<ModuleSummary>,
    ranked: Option<Vec<ModuleSummary>>,
    loading_primary: bool,
    loading_ranked: bool,
    primary_error: Option<String>,
    active_tab: ResultTab,
    selection: ResultSelection,
    primary_seq: u64,
    ranked_seq: u64,
}

impl Default for ModulePager {
    fn default() -> Self {
        Self::new(PagerOptions::default())
    }
}

impl ModulePager {
    pub fn new(options: PagerOptions) -> Self {
        Self {
            options,
            current_page: 1,
            total_pages: 1,
            total_modules: None,
            primary: Vec::new(),
            ranked: None,
            loading_primary: false,
            loading_ranked: false,
            primary_error: None,
            active_tab: ResultTab::Primary,
            selection: ResultSelection::default(),
            primary_seq: 0,
            ranked_seq: 0,
        }
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_modules(&self) -> Option<u64> {
        self.total_modules
    }

    pub fn primary(&self) -> &[ModuleSummary] {
        &self.primary
    }

    pub fn ranked(&self) -> Option<&[ModuleSummary]> {
        self.ranked.as_deref()
    }

    pub fn is_loading_primary(&self) -> bool {
        self.loading_primary
    }

    pub fn is_loading_ranked(&self) -> bool {
        self.loading_ranked
    }

    pub fn primary_error(&self) -> Option<&str> {
        self.primary_error.as_deref()
    }

    pub fn active_tab(&self) -> ResultTab {
        self.active_tab
    }

    pub fn selection(&self) -> &ResultSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut ResultSelection {
        &mut self.selection
    }

    /// Modules of the active tab. An absent ranked set reads as empty.
    pub fn active_list(&self) -> &[ModuleSummary] {
        match self.active_tab {
            ResultTab::Primary => &self.primary,
            ResultTab::Ranked => self.ranked.as_deref().unwrap_or_default(),
        }
    }

    /// Starts a new fetch of `page` for both listings.
    pub fn refresh(&mut self, criteria: &FilterCriteria, page: u32) -> RefreshPlan {
        let page = page.max(1);
        self.current_page = page;
        self.loading_primary = true;
        self.primary_error = None;
        self.primary.clear();
        self.selection.set(None);

        let query = ModuleListQuery::from_criteria(criteria, page, self.options.page_size, self.options.with_digital_score);

        self.primary_seq += 1;
        // any ranked response still in flight belongs to older filters
        self.ranked_seq += 1;

        let primary = ListingRequest { kind: ListingKind::Primary, seq: self.primary_seq, query: query.clone() };

        let ranked = if self.options.ranked_enabled && criteria.has_free_text() {
            self.ranked = Some(Vec::new());
            self.loading_ranked = true;
            Some(ListingRequest { kind: ListingKind::Ranked, seq: self.ranked_seq, query })
        } else {
            self.ranked = None;
            self.loading_ranked = false;
            self.active_tab = ResultTab::Primary;
            None
        };

        RefreshPlan { primary, ranked }
    }

    /// Moves the shared cursor and refreshes both listings.
    pub fn change_page(&mut self, criteria: &FilterCriteria, page: u32) -> RefreshPlan {
        self.refresh(criteria, page)
    }

    /// Applies a primary listing response. Returns false if it was stale.
    pub fn complete_primary(&mut self, seq: u64, result: std::result::Result<PageResult, String>) -> bool {
        if seq != self.primary_seq {
            return false;
        }
        self.loading_primary = false;
        match result {
            Ok(page) => {
                self.primary = page.items;
                self.total_pages = page.total_pages;
                self.total_modules = page.total_modules;
                if self.active_tab == ResultTab::Primary {
                    self.selection.set(self.primary.first().cloned());
                }
            }
            Err(message) => {
                self.primary.clear();
                self.primary_error = Some(message);
            }
        }
        true
    }

    /// Applies a ranked listing response. A failure leaves the ranked tab
    /// empty without an error. Returns false if it was stale.
    pub fn complete_ranked(&mut self, seq: u64, result: std::result::Result<Vec<ModuleSummary>, String>) -> bool {
        if seq != self.ranked_seq || self.ranked.is_none() {
            return false;
        }
        self.loading_ranked = false;
        let modules = result.unwrap_or_default();
        self.ranked = Some(modules);
        if self.active_tab == ResultTab::Ranked && self.selection.selected().is_none() {
            let first = self.active_list().first().cloned();
            self.selection.set(first);
        }
        true
    }

    /// Switches tabs and selects the first module of the new tab.
    pub fn select_tab(&mut self, tab: ResultTab) {
        if tab == ResultTab::Ranked && self.ranked.is_none() {
            return;
        }
        self.active_tab = tab;
        let first = self.active_list().first().cloned();
        self.selection.set(first);
    }

    /// Shows `module` in the detail pane if it is in the active tab's list.
    pub fn select_module(&mut self, module: &ModuleSummary) -> Result<()> {
        let active = match self.active_tab {
            ResultTab::Primary => &self.primary[..],
            ResultTab::Ranked => self.ranked.as_deref().unwrap_or_default(),
        };
        self.selection.select_from(module, active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RecommenderError;

    fn module(id: &str, title: &str) -> ModuleSummary {
        ModuleSummary { id: id.to_string(), title: title.to_string(), ..Default::default() }
    }

    fn page(items: Vec<ModuleSummary>, total_pages: u32) -> PageResult {
        PageResult { items, total_pages, total_modules: None }
    }

    fn with_text(text: &str) -> FilterCriteria {
        FilterCriteria { free_text: text.to_string(), ..Default::default() }
    }

    #[test]
    fn refresh_selects_first_module_and_reports_pages() {
        let mut pager = ModulePager::default();
        let plan = pager.refresh(&FilterCriteria::default(), 1);
        assert!(pager.is_loading_primary());
        assert!(plan.ranked.is_none());
        assert!(pager.ranked().is_none());

        assert!(pager.complete_primary(plan.primary.seq, Ok(page(vec![module("CS101", "Intro")], 3))));
        assert!(!pager.is_loading_primary());
        assert_eq!(pager.total_pages(), 3);
        let selected = pager.selection().selected().unwrap();
        assert_eq!((selected.id.as_str(), selected.title.as_str()), ("CS101", "Intro"));
    }

    #[test]
    fn empty_page_selects_nothing() {
        let mut pager = ModulePager::default();
        let plan = pager.refresh(&FilterCriteria::default(), 1);
        pager.complete_primary(plan.primary.seq, Ok(page(vec![], 0)));
        assert!(pager.selection().selected().is_none());
        assert_eq!(pager.total_pages(), 0);
    }

    #[test]
    fn both_listings_use_the_requested_page_and_size() {
        let mut pager = ModulePager::default();
        for requested in [1, 4, 2] {
            let plan = pager.change_page(&with_text("robotics"), requested);
            let ranked = plan.ranked.unwrap();
            assert_eq!(pager.current_page(), requested);
            assert_eq!(plan.primary.query.page, requested);
            assert_eq!(ranked.query.page, requested);
            assert_eq!(plan.primary.query.size, ranked.query.size);
            assert_eq!(ranked.kind, ListingKind::Ranked);
        }
    }

    #[test]
    fn page_zero_is_raised_to_one() {
        let mut pager = ModulePager::default();
        let plan = pager.change_page(&FilterCriteria::default(), 0);
        assert_eq!(plan.primary.query.page, 1);
    }

    #[test]
    fn ranked_failure_keeps_primary_results() {
        let mut pager = ModulePager::default();
        let plan = pager.refresh(&with_text("I like robots"), 1);
        assert_eq!(pager.ranked(), Some(&[][..]));
        assert!(pager.is_loading_ranked());

        pager.complete_primary(plan.primary.seq, Ok(page(vec![module("A", "a"), module("B", "b")], 1)));
        assert!(pager.complete_ranked(plan.ranked.unwrap().seq, Err("timeout".to_string())));

        assert_eq!(pager.primary().len(), 2);
        assert_eq!(pager.ranked(), Some(&[][..]));
        assert!(!pager.is_loading_ranked());
        assert!(pager.primary_error().is_none());
        assert_eq!(pager.selection().selected_id(), Some("A"));
    }

    #[test]
    fn primary_failure_leaves_list_empty_and_stops_loading() {
        let mut pager = ModulePager::default();
        let plan = pager.refresh(&FilterCriteria::default(), 1);
        pager.complete_primary(plan.primary.seq, Err("502 Bad Gateway".to_string()));
        assert!(pager.primary().is_empty());
        assert!(!pager.is_loading_primary());
        assert_eq!(pager.primary_error(), Some("502 Bad Gateway"));
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut pager = ModulePager::default();
        let first = pager.change_page(&with_text("ml"), 1);
        let second = pager.change_page(&with_text("ml"), 2);

        assert!(pager.complete_primary(second.primary.seq, Ok(page(vec![module("P2", "page two")], 5))));
        assert!(!pager.complete_primary(first.primary.seq, Ok(page(vec![module("P1", "page one")], 5))));
        assert!(!pager.complete_ranked(first.ranked.unwrap().seq, Ok(vec![module("R1", "old")])));

        assert_eq!(pager.primary()[0].id, "P2");
        assert_eq!(pager.ranked(), Some(&[][..]));
        assert!(pager.is_loading_ranked());
    }

    #[test]
    fn page_slots_collapse_long_ranges() {
        use PageSlot::{Gap, Page};
        assert_eq!(page_slots(1, 0), vec![]);
        assert_eq!(page_slots(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_slots(1, 50), vec![Page(1), Page(2), Page(3), Gap, Page(50)]);
        assert_eq!(page_slots(25, 50), vec![Page(1), Gap, Page(23), Page(24), Page(25), Page(26), Page(27), Gap, Page(50)]);
        assert_eq!(page_slots(50, 50), vec![Page(1), Gap, Page(48), Page(49), Page(50)]);
        // no gap when the window touches the ends
        assert_eq!(page_slots(4, 7), vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]);
    }

    #[test]
    fn stale_primary_failure_is_not_reported() {
        let mut pager = ModulePager::default();
        let first = pager.change_page(&FilterCriteria::default(), 1);
        let second = pager.change_page(&FilterCriteria::default(), 2);

        assert!(!pager.complete_primary(first.primary.seq, Err("timed out".to_string())));
        assert_eq!(pager.primary_error(), None);
        assert!(pager.is_loading_primary());

        assert!(pager.complete_primary(second.primary.seq, Ok(page(vec![module("P2", "page two")], 2))));
        assert_eq!(pager.primary_error(), None);
    }

    #[test]
    fn ranked_response_from_text_refresh_is_dropped_after_plain_refresh() {
        let mut pager = ModulePager::default();
        let with = pager.refresh(&with_text("ml"), 1);
        pager.refresh(&FilterCriteria::default(), 1);
        assert!(!pager.complete_ranked(with.ranked.unwrap().seq, Ok(vec![module("R", "r")])));
        assert!(pager.ranked().is_none());
    }

    #[test]
    fn ranked_arrival_does_not_move_primary_selection() {
        let mut pager = ModulePager::default();
        let plan = pager.refresh(&with_text("ml"), 1);
        pager.complete_primary(plan.primary.seq, Ok(page(vec![module("A", "a")], 1)));
        pager.complete_ranked(plan.ranked.unwrap().seq, Ok(vec![module("R", "r")]));
        assert_eq!(pager.selection().selected_id(), Some("A"));
    }

    #[test]
    fn ranked_arrival_fills_empty_selection_on_ranked_tab() {
        let mut pager = ModulePager::default();
        let plan = pager.refresh(&with_text("ml"), 1);
        pager.select_tab(ResultTab::Ranked);
        assert!(pager.selection().selected().is_none());
        pager.complete_ranked(plan.ranked.unwrap().seq, Ok(vec![module("R", "r")]));
        assert_eq!(pager.selection().selected_id(), Some("R"));
        // primary arriving while ranked tab is active keeps the ranked selection
        pager.complete_primary(plan.primary.seq, Ok(page(vec![module("A", "a")], 1)));
        assert_eq!(pager.selection().selected_id(), Some("R"));
    }

    #[test]
    fn switching_tabs_retargets_selection() {
        let mut pager = ModulePager::default();
        let plan = pager.refresh(&with_text("ml"), 1);
        pager.complete_primary(plan.primary.seq, Ok(page(vec![module("A", "a"), module("B", "b")], 1)));
        pager.complete_ranked(plan.ranked.unwrap().seq, Ok(vec![module("R", "r")]));

        pager.select_tab(ResultTab::Ranked);
        assert_eq!(pager.active_tab().index(), 1);
        assert_eq!(pager.selection().selected_id(), Some("R"));

        pager.select_tab(ResultTab::Primary);
        assert_eq!(pager.selection().selected_id(), Some("A"));
    }

    #[test]
    fn ranked_tab_unavailable_without_free_text() {
        let mut pager = ModulePager::default();
        let plan = pager.refresh(&FilterCriteria::default(), 1);
        pager.complete_primary(plan.primary.seq, Ok(page(vec![module("A", "a")], 1)));
        pager.select_tab(ResultTab::Ranked);
        assert_eq!(pager.active_tab(), ResultTab::Primary);
        assert_eq!(pager.selection().selected_id(), Some("A"));
    }

    #[test]
    fn ranked_listing_can_be_disabled() {
        let mut pager = ModulePager::new(PagerOptions { ranked_enabled: false, ..Default::default() });
        let plan = pager.refresh(&with_text("ml"), 1);
        assert!(plan.ranked.is_none());
        assert!(pager.ranked().is_none());
    }

    #[test]
    fn module_selection_is_checked_against_the_active_tab() {
        let mut pager = ModulePager::default();
        let plan = pager.refresh(&with_text("ml"), 1);
        pager.complete_primary(plan.primary.seq, Ok(page(vec![module("A", "a"), module("B", "b")], 1)));
        pager.complete_ranked(plan.ranked.unwrap().seq, Ok(vec![module("R", "r")]));

        pager.select_module(&module("B", "b")).unwrap();
        assert_eq!(pager.selection().selected_id(), Some("B"));
        assert_eq!(
            pager.select_module(&module("R", "r")),
            Err(RecommenderError::ModuleNotInActiveList("R".to_string()))
        );
        assert_eq!(pager.selection().selected_id(), Some("B"));
    }

    #[test]
    fn refresh_clears_previous_results_and_selection() {
        let mut pager = ModulePager::default();
        let plan = pager.refresh(&FilterCriteria::default(), 1);
        pager.complete_primary(plan.primary.seq, Ok(page(vec![module("A", "a")], 2)));
        pager.refresh(&FilterCriteria::default(), 2);
        assert!(pager.primary().is_empty());
        assert!(pager.selection().selected().is_none());
        assert!(pager.is_loading_primary());
    }
}
