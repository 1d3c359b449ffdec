//! State shared by every component of the recommender page, and the IO that
//! drives the `common` state machines.

use common::{
    filter_criteria::FilterCriteria,
    module::{ModuleRef, ModuleSummary},
    module_pager::{ModulePager, RefreshPlan, ResultTab},
    notice_log::NoticeLog,
    previous_module_finder::PreviousModuleFinder,
    recommender_const::SEARCH_DEBOUNCE_MS,
    topic_mapping::{MappingOutcome, TopicKind, normalize_label},
};
use dioxus::{logger::tracing, prelude::*};

use crate::api::recommender_api::{extract_filters, list_modules, list_ranked_modules, map_topic, modules_by_id, search_modules};
use crate::data_definitions::recommender_config::RecommenderConfig;

#[derive(Clone, Copy, PartialEq)]
pub struct RecommenderState {
    pub config: Signal<RecommenderConfig>,
    pub criteria: Signal<FilterCriteria>,
    pub pager: Signal<ModulePager>,
    pub finder: Signal<PreviousModuleFinder>,
    pub filters_visible: Signal<bool>,
    pub filters_expanded: Signal<bool>,
    pub extracting: Signal<bool>,
    pub notices: Signal<NoticeLog>,
}

impl RecommenderState {
    /// Must be called from a component scope, it creates the signals.
    pub fn new(config: RecommenderConfig) -> Self {
        let pager = ModulePager::new(config.pager_options());
        Self {
            config: Signal::new(config),
            criteria: Signal::new(FilterCriteria::default()),
            pager: Signal::new(pager),
            finder: Signal::new(PreviousModuleFinder::default()),
            filters_visible: Signal::new(false),
            filters_expanded: Signal::new(false),
            extracting: Signal::new(false),
            notices: Signal::new(NoticeLog::default()),
        }
    }

    pub fn notify(mut self, message: String) {
        self.notices.write().push(message);
    }

    pub fn dismiss_notice(mut self, index: usize) {
        self.notices.write().dismiss(index);
    }

    /// Empty text only reveals the filter panel. Otherwise the extracted
    /// filters replace the current ones and the listing is refreshed.
    pub fn submit_free_text(mut self) {
        let text = self.criteria.peek().free_text.trim().to_string();
        if text.is_empty() {
            self.filters_visible.set(true);
            self.filters_expanded.set(true);
            return;
        }
        if *self.extracting.peek() {
            return;
        }
        self.extracting.set(true);
        spawn(async move {
            match extract_filters(text).await {
                Ok(filters) => {
                    self.criteria.write().apply_extracted_filters(filters);
                    self.filters_visible.set(true);
                    self.filters_expanded.set(false);
                    self.refresh(1);
                }
                Err(e) => {
                    tracing::error!("Error during extraction: {e}");
                    self.notify(format!("Could not read your preferences: {e}"));
                }
            }
            self.extracting.set(false);
        });
    }

    pub fn refresh(self, page: u32) {
        let mut pager = self.pager;
        let criteria = self.criteria.peek().clone();
        let RefreshPlan { primary, ranked } = pager.write().refresh(&criteria, page);

        spawn(async move {
            let result = list_modules(primary.query).await.map_err(|e| e.to_string());
            let failure = result.as_ref().err().cloned();
            if !pager.write().complete_primary(primary.seq, result) {
                tracing::debug!("dropped stale primary page {}", primary.seq);
                return;
            }
            if let Some(e) = failure {
                tracing::error!("Error fetching modules: {e}");
                self.notify(format!("Could not load modules: {e}"));
            }
        });

        if let Some(ranked) = ranked {
            spawn(async move {
                let result = list_ranked_modules(ranked.query).await.map(|page| page.items).map_err(|e| e.to_string());
                if let Err(e) = &result {
                    // the ranked tab just stays empty
                    tracing::warn!("Error fetching ranked modules: {e}");
                }
                if !pager.write().complete_ranked(ranked.seq, result) {
                    tracing::debug!("dropped stale ranked page {}", ranked.seq);
                }
            });
        }
    }

    pub fn change_page(self, page: u32) {
        self.refresh(page);
    }

    pub fn refresh_current_page(self) {
        let page = self.pager.peek().current_page();
        self.refresh(page);
    }

    pub fn clear_all_filters(mut self) {
        self.criteria.write().clear_all_filters();
    }

    pub fn add_topic(mut self, kind: TopicKind, raw_label: String) {
        let label = match normalize_label(&raw_label) {
            Ok(label) => label,
            Err(e) => {
                tracing::debug!("ignoring topic: {e}");
                return;
            }
        };
        spawn(async move {
            let result = map_topic(label.clone()).await.map_err(|e| e.to_string());
            let outcome = self.criteria.write().topics_mut(kind).apply_mapping_result(label.clone(), result);
            match outcome {
                MappingOutcome::Added => {}
                MappingOutcome::NoMatch => self.notify(format!("No matching topics found for \"{label}\"")),
                MappingOutcome::Failed(e) => {
                    tracing::error!("Error fetching topic mapping: {e}");
                    self.notify(format!("Could not look up \"{label}\": {e}"));
                }
            }
        });
    }

    pub fn remove_topic_mapping(mut self, kind: TopicKind, label: String, concept_id: String) {
        self.criteria.write().topics_mut(kind).remove_mapping(&label, &concept_id);
    }

    /// Debounced: only the last call within the quiescence window sends a request.
    pub fn search_previous_modules(mut self, text: String) {
        let Some(ticket) = self.finder.write().search(&text) else { return };
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if !self.finder.peek().is_current(&ticket) {
                return;
            }
            let result = search_modules(ticket.query.clone()).await.map_err(|e| e.to_string());
            if let Err(e) = &result {
                tracing::error!("Error fetching module recommendations: {e}");
            }
            self.finder.write().complete_search(&ticket, result);
        });
    }

    pub fn select_previous_module(mut self, candidate: ModuleRef) {
        let mut criteria = self.criteria.write();
        self.finder.write().select(candidate, &mut criteria.previous_modules);
    }

    pub fn remove_previous_module(mut self, index: usize) {
        let mut criteria = self.criteria.write();
        self.finder.peek().remove(index, &mut criteria.previous_modules);
    }

    pub fn select_tab(mut self, tab: ResultTab) {
        self.pager.write().select_tab(tab);
    }

    pub fn select_module(mut self, module: ModuleSummary) {
        if let Err(e) = self.pager.write().select_module(&module) {
            tracing::warn!("ignoring selection: {e}");
        }
    }

    /// Looks up the prerequisite modules of the current selection, if needed.
    pub fn resolve_prerequisites(self) {
        let mut pager = self.pager;
        if !pager.peek().selection().needs_prerequisites() {
            return;
        }
        let Some(request) = pager.write().selection_mut().prerequisite_request() else { return };
        spawn(async move {
            let result = modules_by_id(request.module_ids).await.map_err(|e| e.to_string());
            if let Err(e) = &result {
                tracing::error!("Error fetching module details: {e}");
            }
            pager.write().selection_mut().complete_prerequisites(request.seq, result);
        });
    }
}
