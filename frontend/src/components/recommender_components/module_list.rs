//! Cards for the modules of the active tab.

use common::module::ModuleSummary;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearchOff, md_social_icons::MdSchool}};

use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::recommender_state::RecommenderState;

#[component]
pub fn ModuleList() -> Element {
    let state = use_context::<RecommenderState>();
    let pager = state.pager;

    let modules = use_memo(move || pager.read().active_list().to_vec());
    let is_loading = use_memo(move || {
        let pager = pager.read();
        match pager.active_tab() {
            common::module_pager::ResultTab::Primary => pager.is_loading_primary(),
            common::module_pager::ResultTab::Ranked => pager.is_loading_ranked(),
        }
    });
    let loading_label = use_memo(move || match pager.read().active_tab() {
        common::module_pager::ResultTab::Primary => "Loading modules...".to_string(),
        common::module_pager::ResultTab::Ranked => "Ranking modules for you...".to_string(),
    });
    let error = use_memo(move || pager.read().primary_error().map(str::to_string));
    let first_index = use_memo(move || {
        let pager = pager.read();
        (pager.current_page().max(1) - 1) * pager.options().page_size
    });

    if is_loading() {
        return rsx! {
            div {
                style: "display: flex; justify-content: center; padding: 24px;",
                LoadingIndicator { label: loading_label() }
            }
        };
    }
    if modules.read().is_empty() {
        return rsx! {
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 8px;
                    padding: 24px;
                    color: rgba(0,0,0,0.6);
                ",
                Icon { icon: MdSearchOff, style: "width: 48px; height: 48px;" }
                if let Some(error) = error() {
                    span { style: "color: darkred;", "Could not load modules: {error}" }
                } else {
                    "No modules match these filters."
                }
            }
        };
    }

    rsx! {
        for (index, module) in modules().into_iter().enumerate() {
            ModuleCard { key: "{module.id}", module: module.clone(), item_index: first_index() + index as u32 + 1 }
        }
    }
}

#[component]
fn ModuleCard(module: ModuleSummary, item_index: u32) -> Element {
    let state = use_context::<RecommenderState>();
    let pager = state.pager;
    let we_are_selected = pager.read().selection().selected_id() == Some(module.id.as_str());
    let border_color = if we_are_selected { "#367ED899" } else { "#AAAAAA33" };
    let background_color = if we_are_selected { "#4096FF33" } else { "white" };
    let ModuleSummary { id, title, school, ects, study_level, language, .. } = module.clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                background: {background_color};
                border: 3px solid {border_color};
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                width: calc(100% - 16px);
                box-sizing: border-box;
                cursor: pointer;
            ",
            onclick: move |_| state.select_module(module.clone()),
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                span {
                    style: "font-size: 20px; font-weight: 200; color: rgba(0, 0, 0, 0.5);",
                    "{item_index}."
                }
                Icon { icon: MdSchool, style: "width: 22px; height: 22px; color: #3070b3;" }
                span {
                    style: "font-size: 18px; font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{title}"
                }
                div { style: "flex: 1 1 auto;" }
                span { style: "color: rgba(0, 0, 0, 0.5);", "{id}" }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 16px; color: rgba(0, 0, 0, 0.7); font-size: 14px;",
                span { "{school}" }
                span { "{ects} ECTS" }
                span { "{study_level}" }
                span { "{language}" }
            }
        }
    }
}
