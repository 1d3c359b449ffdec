//! Tab strip switching between the filtered listing and the ranked one.

use common::module_pager::ResultTab;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdList, md_social_icons::MdPerson}};

use crate::components::recommender_components::{module_list::ModuleList, pagination_controls::PaginationControls};
use crate::data_definitions::recommender_state::RecommenderState;

#[component]
pub fn ResultTabs() -> Element {
    let state = use_context::<RecommenderState>();
    let pager = state.pager;

    let active_tab = use_memo(move || pager.read().active_tab());
    let has_ranked = use_memo(move || pager.read().ranked().is_some());
    let loading_ranked = use_memo(move || pager.read().is_loading_ranked());
    let total_modules = use_memo(move || pager.read().total_modules());

    rsx! {
        div {
            id: "x-result-tabs",
            style: "
                display: flex;
                flex-direction: column;
                height: 100%;
                min-height: 0;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: flex-end;
                    gap: 4px;
                    border-bottom: 1px solid rgba(0,0,0,0.1);
                ",
                TabButton {
                    tab: ResultTab::Primary,
                    active: active_tab() == ResultTab::Primary,
                    TabIcon { tab: ResultTab::Primary }
                    "Filtered modules"
                    if let Some(total) = total_modules() {
                        span { style: "color: rgba(0,0,0,0.5);", " ({total})" }
                    }
                }
                if has_ranked() {
                    TabButton {
                        tab: ResultTab::Ranked,
                        active: active_tab() == ResultTab::Ranked,
                        TabIcon { tab: ResultTab::Ranked }
                        "Recommended for you"
                        if loading_ranked() {
                            span { style: "color: rgba(0,0,0,0.5);", " (ranking...)" }
                        }
                    }
                }
            }
            div {
                style: "flex-grow: 1; overflow-y: auto; min-height: 0;",
                ModuleList {}
            }
            // one page cursor drives both listings
            PaginationControls {}
        }
    }
}

#[component]
fn TabButton(tab: ResultTab, active: bool, children: Element) -> Element {
    let state = use_context::<RecommenderState>();
    let border_color = if active { "#3070b3" } else { "transparent" };
    let font_weight = if active { 600 } else { 400 };
    rsx! {
        button {
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                border: none;
                border-bottom: 3px solid {border_color};
                background: none;
                padding: 8px 14px;
                font-size: 16px;
                font-weight: {font_weight};
                cursor: pointer;
            ",
            onclick: move |_| state.select_tab(tab),
            {children}
        }
    }
}

#[component]
fn TabIcon(tab: ResultTab) -> Element {
    match tab {
        ResultTab::Primary => rsx! { Icon { icon: MdList, style: "width: 18px; height: 18px;" } },
        ResultTab::Ranked => rsx! { Icon { icon: MdPerson, style: "width: 18px; height: 18px;" } },
    }
}
