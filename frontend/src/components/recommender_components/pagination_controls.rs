//! Page cursor shared by the primary and ranked listings.

use common::module_pager::{PageSlot, page_slots};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::data_definitions::recommender_state::RecommenderState;

#[component]
pub fn PaginationControls() -> Element {
    let state = use_context::<RecommenderState>();
    let pager = state.pager;

    // the server's page count is authoritative
    let max_pages = use_memo(move || pager.read().total_pages());
    let current_page = use_memo(move || pager.read().current_page());
    let is_loading = use_memo(move || pager.read().is_loading_primary());
    let can_go_to_previous_page = use_memo(move || !is_loading() && current_page() > 1);
    let can_go_to_next_page = use_memo(move || !is_loading() && current_page() < max_pages());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
                padding: 12px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| state.change_page(current_page() - 1),
            }
            for (index, slot) in page_slots(current_page(), max_pages()).into_iter().enumerate() {
                {
                    match slot {
                        PageSlot::Page(page) => rsx! {
                            PageNumberButton { key: "page-{page}", page, is_current: page == current_page(), disabled: is_loading() }
                        },
                        PageSlot::Gap => rsx! {
                            span { key: "gap-{index}", style: "color: rgba(0,0,0,0.5);", "..." }
                        },
                    }
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !can_go_to_next_page(),
                onclick: move |_| state.change_page(current_page() + 1),
            }
        }
    }
}

#[component]
fn PageNumberButton(page: u32, is_current: bool, disabled: bool) -> Element {
    let state = use_context::<RecommenderState>();
    let background = if is_current { "#3070b3" } else { "white" };
    let color = if is_current { "white" } else { "rgba(0,0,0,0.8)" };
    rsx! {
        button {
            disabled: disabled || is_current,
            style: "
                min-width: 32px;
                height: 32px;
                border-radius: 16px;
                border: 1px solid rgba(0,0,0,0.1);
                background-color: {background};
                color: {color};
                font-size: 15px;
                cursor: pointer;
            ",
            onclick: move |_| state.change_page(page),
            "{page}"
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 22px; height: 22px; color: {btn_color};" }
        }
    }
}
