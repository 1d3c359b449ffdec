//! Search box for modules the student has already taken.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::MdClose}};

use crate::data_definitions::recommender_state::RecommenderState;

#[component]
pub fn PreviousModuleSearch() -> Element {
    let state = use_context::<RecommenderState>();
    let criteria = state.criteria;
    let finder = state.finder;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            label { style: "font-weight: 500;", "Previously taken modules" }
            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    border-radius: 8px;
                    padding: 4px 10px;
                ",
                Icon { icon: MdSearch, style: "width: 18px; height: 18px; color: #6B7280;" }
                input {
                    r#type: "text",
                    placeholder: "Search by module id or title",
                    style: "flex: 1; border: none; outline: none; background: transparent;",
                    value: "{finder.read().query()}",
                    oninput: move |event: Event<FormData>| state.search_previous_modules(event.value()),
                }
            }
            if !finder.read().candidates().is_empty() {
                ul {
                    style: "
                        list-style: none;
                        margin: 0;
                        padding: 4px 0;
                        background-color: white;
                        border: 1px solid rgba(0,0,0,0.1);
                        border-radius: 5px;
                        max-height: 200px;
                        overflow-y: auto;
                    ",
                    for candidate in finder.read().candidates().iter().cloned() {
                        li {
                            key: "{candidate.id}",
                            style: "padding: 4px 10px; cursor: pointer;",
                            onclick: {
                                let candidate = candidate.clone();
                                move |_| state.select_previous_module(candidate.clone())
                            },
                            "{candidate}"
                        }
                    }
                }
            }
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 4px;",
                for (index, module) in criteria.read().previous_modules.iter().cloned().enumerate() {
                    div {
                        key: "{module.id}",
                        style: "
                            display: flex;
                            align-items: center;
                            gap: 2px;
                            background-color: #eeeeee;
                            border-radius: 9999px;
                            padding: 2px 4px 2px 10px;
                            font-size: 14px;
                        ",
                        "{module}"
                        button {
                            title: "Remove",
                            style: "border: none; background: none; cursor: pointer; padding: 0;",
                            onclick: move |_| state.remove_previous_module(index),
                            Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
                        }
                    }
                }
            }
        }
    }
}
