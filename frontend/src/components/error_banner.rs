//! Dismissable notices for failed service calls.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::data_definitions::recommender_state::RecommenderState;

#[component]
pub fn ErrorBanner() -> Element {
    let state = use_context::<RecommenderState>();
    let notices = state.notices;

    rsx! {
        div {
            id: "x-error-banner",
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
            ",
            for (index, notice) in notices.read().iter().cloned().enumerate() {
                div {
                    key: "{index}-{notice}",
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 8px;
                        color: darkred;
                        background-color: #fdecea;
                        border: 1px solid red;
                        border-radius: 5px;
                        padding: 6px 10px;
                    ",
                    span { style: "flex-grow: 1;", "{notice}" }
                    button {
                        title: "Dismiss",
                        style: "border: none; background: none; cursor: pointer;",
                        onclick: move |_| state.dismiss_notice(index),
                        Icon { icon: MdClose, style: "width: 18px; height: 18px; color: darkred;" }
                    }
                }
            }
        }
    }
}
