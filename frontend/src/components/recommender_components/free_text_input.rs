//! Free text box where the student describes what they are looking for.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::data_definitions::recommender_state::RecommenderState;

#[component]
pub fn FreeTextInput() -> Element {
    let state = use_context::<RecommenderState>();
    let mut criteria = state.criteria;
    let extracting = state.extracting;

    let button_color = use_memo(move || if extracting() { "#6B7280" } else { "#3070b3" });
    let free_text_oninput = move |event: Event<FormData>| {
        criteria.write().free_text = event.value();
    };
    let free_text_onkeydown = move |event: Event<KeyboardData>| {
        // shift+enter keeps the newline
        if event.key() == Key::Enter && !event.modifiers().contains(Modifiers::SHIFT) {
            event.prevent_default();
            state.submit_free_text();
        }
    };

    rsx! {
        div {
            id: "x-free-text-input",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 16px;
                background-color: white;
                border-radius: 8px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
            ",
            label {
                style: "font-size: 18px; font-weight: 500;",
                "What would you like to study?"
            }
            textarea {
                rows: 4,
                placeholder: "Describe your interests, the modules you already took, or leave empty to pick filters by hand",
                style: "
                    resize: vertical;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    border-radius: 8px;
                    padding: 10px 14px;
                    color: #111827;
                    font-size: 16px;
                    font-family: Roboto, sans-serif;
                ",
                value: "{criteria.read().free_text}",
                oninput: free_text_oninput,
                onkeydown: free_text_onkeydown,
            }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                button {
                    disabled: extracting(),
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        border: none;
                        border-radius: 9999px;
                        padding: 8px 18px;
                        color: white;
                        background-color: {button_color};
                        cursor: pointer;
                    ",
                    onclick: move |_| state.submit_free_text(),
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
                    "Find modules"
                }
                if extracting() {
                    span { style: "color: rgba(0,0,0,0.6);", "Reading your preferences..." }
                }
            }
        }
    }
}
