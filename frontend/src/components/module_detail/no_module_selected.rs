//! Placeholder view when no module is selected.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearchOff;

#[component]
pub fn NoModuleSelected() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                height: 100%;
                width: 100%;
            ",
            div {
                style: "
                    width: 310px;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    gap: 12px;
                ",
                Icon {
                    icon: MdSearchOff,
                    style: "width: 180px; height: 180px; color:rgba(0, 0, 0, 0.5);",
                }
                div {
                    style: "font-size: 30px; font-weight: 500; color:rgb(0, 0, 0);",
                    "No module selected"
                }
                div {
                    style: "font-size: 20px; font-weight: 400; color:rgba(0, 0, 0, 0.5);",
                    "Pick a module from the list to see its details here."
                }
            }
        }
    }
}
