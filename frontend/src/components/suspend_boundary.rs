use dioxus::prelude::*;

use crate::components::error_boundary::PaneErrorBoundary;

/// Suspense and error handling for one pane of the page.
#[component]
pub fn SuspendWrapper(pane_name: String, children: Element) -> Element {
    let loading_label = format!("Loading {}...", pane_name.to_lowercase());
    rsx! {
        SuspenseBoundary {
            fallback: move |_s: SuspenseContext| rsx! {
                div {
                    style: "display: flex; align-items: center; justify-content: center; width: 100%; height: 100%;",
                    LoadingIndicator { label: loading_label.clone() }
                }
            },
            PaneErrorBoundary {
                pane_name,
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(label: String) -> Element {
    rsx! {
        div {
            style: "
                color: rgba(0,0,0,0.6);
                font-size: 18px;
                padding: 10px;
                margin: 8px;
            ",
            "{label}"
        }
    }
}
