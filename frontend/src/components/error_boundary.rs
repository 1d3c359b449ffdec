//! Render-failure boundaries: one for the whole app, one per pane.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdRefresh};

use crate::data_definitions::recommender_state::RecommenderState;
use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                tracing::error!("render failure in {boundary_name}: {err:?}");
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            gap: 12px;
                            padding: 24px;
                            color: darkred;
                        ",
                        h1 { style: "margin: 0; font-size: 34px;", "The recommender stopped working" }
                        p { style: "margin: 0; font-size: 18px;", "Section: {boundary_name}" }
                        Link {
                            to: Route::RecommenderPage {},
                            style: "color: #3070b3; font-size: 18px;",
                            "Start over"
                        }
                        pre {
                            style: "color: black; border: 1px solid red; border-radius: 5px; padding: 10px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

/// Keeps a failing pane from taking the page down. The failure also lands
/// in the notice banner when the recommender state is available.
#[component]
pub fn PaneErrorBoundary(pane_name: String, children: Element) -> Element {
    let state = try_use_context::<RecommenderState>();
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:?}", e.0),
                    None => "Unknown error".to_string(),
                };
                tracing::error!("{pane_name} failed to render: {error_txt}");
                if let Some(state) = state {
                    let notice = format!("{pane_name} could not be shown: {error_txt}");
                    // not while rendering
                    spawn(async move { state.notify(notice) });
                }
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            gap: 8px;
                            padding: 24px;
                            color: darkred;
                        ",
                        span { style: "font-size: 20px; font-weight: 500;", "{pane_name} is unavailable" }
                        button {
                            style: "
                                display: flex;
                                align-items: center;
                                gap: 4px;
                                background: white;
                                border: 1px solid rgba(0,0,0,0.1);
                                border-radius: 8px;
                                padding: 4px 10px;
                                cursor: pointer;
                            ",
                            onclick: move |_| err.clear_errors(),
                            Icon { icon: MdRefresh, style: "width: 18px; height: 18px;" }
                            "Try again"
                        }
                    }
                }
            },
            {children}
        }
    }
}
