use dioxus::prelude::*;

use crate::{
    components::{
        error_banner::ErrorBanner,
        module_detail::ModuleDetail,
        recommender_components::{filter_panel::FilterPanel, free_text_input::FreeTextInput, result_tabs::ResultTabs},
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::{recommender_config::RecommenderConfig, recommender_state::RecommenderState},
};

/// Module recommender page
#[component]
pub fn RecommenderPage() -> Element {
    use_context_provider(|| RecommenderState::new(RecommenderConfig::default()));

    rsx! {
        Title { "Module Recommender" }
        div {
            id: "x-recommender-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: row;
                background: #F5F6F8;
            "#,
            div {
                id: "x-recommender-left-panel",
                style: "
                    height: 100%;
                    width: 45%;
                    min-width: 420px;
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                    padding: 16px;
                    box-sizing: border-box;
                    overflow-y: auto;
                    background-color: #ECEEF2;
                ",
                ErrorBanner {}
                FreeTextInput {}
                FilterPanel {}
                div {
                    style: "flex-grow: 1; min-height: 300px;",
                    SuspendWrapper { pane_name: "Results",
                        ResultTabs {}
                    }
                }
            }
            div {
                id: "x-recommender-right-panel",
                style: "
                    height: 100%;
                    flex-grow: 1;
                    min-width: 100px;
                    border-left: 1px solid rgb(164, 164, 164);
                ",
                SuspendWrapper { pane_name: "Module details",
                    ModuleDetail {}
                }
            }
        }
    }
}
