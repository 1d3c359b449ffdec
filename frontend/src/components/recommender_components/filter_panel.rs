//! Structured filters. Hidden until the first submit, collapsible afterwards.

use common::{
    module::StudyLevel,
    organisations::{department_short_label, departments_of, school_names},
    recommender_const::{DIGITAL_SCORE_MAX, DIGITAL_SCORE_MIN, ECTS_MAX, ECTS_MIN, MODULE_LANGUAGES},
    topic_mapping::TopicKind,
};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{
    Icon,
    icons::{
        md_action_icons::{MdAccountBalance, MdLanguage},
        md_content_icons::MdClear,
        md_navigation_icons::{MdExpandLess, MdExpandMore, MdRefresh},
        md_social_icons::MdSchool,
    },
};

use crate::components::recommender_components::{previous_module_search::PreviousModuleSearch, topic_chips::TopicChips};
use crate::data_definitions::recommender_state::RecommenderState;

#[component]
pub fn FilterPanel() -> Element {
    let state = use_context::<RecommenderState>();
    let mut filters_expanded = state.filters_expanded;
    let show_digital_score = use_memo(move || state.config.read().show_digital_score);

    if !*state.filters_visible.read() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-filter-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                padding: 16px;
                background-color: white;
                border-radius: 8px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                button {
                    style: "display: flex; align-items: center; gap: 4px; border: none; background: none; cursor: pointer; font-size: 18px; font-weight: 500;",
                    onclick: move |_| {
                        let expanded = *filters_expanded.peek();
                        filters_expanded.set(!expanded);
                    },
                    if filters_expanded() {
                        Icon { icon: MdExpandLess, style: "width: 22px; height: 22px;" }
                        "Hide filters"
                    } else {
                        Icon { icon: MdExpandMore, style: "width: 22px; height: 22px;" }
                        "Show filters"
                    }
                }
                div { style: "flex-grow: 1;" }
                FilterActionButton { icon_kind: FilterAction::Clear, onclick: move |_| state.clear_all_filters() }
                FilterActionButton { icon_kind: FilterAction::Refresh, onclick: move |_| state.refresh_current_page() }
            }
            if filters_expanded() {
                SchoolFilter {}
                StudyLevelFilter {}
                LanguageFilter {}
                RangeFilter {
                    label: "ECTS credits",
                    lower: ECTS_MIN,
                    upper: ECTS_MAX,
                    is_digital_score: false,
                }
                if show_digital_score() {
                    RangeFilter {
                        label: "Digital score",
                        lower: DIGITAL_SCORE_MIN,
                        upper: DIGITAL_SCORE_MAX,
                        is_digital_score: true,
                    }
                }
                TopicChips { kind: TopicKind::Interest }
                TopicChips { kind: TopicKind::Excluded }
                PreviousModuleSearch {}
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum FilterAction {
    Clear,
    Refresh,
}

#[component]
fn FilterActionButton(icon_kind: FilterAction, onclick: Callback<()>) -> Element {
    let label = match icon_kind {
        FilterAction::Clear => "Clear all filters",
        FilterAction::Refresh => "Refresh results",
    };
    rsx! {
        button {
            title: "{label}",
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
            onclick: move |_| onclick(()),
            {
                match icon_kind {
                    FilterAction::Clear => rsx! { Icon { icon: MdClear, style: "width: 18px; height: 18px;" } },
                    FilterAction::Refresh => rsx! { Icon { icon: MdRefresh, style: "width: 18px; height: 18px;" } },
                }
            }
            "{label}"
        }
    }
}

#[component]
fn SchoolFilter() -> Element {
    let state = use_context::<RecommenderState>();
    let mut criteria = state.criteria;

    rsx! {
        fieldset {
            style: "border: 1px solid rgba(0,0,0,0.1); border-radius: 5px; padding: 8px;",
            legend {
                style: "display: flex; align-items: center; gap: 4px;",
                Icon { icon: MdAccountBalance, style: "width: 18px; height: 18px;" }
                "Schools"
            }
            for school in school_names() {
                div {
                    key: "{school}",
                    label {
                        style: "display: flex; align-items: center; gap: 6px; cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked: criteria.read().schools.contains(school),
                            onchange: move |_| {
                                if let Err(e) = criteria.write().toggle_school(school) {
                                    tracing::warn!("{e}");
                                }
                            },
                        }
                        "{school}"
                    }
                    if criteria.read().schools.contains(school) {
                        DepartmentChips { school }
                    }
                }
            }
        }
    }
}

#[component]
fn DepartmentChips(school: &'static str) -> Element {
    let state = use_context::<RecommenderState>();
    let mut criteria = state.criteria;

    rsx! {
        div {
            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 4px; margin: 4px 0 8px 24px;",
            for department in departments_of(school).unwrap_or_default().iter().copied() {
                {
                    let selected = criteria.read().is_department_selected(school, department);
                    let background = if selected { "#3070b3" } else { "white" };
                    let color = if selected { "white" } else { "rgba(0,0,0,0.8)" };
                    rsx! {
                        button {
                            key: "{department}",
                            title: "{department}",
                            style: "
                                border: 1px solid #3070b3;
                                border-radius: 9999px;
                                padding: 2px 10px;
                                font-size: 13px;
                                background-color: {background};
                                color: {color};
                                cursor: pointer;
                            ",
                            onclick: move |_| criteria.write().toggle_department(school, department),
                            "{department_short_label(department)}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StudyLevelFilter() -> Element {
    let state = use_context::<RecommenderState>();
    let mut criteria = state.criteria;
    let current = use_memo(move || criteria.read().study_level);

    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 6px;",
            Icon { icon: MdSchool, style: "width: 18px; height: 18px;" }
            "Study level"
            select {
                style: "border: 1px solid rgba(0,0,0,0.2); border-radius: 5px; padding: 2px 6px;",
                onchange: move |event: Event<FormData>| {
                    criteria.write().set_study_level(StudyLevel::parse(&event.value()));
                },
                option { value: "", selected: current().is_none(), "Any" }
                for level in StudyLevel::ALL {
                    option {
                        key: "{level}",
                        value: "{level}",
                        selected: current() == Some(level),
                        "{level}"
                    }
                }
            }
        }
    }
}

#[component]
fn LanguageFilter() -> Element {
    let state = use_context::<RecommenderState>();
    let mut criteria = state.criteria;

    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
            Icon { icon: MdLanguage, style: "width: 18px; height: 18px;" }
            "Languages"
            for language in MODULE_LANGUAGES {
                label {
                    key: "{language}",
                    style: "display: flex; align-items: center; gap: 4px; cursor: pointer;",
                    input {
                        r#type: "checkbox",
                        checked: criteria.read().languages.contains(language),
                        onchange: move |_| criteria.write().toggle_language(language),
                    }
                    "{language}"
                }
            }
        }
    }
}

#[component]
fn RangeFilter(label: String, lower: u32, upper: u32, is_digital_score: bool) -> Element {
    let state = use_context::<RecommenderState>();
    let mut criteria = state.criteria;
    let range = use_memo(move || {
        let criteria = criteria.read();
        if is_digital_score { criteria.digital_score_range } else { criteria.ects_range }
    });
    let mut set_range = move |min: u32, max: u32| {
        if is_digital_score {
            criteria.write().set_digital_score_range(min, max);
        } else {
            criteria.write().set_ects_range(min, max);
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
            span { style: "min-width: 110px;", "{label}" }
            input {
                r#type: "number",
                min: "{lower}",
                max: "{upper}",
                style: "width: 64px;",
                value: "{range().min}",
                onchange: move |event: Event<FormData>| {
                    if let Ok(min) = event.value().parse::<u32>() {
                        set_range(min, range().max);
                    }
                },
            }
            "to"
            input {
                r#type: "number",
                min: "{lower}",
                max: "{upper}",
                style: "width: 64px;",
                value: "{range().max}",
                onchange: move |event: Event<FormData>| {
                    if let Ok(max) = event.value().parse::<u32>() {
                        set_range(range().min, max);
                    }
                },
            }
        }
    }
}
