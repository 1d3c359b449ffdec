//! Detail pane for the selected module.

pub mod no_module_selected;

use common::{
    module::{ModuleRef, ModuleSummary},
    result_selection::Prerequisites,
    topic_mapping::abbreviate_topic,
};
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_action_icons::{MdAccountBalance, MdClass, MdDescription, MdInfo, MdLabel},
        md_communication_icons::MdBusiness,
        md_social_icons::MdPerson,
    },
};

use crate::components::module_detail::no_module_selected::NoModuleSelected;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::recommender_state::RecommenderState;

#[component]
pub fn ModuleDetail() -> Element {
    let state = use_context::<RecommenderState>();
    let pager = state.pager;

    let selected = use_memo(move || pager.read().selection().selected().cloned());
    let needs_prerequisites = use_memo(move || pager.read().selection().needs_prerequisites());
    // every new selection triggers one lookup
    use_effect(move || {
        if needs_prerequisites() {
            state.resolve_prerequisites();
        }
    });

    let Some(module) = selected() else {
        return rsx! { NoModuleSelected {} };
    };
    let show_digital_score = state.config.read().show_digital_score;
    let ModuleSummary {
        id,
        title,
        description,
        chair,
        department,
        school,
        ects,
        study_level,
        language,
        topics,
        prereq,
        digital_score,
        reasoning,
        ..
    } = module;

    rsx! {
        div {
            id: "x-module-detail",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 16px 24px;
                height: 100%;
                overflow-y: auto;
                box-sizing: border-box;
            ",
            div {
                style: "font-size: 26px; font-weight: 500;",
                "{id} - {title}"
            }
            if let Some(reasoning) = reasoning.filter(|r| !r.trim().is_empty()) {
                DetailSection { icon_kind: SectionIcon::Reasoning, heading: "Why this module fits you",
                    p { style: "margin: 0; font-style: italic;", "{reasoning}" }
                }
            }
            DetailSection { icon_kind: SectionIcon::Hierarchy, heading: "Organisation",
                div { "{school}" }
                div { style: "padding-left: 16px;", "{department}" }
                if !chair.is_empty() {
                    div { style: "padding-left: 32px;", "{chair}" }
                }
            }
            DetailSection { icon_kind: SectionIcon::Details, heading: "Details",
                div { "Credits: {ects} ECTS" }
                div { "Study level: {study_level}" }
                div { "Language: {language}" }
                if show_digital_score {
                    if let Some(score) = digital_score {
                        div { "Digital score: {score}" }
                    }
                }
            }
            DetailSection { icon_kind: SectionIcon::Description, heading: "Description",
                p { style: "margin: 0; white-space: pre-wrap;", "{description}" }
            }
            if let Some(prereq) = prereq.filter(|p| !p.trim().is_empty()) {
                DetailSection { icon_kind: SectionIcon::Prerequisites, heading: "Prerequisites",
                    p { style: "margin: 0; white-space: pre-wrap;", "{prereq}" }
                }
            }
            PrerequisiteModules {}
            if !topics.is_empty() {
                DetailSection { icon_kind: SectionIcon::Topics, heading: "Topics",
                    TopicList { topics }
                }
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum SectionIcon {
    Reasoning,
    Hierarchy,
    Details,
    Description,
    Prerequisites,
    Topics,
}

#[component]
fn DetailSection(icon_kind: SectionIcon, heading: String, children: Element) -> Element {
    let icon = match icon_kind {
        SectionIcon::Reasoning => rsx! { Icon { icon: MdPerson, style: "width: 20px; height: 20px;" } },
        SectionIcon::Hierarchy => rsx! { Icon { icon: MdAccountBalance, style: "width: 20px; height: 20px;" } },
        SectionIcon::Details => rsx! { Icon { icon: MdInfo, style: "width: 20px; height: 20px;" } },
        SectionIcon::Description => rsx! { Icon { icon: MdDescription, style: "width: 20px; height: 20px;" } },
        SectionIcon::Prerequisites => rsx! { Icon { icon: MdClass, style: "width: 20px; height: 20px;" } },
        SectionIcon::Topics => rsx! { Icon { icon: MdLabel, style: "width: 20px; height: 20px;" } },
    };
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                background-color: white;
                border-radius: 8px;
                padding: 12px 16px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
            ",
            div {
                style: "display: flex; align-items: center; gap: 8px; font-size: 18px; font-weight: 500; color: #3070b3;",
                {icon}
                "{heading}"
            }
            {children}
        }
    }
}

#[component]
fn PrerequisiteModules() -> Element {
    let state = use_context::<RecommenderState>();
    let pager = state.pager;
    let prerequisites = use_memo(move || pager.read().selection().prerequisites().clone());

    let body = match prerequisites() {
        Prerequisites::None => return rsx! {},
        Prerequisites::Loading => rsx! { LoadingIndicator { label: "Looking up prior modules..." } },
        Prerequisites::Loaded(modules) => rsx! {
            ul {
                style: "margin: 0; padding-left: 20px;",
                for module in modules {
                    PrerequisiteModuleItem { key: "{module.id}", module: module.clone() }
                }
            }
        },
    };
    rsx! {
        DetailSection { icon_kind: SectionIcon::Prerequisites, heading: "Recommended prior modules",
            {body}
        }
    }
}

#[component]
fn PrerequisiteModuleItem(module: ModuleRef) -> Element {
    rsx! {
        li {
            style: "display: flex; align-items: center; gap: 6px;",
            Icon { icon: MdBusiness, style: "width: 16px; height: 16px; color: rgba(0,0,0,0.5);" }
            "{module}"
        }
    }
}

#[component]
fn TopicList(topics: Vec<String>) -> Element {
    let state = use_context::<RecommenderState>();
    let criteria = state.criteria;

    rsx! {
        div {
            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 4px;",
            for topic in topics {
                {
                    // topics the student asked for stand out
                    let highlighted = criteria.read().topics_of_interest.contains_concept(&topic);
                    let background = if highlighted { "#3070b3" } else { "#eeeeee" };
                    let color = if highlighted { "white" } else { "rgba(0,0,0,0.8)" };
                    rsx! {
                        span {
                            key: "{topic}",
                            title: "{topic}",
                            style: "
                                background-color: {background};
                                color: {color};
                                border-radius: 9999px;
                                padding: 2px 10px;
                                font-size: 14px;
                            ",
                            "{abbreviate_topic(&topic)}"
                        }
                    }
                }
            }
        }
    }
}
