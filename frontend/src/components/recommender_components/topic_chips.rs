//! Topic label input plus the chips of the concepts each label maps to.

use common::topic_mapping::{TopicKind, abbreviate_topic};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdLabel, md_content_icons::MdAdd, md_navigation_icons::MdClose}};

use crate::data_definitions::recommender_state::RecommenderState;

#[component]
pub fn TopicChips(kind: TopicKind) -> Element {
    let state = use_context::<RecommenderState>();
    let criteria = state.criteria;
    let mut draft = use_signal(String::new);

    let chip_color = match kind {
        TopicKind::Interest => "#e0ecf8",
        TopicKind::Excluded => "#fbe3e3",
    };
    let mut add_draft = move || {
        let label = draft.read().clone();
        draft.set(String::new());
        state.add_topic(kind, label);
    };
    let chips = use_memo(move || {
        criteria
            .read()
            .topics(kind)
            .iter()
            .flat_map(|(label, concepts)| concepts.iter().map(move |concept| (label.clone(), concept.clone())))
            .collect::<Vec<_>>()
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            label {
                style: "display: flex; align-items: center; gap: 6px; font-weight: 500;",
                Icon { icon: MdLabel, style: "width: 18px; height: 18px;" }
                "{kind.input_label()}"
            }
            div {
                style: "display: flex; flex-direction: row; gap: 6px;",
                input {
                    r#type: "text",
                    placeholder: "Type a topic and press Enter",
                    style: "
                        flex: 1;
                        border: 1px solid rgba(101, 101, 101, 0.8);
                        border-radius: 8px;
                        padding: 4px 10px;
                    ",
                    value: "{draft}",
                    oninput: move |event: Event<FormData>| draft.set(event.value()),
                    onkeydown: move |event: Event<KeyboardData>| {
                        if event.key() == Key::Enter {
                            add_draft();
                        }
                    },
                }
                button {
                    title: "Add topic",
                    style: "border: none; background: none; cursor: pointer;",
                    onclick: move |_| add_draft(),
                    Icon { icon: MdAdd, style: "width: 20px; height: 20px;" }
                }
            }
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 4px;",
                for (label, concept) in chips() {
                    div {
                        key: "{label}/{concept}",
                        title: "{concept} (from \"{label}\")",
                        style: "
                            display: flex;
                            align-items: center;
                            gap: 2px;
                            background-color: {chip_color};
                            border-radius: 9999px;
                            padding: 2px 4px 2px 10px;
                            font-size: 14px;
                        ",
                        "{abbreviate_topic(&concept)}"
                        button {
                            style: "border: none; background: none; cursor: pointer; padding: 0;",
                            onclick: {
                                let label = label.clone();
                                let concept = concept.clone();
                                move |_| state.remove_topic_mapping(kind, label.clone(), concept.clone())
                            },
                            Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
                        }
                    }
                }
            }
        }
    }
}
