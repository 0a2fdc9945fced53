use crate::views::shared::{Toast, ToastLevel, push_toast, timestamp_id};
use dioxus::events::FormEvent;
use dioxus::prelude::*;

const MODELS: &[&str] = &["nimbus-lite", "nimbus-pro", "nimbus-ultra"];

/// A configured assistant persona. Purely in-memory: the roster is lost on
/// reload.
#[derive(Clone, Debug, PartialEq)]
pub struct Bot {
    pub id: String,
    pub name: String,
    pub prompt: String,
    pub model: String,
}

fn filter_bots(bots: &[Bot], query: &str) -> Vec<Bot> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return bots.to_vec();
    }
    bots.iter()
        .filter(|bot| bot.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[component]
pub fn BotsView(toasts: Signal<Vec<Toast>>) -> Element {
    let bots = use_signal(Vec::<Bot>::new);
    let mut name = use_signal(String::new);
    let mut prompt = use_signal(String::new);
    let mut model = use_signal(|| MODELS[0].to_string());
    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut filter = use_signal(String::new);

    let mut submit = {
        let mut bots = bots;
        let mut name_signal = name;
        let mut prompt_signal = prompt;
        let mut model_signal = model;
        let mut editing_signal = editing_id;
        move |_| {
            let bot_name = name_signal();
            let bot_prompt = prompt_signal();
            if bot_name.trim().is_empty() || bot_prompt.trim().is_empty() {
                push_toast(toasts, ToastLevel::Error, "Name and prompt are required.");
                return;
            }

            match editing_signal() {
                Some(id) => {
                    bots.with_mut(|list| {
                        if let Some(bot) = list.iter_mut().find(|bot| bot.id == id) {
                            bot.name = bot_name.trim().to_string();
                            bot.prompt = bot_prompt.trim().to_string();
                            bot.model = model_signal();
                        }
                    });
                    push_toast(toasts, ToastLevel::Success, "Bot updated.");
                }
                None => {
                    bots.with_mut(|list| {
                        list.insert(
                            0,
                            Bot {
                                id: timestamp_id("bot"),
                                name: bot_name.trim().to_string(),
                                prompt: bot_prompt.trim().to_string(),
                                model: model_signal(),
                            },
                        );
                    });
                    push_toast(toasts, ToastLevel::Success, "Bot created.");
                }
            }

            editing_signal.set(None);
            name_signal.set(String::new());
            prompt_signal.set(String::new());
            model_signal.set(MODELS[0].to_string());
        }
    };

    let display_bots = filter_bots(&bots(), &filter());
    let editing = editing_id();

    rsx! {
        div { class: "main-container",
            div { class: "panel",
                h3 { class: "section-title",
                    if editing.is_some() { "Edit bot" } else { "Create a bot" }
                }
                div { class: "form-grid",
                    input {
                        r#type: "text",
                        placeholder: "Name",
                        value: "{name}",
                        oninput: move |ev| name.set(ev.value()),
                    }
                    textarea {
                        rows: "3",
                        placeholder: "System prompt…",
                        value: "{prompt}",
                        oninput: move |ev| prompt.set(ev.value()),
                    }
                    div { class: "hstack", style: "gap: 0.5rem;",
                        select {
                            value: "{model}",
                            onchange: move |evt: FormEvent| model.set(evt.value()),
                            for option_label in MODELS.iter() {
                                option { value: "{option_label}", "{option_label}" }
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |evt| submit(evt),
                            if editing.is_some() { "Save changes" } else { "Create bot" }
                        }
                        if editing.is_some() {
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                onclick: move |_| {
                                    editing_id.set(None);
                                    name.set(String::new());
                                    prompt.set(String::new());
                                },
                                "Cancel"
                            }
                        }
                    }
                }
            }

            if bots().is_empty() {
                p { class: "text-muted", "No bots yet. Bots live in memory only and reset on relaunch." }
            } else {
                div { class: "gallery-controls",
                    input {
                        r#type: "search",
                        placeholder: "Filter by name…",
                        value: "{filter}",
                        oninput: move |ev| filter.set(ev.value()),
                    }
                }
                if display_bots.is_empty() {
                    p { class: "text-muted", "No bots match the filter." }
                } else {
                    div { class: "card-list",
                        for bot in display_bots.iter() {
                            div { key: "{bot.id}", class: "card",
                                div { class: "card-body",
                                    span { class: "card-title", "{bot.name}" }
                                    span { class: "card-subtitle", "{bot.model}" }
                                    p { class: "card-text", "{bot.prompt}" }
                                }
                                div { class: "card-actions",
                                    button {
                                        class: "action-btn",
                                        r#type: "button",
                                        onclick: {
                                            let bot = bot.clone();
                                            move |_| {
                                                editing_id.set(Some(bot.id.clone()));
                                                name.set(bot.name.clone());
                                                prompt.set(bot.prompt.clone());
                                                model.set(bot.model.clone());
                                            }
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "action-btn danger",
                                        r#type: "button",
                                        onclick: {
                                            let mut bots = bots;
                                            let id = bot.id.clone();
                                            move |_| {
                                                let id = id.clone();
                                                bots.with_mut(|list| list.retain(|candidate| candidate.id != id));
                                                if editing_id() == Some(id) {
                                                    editing_id.set(None);
                                                }
                                            }
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot(id: &str, name: &str) -> Bot {
        Bot {
            id: id.to_string(),
            name: name.to_string(),
            prompt: "You are helpful.".to_string(),
            model: MODELS[0].to_string(),
        }
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let bots = vec![bot("1", "Research Helper"), bot("2", "Code Reviewer")];
        let matches = filter_bots(&bots, "helper");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "1");
    }

    #[test]
    fn blank_filter_keeps_all() {
        let bots = vec![bot("1", "A"), bot("2", "B")];
        assert_eq!(filter_bots(&bots, "").len(), 2);
    }
}
