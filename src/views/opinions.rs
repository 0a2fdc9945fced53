use crate::views::shared::{
    Toast, ToastLevel, format_date, markdown_to_html, push_toast, timestamp_id, unix_now,
};
use crate::webhook;
use dioxus::events::FormEvent;
use dioxus::prelude::*;
use once_cell::sync::Lazy;
use std::sync::Mutex;

const CATEGORIES: &[&str] = &["Civil", "Corporate", "Labor", "Tax", "Criminal"];

#[derive(Clone, Debug, PartialEq)]
pub struct Opinion {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub created_at: i64,
}

/// Module-level mock database. Shared between the view's list and the search
/// dialog; there is no isolation beyond the mutex.
static OPINION_DB: Lazy<Mutex<Vec<Opinion>>> = Lazy::new(|| Mutex::new(Vec::new()));

fn db_insert(opinion: Opinion) {
    if let Ok(mut db) = OPINION_DB.lock() {
        db.insert(0, opinion);
    }
}

fn db_remove(id: &str) {
    if let Ok(mut db) = OPINION_DB.lock() {
        db.retain(|opinion| opinion.id != id);
    }
}

fn db_snapshot() -> Vec<Opinion> {
    OPINION_DB
        .lock()
        .map(|db| db.clone())
        .unwrap_or_default()
}

/// A request may only go out with a non-blank title and instructions.
fn can_generate(title: &str, instructions: &str) -> bool {
    !title.trim().is_empty() && !instructions.trim().is_empty()
}

/// Search used by the dialog: reads the shared array directly.
pub fn search_opinions(query: &str) -> Vec<Opinion> {
    filter_opinions(&db_snapshot(), query)
}

fn filter_opinions(opinions: &[Opinion], query: &str) -> Vec<Opinion> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return opinions.to_vec();
    }
    opinions
        .iter()
        .filter(|opinion| {
            opinion.title.to_lowercase().contains(&needle)
                || opinion
                    .category
                    .as_ref()
                    .is_some_and(|category| category.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[component]
pub fn OpinionsView(toasts: Signal<Vec<Toast>>) -> Element {
    let opinions = use_signal(db_snapshot);
    let mut title = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut instructions = use_signal(String::new);
    let generating = use_signal(|| false);
    let mut selected_id = use_signal(|| Option::<String>::None);
    let mut show_search = use_signal(|| false);
    let mut search_query = use_signal(String::new);

    let mut generate = {
        let mut opinions = opinions;
        let mut generating_signal = generating;
        let mut title_signal = title;
        let mut instructions_signal = instructions;
        let category = category;
        move |_| {
            let opinion_title = title_signal();
            let opinion_instructions = instructions_signal();
            if !can_generate(&opinion_title, &opinion_instructions) {
                push_toast(
                    toasts,
                    ToastLevel::Error,
                    "Title and instructions are required.",
                );
                return;
            }
            if generating_signal() {
                return;
            }

            let opinion_title = opinion_title.trim().to_string();
            let opinion_instructions = opinion_instructions.trim().to_string();
            let opinion_category = {
                let raw = category();
                if raw.is_empty() { None } else { Some(raw) }
            };

            generating_signal.set(true);
            spawn(async move {
                let result = webhook::generate_opinion(
                    &opinion_title,
                    opinion_category.as_deref(),
                    &opinion_instructions,
                )
                .await;
                match result {
                    Ok(content) => {
                        let opinion = Opinion {
                            id: timestamp_id("op"),
                            title: opinion_title,
                            content,
                            category: opinion_category,
                            created_at: unix_now(),
                        };
                        db_insert(opinion.clone());
                        opinions.with_mut(|list| list.insert(0, opinion));
                        title_signal.set(String::new());
                        instructions_signal.set(String::new());
                        push_toast(toasts, ToastLevel::Success, "Opinion generated.");
                    }
                    Err(err) => {
                        tracing::error!(%err, "opinion generation failed");
                        push_toast(toasts, ToastLevel::Error, err.user_message());
                    }
                }
                generating_signal.set(false);
            });
        }
    };

    let opinions_snapshot = opinions();
    let selected_opinion = selected_id()
        .as_ref()
        .and_then(|id| opinions_snapshot.iter().find(|opinion| &opinion.id == id))
        .cloned();

    rsx! {
        div { class: "main-container",
            div { class: "panel",
                h3 { class: "section-title", "Request a legal opinion" }
                div { class: "form-grid",
                    input {
                        r#type: "text",
                        placeholder: "Title",
                        value: "{title}",
                        oninput: move |ev| title.set(ev.value()),
                        disabled: generating(),
                    }
                    select {
                        value: "{category}",
                        onchange: move |evt: FormEvent| category.set(evt.value()),
                        option { value: "", "No category" }
                        for option_label in CATEGORIES.iter() {
                            option { value: "{option_label}", "{option_label}" }
                        }
                    }
                    textarea {
                        rows: "4",
                        placeholder: "Instructions for the opinion…",
                        value: "{instructions}",
                        oninput: move |ev| instructions.set(ev.value()),
                        disabled: generating(),
                    }
                    div { class: "hstack", style: "gap: 0.5rem;",
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: generating(),
                            onclick: move |evt| generate(evt),
                            if generating() { "Generating…" } else { "Generate opinion" }
                        }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| {
                                search_query.set(String::new());
                                show_search.set(true);
                            },
                            "Search"
                        }
                    }
                    if generating() {
                        div { class: "shimmer-line",
                            span { class: "shimmer-text", "Waiting for the opinion service…" }
                        }
                    }
                }
            }

            if opinions_snapshot.is_empty() {
                p { class: "text-muted", "No opinions yet. Generated opinions appear here, newest first." }
            } else {
                div { class: "card-list",
                    for opinion in opinions_snapshot.iter() {
                        div { key: "{opinion.id}", class: "card",
                            div {
                                class: "card-body clickable",
                                role: "button",
                                tabindex: "0",
                                onclick: {
                                    let id = opinion.id.clone();
                                    move |_| selected_id.set(Some(id.clone()))
                                },
                                span { class: "card-title", "{opinion.title}" }
                                if let Some(category) = opinion.category.as_ref() {
                                    span { class: "tag-pill tag-pill-compact", "{category}" }
                                }
                                span { class: "card-subtitle", "{format_date(opinion.created_at)}" }
                            }
                            div { class: "card-actions",
                                button {
                                    class: "action-btn danger",
                                    r#type: "button",
                                    onclick: {
                                        let mut opinions = opinions;
                                        let id = opinion.id.clone();
                                        move |_| {
                                            let id = id.clone();
                                            db_remove(&id);
                                            opinions.with_mut(|list| list.retain(|candidate| candidate.id != id));
                                            if selected_id() == Some(id) {
                                                selected_id.set(None);
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

            if show_search() {
                SearchDialog {
                    query: search_query,
                    on_close: move |_| show_search.set(false),
                    on_pick: move |id: String| {
                        selected_id.set(Some(id));
                        show_search.set(false);
                    },
                }
            }

            if let Some(opinion) = selected_opinion {
                div { class: "doc-overlay", role: "dialog", aria_modal: "true",
                    onclick: move |_| selected_id.set(None),
                    div {
                        class: "doc-overlay-panel",
                        onclick: move |evt| evt.stop_propagation(),
                        header { class: "doc-overlay-header",
                            h2 { class: "doc-viewer-title", "{opinion.title}" }
                            button {
                                class: "doc-overlay-close btn-ghost",
                                r#type: "button",
                                onclick: move |_| selected_id.set(None),
                                aria_label: "Close opinion",
                                dangerous_inner_html: "&times;"
                            }
                        }
                        if let Some(category) = opinion.category.as_ref() {
                            div { class: "doc-overlay-tags",
                                span { class: "tag-pill tag-pill-compact", "{category}" }
                            }
                        }
                        p { class: "doc-viewer-date", "Created {format_date(opinion.created_at)}" }
                        div { class: "doc-viewer-content md", dangerous_inner_html: "{markdown_to_html(&opinion.content)}" }
                    }
                }
            }
        }
    }
}

#[component]
fn SearchDialog(
    query: Signal<String>,
    on_close: EventHandler<()>,
    on_pick: EventHandler<String>,
) -> Element {
    let mut query = query;
    let results = search_opinions(&query());

    rsx! {
        div { class: "doc-overlay", role: "dialog", aria_modal: "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "doc-overlay-panel search-panel",
                onclick: move |evt| evt.stop_propagation(),
                header { class: "doc-overlay-header",
                    h2 { class: "doc-viewer-title", "Search opinions" }
                    button {
                        class: "doc-overlay-close btn-ghost",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        aria_label: "Close search",
                        dangerous_inner_html: "&times;"
                    }
                }
                input {
                    r#type: "search",
                    placeholder: "Search by title or category…",
                    value: "{query}",
                    oninput: move |ev| query.set(ev.value()),
                    autofocus: true,
                }
                if results.is_empty() {
                    p { class: "text-muted", "No opinions match." }
                } else {
                    ul { class: "search-results",
                        for opinion in results.iter() {
                            li {
                                key: "{opinion.id}",
                                class: "search-result",
                                role: "button",
                                tabindex: "0",
                                onclick: {
                                    let id = opinion.id.clone();
                                    move |_| on_pick.call(id.clone())
                                },
                                span { class: "card-title", "{opinion.title}" }
                                if let Some(category) = opinion.category.as_ref() {
                                    span { class: "tag-pill tag-pill-compact", "{category}" }
                                }
                                span { class: "card-subtitle", "{format_date(opinion.created_at)}" }
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

    fn opinion(id: &str, title: &str, category: Option<&str>) -> Opinion {
        Opinion {
            id: id.to_string(),
            title: title.to_string(),
            content: "body".to_string(),
            category: category.map(str::to_string),
            created_at: 0,
        }
    }

    #[test]
    fn generation_requires_title_and_instructions() {
        assert!(can_generate("Lease termination", "Cover notice periods."));
        assert!(!can_generate("", "Cover notice periods."));
        assert!(!can_generate("Lease termination", ""));
        assert!(!can_generate("   ", "Cover notice periods."));
        assert!(!can_generate("Lease termination", " \n\t"));
        assert!(!can_generate("", ""));
    }

    #[test]
    fn filter_matches_title_substring() {
        let opinions = vec![
            opinion("1", "Lease termination", Some("Civil")),
            opinion("2", "Stock options plan", Some("Corporate")),
        ];
        let matches = filter_opinions(&opinions, "lease");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "1");
    }

    #[test]
    fn filter_matches_category_substring() {
        let opinions = vec![
            opinion("1", "Lease termination", Some("Civil")),
            opinion("2", "Stock options plan", Some("Corporate")),
            opinion("3", "Untitled", None),
        ];
        let matches = filter_opinions(&opinions, "corp");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "2");
    }

    #[test]
    fn blank_query_returns_everything() {
        let opinions = vec![opinion("1", "A", None), opinion("2", "B", None)];
        assert_eq!(filter_opinions(&opinions, "  ").len(), 2);
    }

    #[test]
    fn shared_array_insert_and_remove() {
        let id = "test-shared-array-op";
        db_insert(opinion(id, "Shared array check", None));
        assert!(search_opinions("shared array check")
            .iter()
            .any(|candidate| candidate.id == id));

        db_remove(id);
        assert!(!search_opinions("shared array check")
            .iter()
            .any(|candidate| candidate.id == id));
    }
}
