use crate::storage::{
    AUDIO_HISTORY_KEY, TRANSCRIPTION_HISTORY_KEY, load_history, push_capped, save_history,
};
use crate::views::shared::{format_time, timestamp_id, unix_now};
use dioxus::events::FormEvent;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Stand-in latency for the real speech APIs this screen mocks.
const SIMULATED_AUDIO_DELAY: Duration = Duration::from_millis(900);

const VOICES: &[&str] = &["Aria", "Orion", "Luna"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionRecord {
    pub id: String,
    pub file_name: String,
    pub text: String,
    pub created_at: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioRecord {
    pub id: String,
    pub text: String,
    pub voice: String,
    pub created_at: i64,
}

/// Deterministic mock transcript standing in for a speech-to-text response.
fn fabricate_transcript(file_name: &str) -> String {
    format!(
        "Transcript of {file_name}: Thanks everyone for joining. We reviewed the open items, \
         agreed on next steps, and will follow up over email with the owners and dates."
    )
}

fn persist<T: Serialize>(key: &str, entries: &[T]) {
    if let Err(err) = save_history(key, entries) {
        tracing::warn!(key, %err, "failed to persist history");
    }
}

#[component]
pub fn AudioView() -> Element {
    let transcriptions =
        use_signal(|| load_history::<TranscriptionRecord>(TRANSCRIPTION_HISTORY_KEY));
    let generated = use_signal(|| load_history::<AudioRecord>(AUDIO_HISTORY_KEY));

    rsx! {
        div { class: "main-container audio-columns",
            TranscriptionPanel { transcriptions }
            SpeechPanel { generated }
        }
    }
}

#[component]
fn TranscriptionPanel(transcriptions: Signal<Vec<TranscriptionRecord>>) -> Element {
    let picked_file = use_signal(|| Option::<String>::None);
    let working = use_signal(|| false);

    let mut transcribe = {
        let mut transcriptions = transcriptions;
        let mut working_signal = working;
        let mut picked_signal = picked_file;
        move |_| {
            let Some(file_name) = picked_signal() else {
                return;
            };
            if working_signal() {
                return;
            }
            working_signal.set(true);
            spawn(async move {
                tokio::time::sleep(SIMULATED_AUDIO_DELAY).await;
                let record = TranscriptionRecord {
                    id: timestamp_id("tr"),
                    text: fabricate_transcript(&file_name),
                    file_name,
                    created_at: unix_now(),
                };
                transcriptions.with_mut(|list| push_capped(list, record));
                persist(TRANSCRIPTION_HISTORY_KEY, &transcriptions());
                picked_signal.set(None);
                working_signal.set(false);
            });
        }
    };

    rsx! {
        div { class: "panel",
            h3 { class: "section-title", "Transcription" }
            div { class: "form-grid",
                input {
                    r#type: "file",
                    accept: "audio/*",
                    onchange: {
                        let mut picked_file = picked_file;
                        move |evt: FormEvent| {
                            if let Some(file_engine) = evt.files() {
                                picked_file.set(file_engine.files().into_iter().next());
                            }
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: working() || picked_file().is_none(),
                    onclick: move |evt| transcribe(evt),
                    if working() { "Transcribing…" } else { "Transcribe" }
                }
            }
            HistoryList {
                title: "Recent transcriptions",
                empty_hint: "Transcripts you create are kept here, newest first.",
                entries: transcriptions()
                    .iter()
                    .map(|record| HistoryEntry {
                        id: record.id.clone(),
                        primary: record.file_name.clone(),
                        secondary: record.text.clone(),
                        created_at: record.created_at,
                    })
                    .collect::<Vec<_>>(),
                on_delete: {
                    let mut transcriptions = transcriptions;
                    move |id: String| {
                        transcriptions.with_mut(|list| list.retain(|record| record.id != id));
                        persist(TRANSCRIPTION_HISTORY_KEY, &transcriptions());
                    }
                },
            }
        }
    }
}

#[component]
fn SpeechPanel(generated: Signal<Vec<AudioRecord>>) -> Element {
    let mut text = use_signal(String::new);
    let mut voice = use_signal(|| VOICES[0].to_string());
    let working = use_signal(|| false);

    let mut generate = {
        let mut generated = generated;
        let mut working_signal = working;
        let mut text_signal = text;
        let voice = voice;
        move |_| {
            let content = text_signal();
            let trimmed = content.trim();
            if trimmed.is_empty() || working_signal() {
                return;
            }
            let record = AudioRecord {
                id: timestamp_id("au"),
                text: trimmed.to_string(),
                voice: voice(),
                created_at: unix_now(),
            };
            working_signal.set(true);
            spawn(async move {
                tokio::time::sleep(SIMULATED_AUDIO_DELAY).await;
                generated.with_mut(|list| push_capped(list, record));
                persist(AUDIO_HISTORY_KEY, &generated());
                text_signal.set(String::new());
                working_signal.set(false);
            });
        }
    };

    rsx! {
        div { class: "panel",
            h3 { class: "section-title", "Speech generation" }
            div { class: "form-grid",
                textarea {
                    rows: "3",
                    placeholder: "Text to read aloud…",
                    value: "{text}",
                    oninput: move |ev| text.set(ev.value()),
                    disabled: working(),
                }
                div { class: "hstack", style: "gap: 0.5rem;",
                    select {
                        value: "{voice}",
                        onchange: move |evt: FormEvent| voice.set(evt.value()),
                        for option_label in VOICES.iter() {
                            option { value: "{option_label}", "{option_label}" }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: working() || text().trim().is_empty(),
                        onclick: move |evt| generate(evt),
                        if working() { "Generating…" } else { "Generate audio" }
                    }
                }
            }
            HistoryList {
                title: "Generated audio",
                empty_hint: "Generated clips are kept here, newest first.",
                entries: generated()
                    .iter()
                    .map(|record| HistoryEntry {
                        id: record.id.clone(),
                        primary: format!("{} voice", record.voice),
                        secondary: record.text.clone(),
                        created_at: record.created_at,
                    })
                    .collect::<Vec<_>>(),
                on_delete: {
                    let mut generated = generated;
                    move |id: String| {
                        generated.with_mut(|list| list.retain(|record| record.id != id));
                        persist(AUDIO_HISTORY_KEY, &generated());
                    }
                },
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct HistoryEntry {
    id: String,
    primary: String,
    secondary: String,
    created_at: i64,
}

#[component]
fn HistoryList(
    title: &'static str,
    empty_hint: &'static str,
    entries: Vec<HistoryEntry>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "history-section",
            h4 { class: "history-title", "{title}" }
            if entries.is_empty() {
                p { class: "text-muted", "{empty_hint}" }
            } else {
                ul { class: "history-list",
                    for entry in entries.iter() {
                        li { key: "{entry.id}", class: "history-row",
                            div { class: "history-row-body",
                                span { class: "history-row-primary", "{entry.primary}" }
                                span { class: "history-row-secondary", "{entry.secondary}" }
                                span { class: "history-row-date", "{format_time(entry.created_at)}" }
                            }
                            button {
                                class: "btn-ghost history-row-delete",
                                r#type: "button",
                                aria_label: "Delete entry",
                                onclick: {
                                    let id = entry.id.clone();
                                    move |_| on_delete.call(id.clone())
                                },
                                dangerous_inner_html: "&times;"
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
    use crate::storage::HISTORY_CAP;

    #[test]
    fn fabricated_transcript_names_the_file() {
        let transcript = fabricate_transcript("standup.mp3");
        assert!(transcript.contains("standup.mp3"));
        assert!(!transcript.is_empty());
    }

    #[test]
    fn history_caps_at_ten_newest_first() {
        let mut list: Vec<TranscriptionRecord> = Vec::new();
        for i in 0..(HISTORY_CAP + 3) {
            push_capped(
                &mut list,
                TranscriptionRecord {
                    id: format!("tr-{i}"),
                    file_name: format!("file-{i}.mp3"),
                    text: String::new(),
                    created_at: i as i64,
                },
            );
        }
        assert_eq!(list.len(), HISTORY_CAP);
        assert_eq!(list[0].id, format!("tr-{}", HISTORY_CAP + 2));
    }

    #[test]
    fn delete_removes_exactly_one_id() {
        let mut list: Vec<AudioRecord> = (0..3)
            .map(|i| AudioRecord {
                id: format!("au-{i}"),
                text: String::new(),
                voice: VOICES[0].to_string(),
                created_at: i,
            })
            .collect();
        list.retain(|record| record.id != "au-1");
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|record| record.id != "au-1"));
    }
}
