use crate::types::{AttachmentMeta, ChatMessage, Role};
use crate::views::shared::markdown_to_html;
use dioxus::events::Key;
use dioxus::prelude::*;
use std::time::Duration;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

/// Stand-in latency for the real completion API this screen mocks.
const SIMULATED_REPLY_DELAY: Duration = Duration::from_millis(750);

const MODELS: &[&str] = &["nimbus-lite", "nimbus-pro", "nimbus-ultra"];

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

fn current_time() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

/// Deterministic mock reply standing in for a completion API response.
fn fabricate_reply(prompt: &str, model: &str) -> String {
    let topic: String = prompt
        .split_whitespace()
        .take(8)
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "Here is a quick take on **{topic}**:\n\n\
         1. I looked at the request and broke it into the key points.\n\
         2. Each point can be expanded on demand; just ask for more detail.\n\
         3. Nothing here left your device: this response was composed locally.\n\n\
         _Simulated response from `{model}`._"
    )
}

fn mime_from_name(name: &str) -> String {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "json" => "application/json",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        _ => "application/octet-stream",
    }
    .to_string()
}

fn format_size(size_bytes: u64) -> String {
    if size_bytes >= 1_048_576 {
        format!("{:.1} MB", size_bytes as f64 / 1_048_576.0)
    } else if size_bytes >= 1024 {
        format!("{:.1} KB", size_bytes as f64 / 1024.0)
    } else {
        format!("{size_bytes} B")
    }
}

#[component]
pub fn ChatView(base_font_px: Signal<i32>) -> Element {
    let messages = use_signal(Vec::<ChatMessage>::new);
    let mut input = use_signal(String::new);
    let sending = use_signal(|| false);
    let mut selected_model = use_signal(|| MODELS[0].to_string());
    let pending_attachment = use_signal(|| Option::<AttachmentMeta>::None);

    let mut send_message = {
        let mut messages = messages;
        let mut sending_signal = sending;
        let mut input_signal = input;
        let mut attachment_signal = pending_attachment;
        let selected_model = selected_model;
        move |text: String| {
            let trimmed = text.trim();
            if trimmed.is_empty() || sending_signal() {
                return;
            }

            let model = selected_model();
            let attachment = attachment_signal();
            messages.with_mut(|msgs| {
                msgs.push(ChatMessage {
                    role: Role::User,
                    content: trimmed.to_string(),
                    model: None,
                    attachment,
                    created_at: Some(current_time()),
                });
            });
            input_signal.set(String::new());
            attachment_signal.set(None);
            sending_signal.set(true);

            let prompt = trimmed.to_string();
            spawn(async move {
                tokio::time::sleep(SIMULATED_REPLY_DELAY).await;
                let reply = fabricate_reply(&prompt, &model);
                messages.with_mut(|msgs| {
                    msgs.push(ChatMessage {
                        role: Role::Assistant,
                        content: reply,
                        model: Some(model.clone()),
                        attachment: None,
                        created_at: Some(current_time()),
                    });
                });
                sending_signal.set(false);
            });
        }
    };

    let messages_snapshot = messages();

    rsx! {
        div { class: "main-container",
            div { class: "chat-wrap",
                div { id: "chat-list", class: "chat-list",
                    for msg in messages_snapshot.iter() {
                        div { class: format_args!("message-row {}", match msg.role { Role::User => "user", Role::Assistant => "assistant" }),
                            if matches!(msg.role, Role::Assistant) { div { class: "avatar assistant", "N" } }
                            div { class: "message-stack",
                                div { class: format_args!(
                                        "bubble {}",
                                        match msg.role { Role::User => "user", Role::Assistant => "assistant" },
                                    ),
                                    if matches!(msg.role, Role::Assistant) {
                                        AssistantBubble { content: msg.content.clone() }
                                    } else { "{msg.content}" }
                                }
                                if let Some(attachment) = msg.attachment.as_ref() {
                                    div { class: "attachment-chip",
                                        span { class: "attachment-name", "{attachment.name}" }
                                        span { class: "attachment-detail",
                                            "{attachment.mime_type} · {format_size(attachment.size_bytes)}"
                                        }
                                    }
                                }
                                if let Some(ts) = format_message_timestamp(msg.created_at) {
                                    div { class: format_args!(
                                            "message-meta {}",
                                            match msg.role { Role::User => "align-end", Role::Assistant => "align-start" }
                                        ),
                                        span { class: "message-timestamp", "{ts}" }
                                        if let Some(model) = msg.model.as_ref() {
                                            span { class: "message-model", "{model}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    if sending() {
                        div { class: "message-row assistant",
                            div { class: "avatar assistant", "N" }
                            div { class: "message-stack",
                                div { class: "shimmer-line",
                                    span { class: "shimmer-text", "Thinking…" }
                                }
                            }
                        }
                    }
                }
            }

            form { class: "composer no-divider",
                div { class: "composer-inner",
                    if let Some(attachment) = pending_attachment() {
                        div { class: "attachment-chip pending",
                            span { class: "attachment-name", "{attachment.name}" }
                            span { class: "attachment-detail",
                                "{attachment.mime_type} · {format_size(attachment.size_bytes)}"
                            }
                            button {
                                class: "btn-ghost attachment-clear",
                                r#type: "button",
                                onclick: {
                                    let mut pending_attachment = pending_attachment;
                                    move |_| pending_attachment.set(None)
                                },
                                dangerous_inner_html: "&times;"
                            }
                        }
                    }
                    div { class: "hstack", style: "gap: 0.5rem; width: 100%; align-items: flex-end;",
                        label { class: "btn btn-ghost attachment-button", r#for: "chat-attachment", title: "Attach a file", "+" }
                        input {
                            id: "chat-attachment",
                            class: "attachment-input",
                            r#type: "file",
                            onchange: {
                                let mut pending_attachment = pending_attachment;
                                move |evt: FormEvent| {
                                    if let Some(file_engine) = evt.files() {
                                        if let Some(name) = file_engine.files().into_iter().next() {
                                            spawn(async move {
                                                let size = file_engine.file_size(&name).await.unwrap_or(0);
                                                pending_attachment.set(Some(AttachmentMeta {
                                                    mime_type: mime_from_name(&name),
                                                    name,
                                                    size_bytes: size,
                                                }));
                                            });
                                        }
                                    }
                                }
                            },
                        }
                        textarea {
                            class: "", rows: "1", placeholder: "What can I help you with?",
                            value: "{input}", oninput: move |ev| input.set(ev.value()),
                            onkeydown: move |ev| {
                                if ev.modifiers().meta() || ev.modifiers().ctrl() {
                                    if ev.key() == Key::Character("+".into()) || ev.key() == Key::Character("=".into()) {
                                        ev.prevent_default();
                                        base_font_px.set((base_font_px() + 1).clamp(12, 22));
                                        return;
                                    }
                                    if ev.key() == Key::Character("-".into()) {
                                        ev.prevent_default();
                                        base_font_px.set((base_font_px() - 1).clamp(12, 22));
                                        return;
                                    }
                                }
                                if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                    ev.prevent_default();
                                    let text = input();
                                    send_message(text);
                                }
                            },
                            disabled: sending(), autofocus: true,
                        }
                        select {
                            class: "model-select",
                            value: "{selected_model}",
                            onchange: move |evt| selected_model.set(evt.value()),
                            for model in MODELS.iter() {
                                option { value: "{model}", "{model}" }
                            }
                        }
                        button {
                            class: "btn btn-primary", r#type: "button",
                            disabled: sending() || input().trim().is_empty(),
                            onclick: move |_| {
                                let text = input();
                                send_message(text);
                            },
                            "Send"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AssistantBubble(content: String) -> Element {
    let content_html = markdown_to_html(&content);
    let copy_payload = content.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut cb) = arboard::Clipboard::new() {
                    let _ = cb.set_text(raw);
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            let _ = raw;
        });
    };

    rsx! {
        div { class: "bubble-controls",
            div { class: "actions",
                button { class: "action-btn", title: "Copy markdown", onclick: on_copy, "Copy" }
            }
        }
        div { class: "md", dangerous_inner_html: "{content_html}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fabricated_reply_mentions_model() {
        let reply = fabricate_reply("summarize this contract", "nimbus-pro");
        assert!(!reply.is_empty());
        assert!(reply.contains("nimbus-pro"));
        assert!(reply.contains("summarize this contract"));
    }

    #[test]
    fn mime_inference_by_extension() {
        assert_eq!(mime_from_name("report.PDF"), "application/pdf");
        assert_eq!(mime_from_name("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_from_name("noext"), "application/octet-stream");
    }

    #[test]
    fn sizes_format_with_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1_048_576), "3.0 MB");
    }
}
