use crate::views::shared::{format_time, timestamp_id, unix_now};
use dioxus::events::FormEvent;
use dioxus::prelude::*;
use std::time::Duration;

/// Stand-in latency for the real image generation API this screen mocks.
const SIMULATED_RENDER_DELAY: Duration = Duration::from_millis(1200);

const STYLES: &[&str] = &["Photorealistic", "Illustration", "Pixel art", "Watercolor"];
const SIZES: &[&str] = &["512x512", "768x768", "1024x1024"];

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedImage {
    pub id: String,
    pub prompt: String,
    pub style: String,
    pub size: String,
    pub hue: u16,
    pub created_at: i64,
}

/// Deterministic hue for the placeholder tile, so the same prompt always
/// renders the same swatch.
fn prompt_hue(prompt: &str) -> u16 {
    let mut hash: u32 = 2166136261;
    for byte in prompt.trim().to_lowercase().bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(16777619);
    }
    (hash % 360) as u16
}

fn filter_images(images: &[GeneratedImage], query: &str) -> Vec<GeneratedImage> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return images.to_vec();
    }
    images
        .iter()
        .filter(|image| image.prompt.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[component]
pub fn ImagesView() -> Element {
    let images = use_signal(Vec::<GeneratedImage>::new);
    let mut prompt = use_signal(String::new);
    let mut style = use_signal(|| STYLES[0].to_string());
    let mut size = use_signal(|| SIZES[0].to_string());
    let mut filter = use_signal(String::new);
    let generating = use_signal(|| false);

    let mut generate = {
        let mut images = images;
        let mut generating_signal = generating;
        let prompt_signal = prompt;
        let style = style;
        let size = size;
        move |_| {
            let text = prompt_signal();
            let trimmed = text.trim();
            if trimmed.is_empty() || generating_signal() {
                return;
            }
            let record = GeneratedImage {
                id: timestamp_id("img"),
                prompt: trimmed.to_string(),
                style: style(),
                size: size(),
                hue: prompt_hue(trimmed),
                created_at: unix_now(),
            };
            generating_signal.set(true);
            spawn(async move {
                tokio::time::sleep(SIMULATED_RENDER_DELAY).await;
                images.with_mut(|list| list.insert(0, record));
                generating_signal.set(false);
            });
        }
    };

    let display_images = filter_images(&images(), &filter());

    rsx! {
        div { class: "main-container",
            div { class: "panel",
                h3 { class: "section-title", "Generate an image" }
                div { class: "form-grid",
                    textarea {
                        rows: "2",
                        placeholder: "Describe the image you want…",
                        value: "{prompt}",
                        oninput: move |ev| prompt.set(ev.value()),
                        disabled: generating(),
                    }
                    div { class: "hstack", style: "gap: 0.5rem;",
                        select {
                            value: "{style}",
                            onchange: move |evt: FormEvent| style.set(evt.value()),
                            for option_label in STYLES.iter() {
                                option { value: "{option_label}", "{option_label}" }
                            }
                        }
                        select {
                            value: "{size}",
                            onchange: move |evt: FormEvent| size.set(evt.value()),
                            for option_label in SIZES.iter() {
                                option { value: "{option_label}", "{option_label}" }
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: generating() || prompt().trim().is_empty(),
                            onclick: move |evt| generate(evt),
                            if generating() { "Rendering…" } else { "Generate" }
                        }
                    }
                }
            }

            if images().is_empty() && !generating() {
                p { class: "text-muted", "No images yet. Describe one above to fill the gallery." }
            } else {
                div { class: "gallery-controls",
                    input {
                        r#type: "search",
                        placeholder: "Filter by prompt…",
                        value: "{filter}",
                        oninput: move |ev| filter.set(ev.value()),
                    }
                }
                div { class: "gallery-grid",
                    if generating() {
                        div { class: "gallery-tile placeholder shimmer-line",
                            span { class: "shimmer-text", "Rendering…" }
                        }
                    }
                    for image in display_images.iter() {
                        GalleryTile { image: image.clone(), images }
                    }
                }
                if display_images.is_empty() && !generating() {
                    p { class: "text-muted", "No images match the filter." }
                }
            }
        }
    }
}

#[component]
fn GalleryTile(image: GeneratedImage, images: Signal<Vec<GeneratedImage>>) -> Element {
    let tile_style = format!(
        "background: linear-gradient(135deg, hsl({hue}, 65%, 42%), hsl({next}, 65%, 22%));",
        hue = image.hue,
        next = (image.hue + 40) % 360,
    );
    let delete_id = image.id.clone();
    rsx! {
        div { key: "{image.id}", class: "gallery-tile", style: "{tile_style}",
            div { class: "gallery-tile-meta",
                span { class: "gallery-tile-prompt", "{image.prompt}" }
                span { class: "gallery-tile-detail", "{image.style} · {image.size} · {format_time(image.created_at)}" }
            }
            button {
                class: "btn-ghost gallery-tile-delete",
                r#type: "button",
                aria_label: "Delete image",
                onclick: move |_| {
                    let id = delete_id.clone();
                    images.with_mut(|list| list.retain(|candidate| candidate.id != id));
                },
                dangerous_inner_html: "&times;"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str, prompt: &str) -> GeneratedImage {
        GeneratedImage {
            id: id.to_string(),
            prompt: prompt.to_string(),
            style: STYLES[0].to_string(),
            size: SIZES[0].to_string(),
            hue: prompt_hue(prompt),
            created_at: 0,
        }
    }

    #[test]
    fn hue_is_stable_and_bounded() {
        assert_eq!(prompt_hue("a red fox"), prompt_hue("A red fox "));
        for prompt in ["a", "forest at dusk", "neon skyline"] {
            assert!(prompt_hue(prompt) < 360);
        }
    }

    #[test]
    fn filter_matches_prompt_substring() {
        let images = vec![image("1", "Red fox in snow"), image("2", "City at night")];
        let matches = filter_images(&images, "fox");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "1");
    }

    #[test]
    fn empty_filter_returns_everything() {
        let images = vec![image("1", "one"), image("2", "two")];
        assert_eq!(filter_images(&images, "  ").len(), 2);
    }
}
