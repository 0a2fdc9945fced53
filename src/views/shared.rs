use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use dioxus::prelude::*;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.footnotes = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.render.unsafe_ = true;
    options
});

pub fn markdown_to_html(md: &str) -> String {
    let adapter = SyntectAdapter::new(Some("base16-ocean.dark"));
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

// ============================================
// Identifiers & timestamps
// ============================================

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Timestamp-based identifier. The process-local sequence breaks ties when
/// two ids are minted within the same millisecond.
pub fn timestamp_id(prefix: &str) -> String {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let seq = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{millis}-{seq}")
}

pub fn unix_now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

const DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day padding:zero], [year]");

const TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

pub fn format_date(timestamp: i64) -> String {
    format_with(timestamp, DATE_FORMAT)
}

pub fn format_time(timestamp: i64) -> String {
    format_with(timestamp, TIME_FORMAT)
}

fn format_with(timestamp: i64, format: &[FormatItem<'static>]) -> String {
    let Ok(mut datetime) = OffsetDateTime::from_unix_timestamp(timestamp) else {
        return "Unknown date".to_string();
    };
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime
        .format(format)
        .unwrap_or_else(|_| "Unknown date".to_string())
}

// ============================================
// Pagination
// ============================================

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Slice out one page, clamping an out-of-range page to the last one.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page_size == 0 {
        return Vec::new();
    }
    let page = page.min(page_count(items.len(), page_size) - 1);
    items
        .iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

// ============================================
// Toasts
// ============================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub level: ToastLevel,
    pub message: String,
}

/// Queue a toast and schedule its dismissal.
pub fn push_toast(mut toasts: Signal<Vec<Toast>>, level: ToastLevel, message: impl Into<String>) {
    let toast = Toast {
        id: timestamp_id("toast"),
        level,
        message: message.into(),
    };
    let dismiss_id = toast.id.clone();
    toasts.with_mut(|list| list.push(toast));
    spawn(async move {
        tokio::time::sleep(TOAST_LIFETIME).await;
        toasts.with_mut(|list| list.retain(|t| t.id != dismiss_id));
    });
}

#[component]
pub fn ToastHost(toasts: Signal<Vec<Toast>>) -> Element {
    let snapshot = toasts();
    rsx! {
        div { class: "toast-stack", aria_live: "polite",
            for toast in snapshot.iter() {
                div {
                    key: "{toast.id}",
                    class: format_args!(
                        "toast {}",
                        match toast.level {
                            ToastLevel::Success => "toast-success",
                            ToastLevel::Error => "toast-error",
                        }
                    ),
                    span { class: "toast-message", "{toast.message}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_within_a_burst() {
        let ids: Vec<String> = (0..50).map(|_| timestamp_id("x")).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn page_slice_returns_expected_subrange() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(page_slice(&items, 0, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(page_slice(&items, 1, 5), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_slice(&items, 2, 5), vec![10, 11]);
    }

    #[test]
    fn page_slice_clamps_out_of_range_page() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(page_slice(&items, 9, 5), vec![10, 11]);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 5), 1);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(12, 5), 3);
    }

    #[test]
    fn empty_list_pages_to_empty() {
        let items: Vec<u32> = Vec::new();
        assert!(page_slice(&items, 0, 5).is_empty());
    }
}
