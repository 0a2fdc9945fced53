use crate::views::shared::{
    Toast, ToastLevel, format_date, page_count, page_slice, push_toast, timestamp_id, unix_now,
};
use dioxus::events::FormEvent;
use dioxus::prelude::*;
use std::time::Duration;

/// Stand-in latency for the real payment processor this screen mocks.
const SIMULATED_CHECKOUT_DELAY: Duration = Duration::from_millis(800);

const HISTORY_PAGE_SIZE: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct CreditPackage {
    pub id: &'static str,
    pub name: &'static str,
    pub credits: u32,
    pub price_cents: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SavedCard {
    pub id: String,
    pub brand: &'static str,
    pub last4: &'static str,
    pub expiry: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentEntry {
    pub id: String,
    pub description: String,
    pub amount_cents: u32,
    pub credits: u32,
    pub status: PaymentStatus,
    pub created_at: i64,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum HistorySort {
    Newest,
    Oldest,
}

fn credit_packages() -> Vec<CreditPackage> {
    vec![
        CreditPackage {
            id: "starter",
            name: "Starter",
            credits: 100,
            price_cents: 999,
        },
        CreditPackage {
            id: "plus",
            name: "Plus",
            credits: 500,
            price_cents: 3999,
        },
        CreditPackage {
            id: "pro",
            name: "Pro",
            credits: 2000,
            price_cents: 12999,
        },
    ]
}

fn initial_cards() -> Vec<SavedCard> {
    vec![
        SavedCard {
            id: "card-4242".to_string(),
            brand: "Visa",
            last4: "4242",
            expiry: "12/27",
        },
        SavedCard {
            id: "card-8210".to_string(),
            brand: "Mastercard",
            last4: "8210",
            expiry: "08/26",
        },
    ]
}

fn initial_history() -> Vec<PaymentEntry> {
    let day = 86_400;
    let now = unix_now();
    let row = |idx: i64, description: &str, amount_cents, credits, status| PaymentEntry {
        id: format!("pay-{idx}"),
        description: description.to_string(),
        amount_cents,
        credits,
        status,
        created_at: now - idx * day,
    };
    vec![
        row(2, "Plus pack", 3999, 500, PaymentStatus::Completed),
        row(9, "Starter pack", 999, 100, PaymentStatus::Completed),
        row(16, "Pro pack", 12999, 2000, PaymentStatus::Failed),
        row(23, "Starter pack", 999, 100, PaymentStatus::Completed),
        row(31, "Plus pack", 3999, 500, PaymentStatus::Pending),
        row(40, "Starter pack", 999, 100, PaymentStatus::Completed),
        row(55, "Pro pack", 12999, 2000, PaymentStatus::Completed),
        row(70, "Starter pack", 999, 100, PaymentStatus::Failed),
    ]
}

pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

fn prepare_history(
    entries: &[PaymentEntry],
    status: Option<PaymentStatus>,
    sort: HistorySort,
) -> Vec<PaymentEntry> {
    let mut rows: Vec<PaymentEntry> = entries
        .iter()
        .filter(|entry| status.is_none_or(|wanted| entry.status == wanted))
        .cloned()
        .collect();
    match sort {
        HistorySort::Newest => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        HistorySort::Oldest => rows.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
    rows
}

#[component]
pub fn BillingView(toasts: Signal<Vec<Toast>>) -> Element {
    let balance = use_signal(|| 240u32);
    let cards = use_signal(initial_cards);
    let history = use_signal(initial_history);
    let purchasing = use_signal(|| Option::<&'static str>::None);
    let mut status_filter = use_signal(|| Option::<PaymentStatus>::None);
    let mut sort_mode = use_signal(|| HistorySort::Newest);
    let mut page = use_signal(|| 0usize);

    let mut purchase = {
        let mut balance = balance;
        let mut history = history;
        let mut purchasing_signal = purchasing;
        move |package: CreditPackage| {
            if purchasing_signal().is_some() {
                return;
            }
            purchasing_signal.set(Some(package.id));
            spawn(async move {
                tokio::time::sleep(SIMULATED_CHECKOUT_DELAY).await;
                balance.with_mut(|credits| *credits += package.credits);
                history.with_mut(|rows| {
                    rows.insert(
                        0,
                        PaymentEntry {
                            id: timestamp_id("pay"),
                            description: format!("{} pack", package.name),
                            amount_cents: package.price_cents,
                            credits: package.credits,
                            status: PaymentStatus::Completed,
                            created_at: unix_now(),
                        },
                    );
                });
                purchasing_signal.set(None);
                push_toast(
                    toasts,
                    ToastLevel::Success,
                    format!("Added {} credits.", package.credits),
                );
            });
        }
    };

    let filtered = prepare_history(&history(), status_filter(), sort_mode());
    let total_pages = page_count(filtered.len(), HISTORY_PAGE_SIZE);
    let current_page = page().min(total_pages - 1);
    let page_rows = page_slice(&filtered, current_page, HISTORY_PAGE_SIZE);

    rsx! {
        div { class: "main-container",
            div { class: "panel balance-panel",
                h3 { class: "section-title", "Credits" }
                span { class: "balance-value", "{balance()}" }
                span { class: "text-muted", "credits available" }
            }

            div { class: "panel",
                h3 { class: "section-title", "Buy credits" }
                div { class: "package-grid",
                    for package in credit_packages() {
                        div { key: "{package.id}", class: "card package-card",
                            span { class: "card-title", "{package.name}" }
                            span { class: "package-credits", "{package.credits} credits" }
                            span { class: "package-price", "{format_price(package.price_cents)}" }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: purchasing().is_some(),
                                onclick: {
                                    let package = package.clone();
                                    move |_| purchase(package.clone())
                                },
                                if purchasing() == Some(package.id) { "Processing…" } else { "Buy" }
                            }
                        }
                    }
                }
            }

            div { class: "panel",
                h3 { class: "section-title", "Saved cards" }
                if cards().is_empty() {
                    p { class: "text-muted", "No saved cards." }
                } else {
                    div { class: "card-list",
                        for card in cards().iter() {
                            div { key: "{card.id}", class: "card card-row",
                                span { class: "card-title", "{card.brand} •••• {card.last4}" }
                                span { class: "card-subtitle", "Expires {card.expiry}" }
                                button {
                                    class: "action-btn danger",
                                    r#type: "button",
                                    onclick: {
                                        let mut cards = cards;
                                        let id = card.id.clone();
                                        move |_| {
                                            let id = id.clone();
                                            cards.with_mut(|list| list.retain(|candidate| candidate.id != id));
                                        }
                                    },
                                    "Remove"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "panel",
                h3 { class: "section-title", "Payment history" }
                div { class: "doc-controls",
                    div { class: "doc-control-group",
                        label { r#for: "history-status", class: "control-label", "Status" }
                        select {
                            id: "history-status",
                            value: match status_filter() {
                                None => "all",
                                Some(PaymentStatus::Completed) => "completed",
                                Some(PaymentStatus::Pending) => "pending",
                                Some(PaymentStatus::Failed) => "failed",
                            },
                            onchange: move |evt: FormEvent| {
                                let selected = match evt.value().as_str() {
                                    "completed" => Some(PaymentStatus::Completed),
                                    "pending" => Some(PaymentStatus::Pending),
                                    "failed" => Some(PaymentStatus::Failed),
                                    _ => None,
                                };
                                status_filter.set(selected);
                                page.set(0);
                            },
                            option { value: "all", "All" }
                            option { value: "completed", "Completed" }
                            option { value: "pending", "Pending" }
                            option { value: "failed", "Failed" }
                        }
                    }
                    div { class: "doc-control-group",
                        label { r#for: "history-sort", class: "control-label", "Sort" }
                        select {
                            id: "history-sort",
                            value: match sort_mode() { HistorySort::Newest => "newest", HistorySort::Oldest => "oldest" },
                            onchange: move |evt: FormEvent| {
                                let mode = match evt.value().as_str() {
                                    "oldest" => HistorySort::Oldest,
                                    _ => HistorySort::Newest,
                                };
                                sort_mode.set(mode);
                                page.set(0);
                            },
                            option { value: "newest", "Newest" }
                            option { value: "oldest", "Oldest" }
                        }
                    }
                }
                if page_rows.is_empty() {
                    p { class: "text-muted", "No payments match the selected filters." }
                } else {
                    div { class: "doc-table",
                        div { class: "doc-table-header",
                            span { class: "doc-col-title", "Description" }
                            span { class: "doc-col-tags", "Credits" }
                            span { class: "doc-col-tags", "Amount" }
                            span { class: "doc-col-tags", "Status" }
                            span { class: "doc-col-date", "Date" }
                        }
                        div { class: "doc-table-body",
                            for entry in page_rows.iter() {
                                div { key: "{entry.id}", class: "doc-row",
                                    span { class: "doc-row-title", "{entry.description}" }
                                    span { "{entry.credits}" }
                                    span { "{format_price(entry.amount_cents)}" }
                                    span { class: format_args!(
                                            "status-pill {}",
                                            match entry.status {
                                                PaymentStatus::Completed => "status-completed",
                                                PaymentStatus::Pending => "status-pending",
                                                PaymentStatus::Failed => "status-failed",
                                            }
                                        ),
                                        "{entry.status.label()}"
                                    }
                                    span { class: "doc-row-date", "{format_date(entry.created_at)}" }
                                }
                            }
                        }
                    }
                    div { class: "pager",
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            disabled: current_page == 0,
                            onclick: move |_| page.set(current_page.saturating_sub(1)),
                            "Previous"
                        }
                        span { class: "pager-label", "Page {current_page + 1} of {total_pages}" }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            disabled: current_page + 1 >= total_pages,
                            onclick: move |_| page.set(current_page + 1),
                            "Next"
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

    #[test]
    fn status_filter_keeps_only_matching_rows() {
        let rows = initial_history();
        let failed = prepare_history(&rows, Some(PaymentStatus::Failed), HistorySort::Newest);
        assert_eq!(failed.len(), 2);
        assert!(failed
            .iter()
            .all(|entry| entry.status == PaymentStatus::Failed));
    }

    #[test]
    fn sort_orders_by_date() {
        let rows = initial_history();
        let newest = prepare_history(&rows, None, HistorySort::Newest);
        assert!(newest.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        let oldest = prepare_history(&rows, None, HistorySort::Oldest);
        assert!(oldest.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[test]
    fn pagination_slices_history() {
        let rows = prepare_history(&initial_history(), None, HistorySort::Newest);
        let first = page_slice(&rows, 0, HISTORY_PAGE_SIZE);
        let second = page_slice(&rows, 1, HISTORY_PAGE_SIZE);
        assert_eq!(first.len(), HISTORY_PAGE_SIZE);
        assert_eq!(second.len(), rows.len() - HISTORY_PAGE_SIZE);
        assert_ne!(first[0].id, second[0].id);
    }

    #[test]
    fn prices_render_in_dollars() {
        assert_eq!(format_price(999), "$9.99");
        assert_eq!(format_price(12999), "$129.99");
        assert_eq!(format_price(5), "$0.05");
    }
}
