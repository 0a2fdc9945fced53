use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::shared::{Toast, ToastHost};
use crate::views::{
    AudioView, BillingView, BotsView, ChatView, ImagesView, OpinionsView, SettingsView,
};
use dioxus::prelude::*;

const NIMBUS_CSS: Asset = asset!("/assets/nimbus.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppTab {
    Chat,
    Images,
    Audio,
    Bots,
    Opinions,
    Billing,
    Settings,
}

impl AppTab {
    const ALL: &'static [AppTab] = &[
        AppTab::Chat,
        AppTab::Images,
        AppTab::Audio,
        AppTab::Bots,
        AppTab::Opinions,
        AppTab::Billing,
        AppTab::Settings,
    ];

    fn label(self) -> &'static str {
        match self {
            AppTab::Chat => "Chat",
            AppTab::Images => "Images",
            AppTab::Audio => "Audio",
            AppTab::Bots => "Bots",
            AppTab::Opinions => "Opinions",
            AppTab::Billing => "Billing",
            AppTab::Settings => "Settings",
        }
    }
}

#[component]
pub fn App() -> Element {
    let active_tab = use_signal(|| AppTab::Chat);
    let base_font_px = use_signal(|| 14i32);
    let theme = use_signal(|| ThemeMode::Dark);
    let toasts = use_signal(Vec::<Toast>::new);

    rsx! {
        ThemeStyles { base_font_px, theme }
        AppHeader { active_tab, theme: theme() }
        TabPanels {
            active_tab,
            base_font_px,
            theme,
            toasts,
        }
        ToastHost { toasts }
    }
}

#[component]
fn ThemeStyles(base_font_px: Signal<i32>, theme: Signal<ThemeMode>) -> Element {
    let root_style = format!(":root {{ font-size: {}px; }}", base_font_px());
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: NIMBUS_CSS }
        style { dangerous_inner_html: "{root_style}" }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>, theme: ThemeMode) -> Element {
    let theme = theme_definition(theme);
    rsx! {
        div { class: "header no-divider",
            div { class: "header-content",
                span { class: "{theme.wordmark_class}", "Nimbus" }
                TabNavigation { active_tab }
            }
        }
    }
}

#[component]
fn TabPanels(
    active_tab: Signal<AppTab>,
    base_font_px: Signal<i32>,
    theme: Signal<ThemeMode>,
    toasts: Signal<Vec<Toast>>,
) -> Element {
    rsx! {
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Chat,
                children: rsx!( ChatView { base_font_px } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Images,
                children: rsx!( ImagesView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Audio,
                children: rsx!( AudioView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Bots,
                children: rsx!( BotsView { toasts } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Opinions,
                children: rsx!( OpinionsView { toasts } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Billing,
                children: rsx!( BillingView { toasts } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Settings,
                children: rsx!( SettingsView { theme } ),
            }
        }
    }
}

#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}

#[component]
fn TabNavigation(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tabs",
            for tab in AppTab::ALL.iter().copied() {
                TabButton { active_tab, tab, label: tab.label() }
            }
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab, label: &'static str) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab {
        "tab active"
    } else {
        "tab"
    };
    rsx! {
        h1 {
            class: class,
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}
