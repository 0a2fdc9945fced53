use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub wordmark_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            wordmark_class: "header-wordmark",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            wordmark_class: "header-wordmark",
        },
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0b0d12;
    --color-bg-secondary: #11141b;
    --color-bg-overlay: rgba(4, 6, 10, 0.88);
    --color-text-primary: #f4f6fb;
    --color-text-secondary: #dde2ee;
    --color-text-muted: #9aa3b5;
    --color-border: #f4f6fb;
    --color-surface-muted: #1a1e28;
    --color-input-border: #2b313f;
    --color-input-bg: #0b0d12;
    --color-chat-user-bg: #f4f6fb;
    --color-chat-user-text: #0b0d12;
    --color-chat-assistant-bg: #11141b;
    --color-chat-assistant-text: #f4f6fb;
    --color-card-border: #2b313f;
    --color-card-bg: #11141b;
    --color-card-hover: #f4f6fb;
    --color-timestamp: #8a93a6;
    --color-accent: #5b8cff;
    --color-success: #3ecf8e;
    --color-danger: #ff5c5c;
    --color-shimmer-base: rgba(91, 140, 255, 0.25);
    --color-shimmer-highlight: #5b8cff;
    --color-header-fade: rgba(11, 13, 18, 0.85);
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-primary); }
.btn:hover,
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-border); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f4f6fb;
    --color-bg-overlay: rgba(255, 255, 255, 0.92);
    --color-text-primary: #10131a;
    --color-text-secondary: #1c2230;
    --color-text-muted: #5a6374;
    --color-border: #10131a;
    --color-surface-muted: #e7eaf2;
    --color-input-border: #c3c9d6;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #10131a;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #ffffff;
    --color-chat-assistant-text: #10131a;
    --color-card-border: #d4d9e4;
    --color-card-bg: #f4f6fb;
    --color-card-hover: #10131a;
    --color-timestamp: #5f6879;
    --color-accent: #2f64e0;
    --color-success: #1f9f6b;
    --color-danger: #d1403f;
    --color-shimmer-base: rgba(47, 100, 224, 0.2);
    --color-shimmer-highlight: #2f64e0;
    --color-header-fade: rgba(255, 255, 255, 0.9);
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-primary); }
.btn { color: var(--color-text-primary); }
.btn:hover,
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer { background: var(--color-bg-overlay); border-top-color: var(--color-border); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-border); }
"#;
