use maud::{html, Markup};

pub mod error;
pub mod fields;

pub use error::error_page;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            (body)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

pub fn notice(n: &Notice) -> Markup {
    let class = match n.kind {
        NoticeKind::Info => "notice notice-info",
        NoticeKind::Warning => "notice notice-warning",
        NoticeKind::Error => "notice notice-error",
    };
    html! {
        div class=(class) role="status" { (n.text) }
    }
}
