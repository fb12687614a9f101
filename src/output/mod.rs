pub mod html;

use serde::Serialize;

use crate::link::LinkTemplate;
use crate::window::{Marker, Window};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Html => "html",
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub aria_label: String,
    pub list_class: String,
    pub active_class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            aria_label: "Page navigation".to_string(),
            list_class: "admin-pagination".to_string(),
            active_class: "admin-active".to_string(),
        }
    }
}

/// One rendered entry: a page link, or a gap when `page` is `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageItem {
    pub label: String,
    pub page: Option<i64>,
    pub href: Option<String>,
    pub active: bool,
}

impl PageItem {
    pub fn is_ellipsis(&self) -> bool {
        self.page.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub current_page: i64,
    pub total_pages: i64,
    pub neighbor_offset: u32,
    pub markers: Window,
    pub items: Vec<PageItem>,
}

impl PaginationView {
    pub fn new(
        window: Window,
        current_page: i64,
        total_pages: i64,
        neighbor_offset: u32,
        link: Option<&LinkTemplate>,
    ) -> Self {
        let items = window
            .iter()
            .map(|marker| match *marker {
                Marker::Page(n) => PageItem {
                    label: n.to_string(),
                    page: Some(n),
                    href: link.map(|l| l.href(n)),
                    active: n == current_page,
                },
                Marker::Ellipsis => PageItem {
                    label: "...".to_string(),
                    page: None,
                    href: None,
                    active: false,
                },
            })
            .collect();
        Self {
            current_page,
            total_pages,
            neighbor_offset,
            markers: window,
            items,
        }
    }

    pub fn active_item(&self) -> Option<&PageItem> {
        self.items.iter().find(|item| item.active)
    }
}

pub fn render_text(view: &PaginationView) -> Vec<u8> {
    let mut out = view
        .items
        .iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.label)
            } else {
                item.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    out.push('\n');
    out.into_bytes()
}

pub fn render_json(view: &PaginationView) -> Vec<u8> {
    let mut out = serde_json::to_vec_pretty(view).unwrap_or_else(|_| b"{}".to_vec());
    out.push(b'\n');
    out
}

pub fn render_html(view: &PaginationView, options: &RenderOptions) -> Vec<u8> {
    html::render_html(view, options)
}

pub fn render(view: &PaginationView, format: OutputFormat, options: &RenderOptions) -> Vec<u8> {
    match format {
        OutputFormat::Text => render_text(view),
        OutputFormat::Json => render_json(view),
        OutputFormat::Html => render_html(view, options),
    }
}
