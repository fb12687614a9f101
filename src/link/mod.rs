use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

pub const PAGE_PLACEHOLDER: &str = ":page";

static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();

fn placeholder_re() -> &'static Regex {
    PLACEHOLDER_RE.get_or_init(|| Regex::new(r":page\b").unwrap())
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("link template is empty")]
    Empty,

    #[error("link template '{template}' has no ':page' placeholder")]
    MissingPlaceholder { template: String },
}

/// URL pattern for page links, e.g. `/users?sort=id&page=:page`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkTemplate {
    template: String,
}

impl LinkTemplate {
    pub fn parse(template: &str) -> Result<Self, LinkError> {
        let template = template.trim();
        if template.is_empty() {
            return Err(LinkError::Empty);
        }
        if !placeholder_re().is_match(template) {
            return Err(LinkError::MissingPlaceholder {
                template: template.to_string(),
            });
        }
        Ok(Self {
            template: template.to_string(),
        })
    }

    /// Appends a `page=:page` query parameter to a list-page URL. A
    /// `#fragment` stays at the end.
    pub fn with_page_param(base_url: &str) -> Self {
        let (base, fragment) = match base_url.trim().split_once('#') {
            Some((base, fragment)) => (base, format!("#{fragment}")),
            None => (base_url.trim(), String::new()),
        };
        let separator = if base.ends_with('?') || base.ends_with('&') {
            ""
        } else if base.contains('?') {
            "&"
        } else {
            "?"
        };
        Self {
            template: format!("{base}{separator}page={PAGE_PLACEHOLDER}{fragment}"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    pub fn href(&self, page: i64) -> String {
        placeholder_re()
            .replace_all(&self.template, page.to_string().as_str())
            .into_owned()
    }
}
