use super::{PaginationView, RenderOptions};

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders the `<nav>` fragment used by the admin list pages.
pub fn render_html(view: &PaginationView, options: &RenderOptions) -> Vec<u8> {
    let list_class = escape_html(&options.list_class);
    let active_class = escape_html(&options.active_class);

    let mut out = String::new();
    out.push_str(&format!(
        "<nav aria-label=\"{}\">\n",
        escape_html(&options.aria_label)
    ));
    out.push_str(&format!("  <ul class=\"{list_class}\">\n"));
    for item in &view.items {
        out.push_str(&format!("    <li class=\"{list_class}__item\">"));
        if item.is_ellipsis() {
            out.push_str(&format!(
                "<span class=\"{list_class}__link\">...</span>"
            ));
        } else {
            let active = if item.active {
                format!(" {active_class}")
            } else {
                String::new()
            };
            let href = item.href.as_deref().unwrap_or("#");
            out.push_str(&format!(
                "<a class=\"{list_class}__link{active}\" href=\"{}\">{}</a>",
                escape_html(href),
                escape_html(&item.label)
            ));
        }
        out.push_str("</li>\n");
    }
    out.push_str("  </ul>\n");
    out.push_str("</nav>\n");
    out.into_bytes()
}
