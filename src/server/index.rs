//! Landing page with the league dropdown.

const INDEX_TEMPLATE: &str = include_str!("templates/index.html");
const OPTIONS_PLACEHOLDER: &str = "{{league_options}}";

/// Renders the landing page with one `<option>` per league name.
pub fn render_index<'a>(league_names: impl IntoIterator<Item = &'a str>) -> String {
    let options = league_names
        .into_iter()
        .map(|name| {
            let escaped = escape_html(name);
            format!("<option value=\"{escaped}\">{escaped}</option>")
        })
        .collect::<Vec<_>>()
        .join("\n          ");

    INDEX_TEMPLATE.replace(OPTIONS_PLACEHOLDER, &options)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
