use crate::prompt::StyleCatalog;

const INDEX_HTML: &str = include_str!("assets/index.html");
pub const SCRIPT_JS: &str = include_str!("assets/script.js");

const OPTIONS_MARKER: &str = "<!-- style-options -->";

pub fn render_index(catalog: &StyleCatalog) -> String {
    let options: String = catalog
        .iter()
        .map(|(key, phrase)| {
            format!(
                "<option value=\"{}\" title=\"{}\">{}</option>\n",
                escape_html(key),
                escape_html(phrase),
                escape_html(key)
            )
        })
        .collect();

    INDEX_HTML.replace(OPTIONS_MARKER, &options)
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
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
