use std::sync::OnceLock;

use regex::Regex;

use crate::store::{Record, ResourceKind};
use crate::utils::escape_html;

fn emphasis_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*(.+?)\*").expect("emphasis regex"))
}

/// Caption markup for a record of the named resource. Unknown names render
/// nothing.
pub fn render(resource: &str, record: &Record) -> String {
    match ResourceKind::parse(resource) {
        Some(kind) => render_kind(kind, record),
        None => String::new(),
    }
}

pub fn render_kind(kind: ResourceKind, record: &Record) -> String {
    match kind {
        ResourceKind::Joke => format!(
            "<strong>{}</strong><br>{}",
            escape_html(record.text("title")),
            escape_html(record.text("body")).replace('\n', "<br>")
        ),
        ResourceKind::Motivation => {
            let text = escape_html(record.text("text"));
            let emphasized = emphasis_re().replace_all(&text, "<strong>$1</strong><br>");
            // only the first newline becomes a break
            emphasized.replacen('\n', "<br>", 1)
        }
        ResourceKind::Proverb => format!(
            "<strong>Proverb:</strong> {}<br><strong>Meaning:</strong> {}",
            escape_html(record.text("proverb")),
            escape_html(record.text("moral"))
        ),
    }
}
