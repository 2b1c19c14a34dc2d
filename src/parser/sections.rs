use std::sync::LazyLock;

use regex::Regex;

static TOP_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^##[ \t]+[^#\s]").unwrap());
static RULE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^---").unwrap());
static INNER_RULE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n---[ \t]*\r?\n").unwrap());

/// Where a section span stops, besides the next `## ` heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanEnd {
    HeadingOrRule,
    Heading,
}

/// Text between `## <name>` and the next top-level heading (or rule, when
/// asked), excluding the heading line itself. `None` when the heading is absent.
pub fn section_span<'a>(body: &'a str, name: &str, end: SpanEnd) -> Option<&'a str> {
    let heading = Regex::new(&format!(r"(?m)^##[ \t]+{}[ \t]*\r?\n", regex::escape(name))).ok()?;
    let start = heading.find(body)?.end();
    let rest = &body[start..];

    let mut stop = TOP_HEADING_RE.find(rest).map(|m| m.start()).unwrap_or(rest.len());
    if end == SpanEnd::HeadingOrRule {
        if let Some(rule) = RULE_RE.find(rest) {
            stop = stop.min(rule.start());
        }
    }

    Some(&rest[..stop])
}

/// Replace `---` separator lines inside a span with a blank line.
pub fn strip_rules(span: &str) -> String {
    // Run twice so back-to-back separators sharing a newline are both caught.
    let once = INNER_RULE_RE.replace_all(span, "\n\n");
    INNER_RULE_RE.replace_all(&once, "\n\n").into_owned()
}

/// Leading paragraph of a document body: contiguous non-blank lines before
/// the first blank line or `##` heading.
pub fn first_paragraph(body: &str) -> String {
    body.trim()
        .lines()
        .take_while(|line| !line.trim().is_empty() && !line.starts_with("##"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
