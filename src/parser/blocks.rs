use std::sync::LazyLock;

use regex::Regex;

static ENTRY_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^###[ \t]+").unwrap());
static LABELED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*([^:*]+):\*\*[ \t]*(.*)$").unwrap());
static ORG_LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*([^*]+)\*\*\s*[–-]\s*(.+)").unwrap());
static BOLD_LEAD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*([^*]+)\*\*").unwrap());
static ITALIC_DATES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\(\*([^)]+)\*\)").unwrap());

/// One `### ` entry inside a section span. `lines[0]` is the heading text.
#[derive(Debug, Clone)]
pub struct EntryBlock<'a> {
    pub lines: Vec<&'a str>,
}

impl<'a> EntryBlock<'a> {
    pub fn title(&self) -> &'a str {
        self.lines.first().map(|l| l.trim()).unwrap_or("")
    }

    pub fn line(&self, idx: usize) -> &'a str {
        self.lines.get(idx).copied().unwrap_or("")
    }

    /// Lines after the first blank line following the three header lines.
    /// With `keep_blank` false, blank lines in the result are dropped.
    pub fn body_after_blank(&self, keep_blank: bool) -> String {
        let mut rest = self.lines.iter().skip(3).skip_while(|l| !l.trim().is_empty());
        // Consume the separating blank line itself.
        rest.next();
        rest.filter(|l| keep_blank || !l.trim().is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

/// Split a span into `### ` entries; text before the first entry is ignored.
pub fn split_entries(span: &str) -> Vec<EntryBlock<'_>> {
    let heads: Vec<(usize, usize)> = ENTRY_HEADING_RE
        .find_iter(span)
        .map(|m| (m.start(), m.end()))
        .collect();
    let mut blocks = Vec::with_capacity(heads.len());

    for (i, &(_, start)) in heads.iter().enumerate() {
        let end = heads.get(i + 1).map(|&(next, _)| next).unwrap_or(span.len());
        let chunk = span[start..end].trim();
        if chunk.is_empty() {
            continue;
        }
        blocks.push(EntryBlock {
            lines: chunk.lines().collect(),
        });
    }

    blocks
}

/// `**Label:** value` → `(Label, value)`.
pub fn labeled(line: &str) -> Option<(&str, &str)> {
    let caps = LABELED_RE.captures(line.trim())?;
    let label = caps.get(1)?.as_str().trim();
    let value = caps.get(2)?.as_str().trim();
    Some((label, value))
}

/// `**Organization** – Location` (en-dash or hyphen).
pub fn org_with_location(line: &str) -> Option<(String, String)> {
    let caps = ORG_LOCATION_RE.captures(line)?;
    Some((caps[1].trim().to_string(), caps[2].trim().to_string()))
}

/// Leading `**Bold**` segment of a line.
pub fn bold_lead(line: &str) -> Option<&str> {
    BOLD_LEAD_RE.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str().trim())
}

/// `(*...*)` date line → the inner expression.
pub fn italic_dates(line: &str) -> Option<&str> {
    ITALIC_DATES_RE.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str().trim())
}
