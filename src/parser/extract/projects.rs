use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::parser::blocks;
use crate::profile::ProjectEntry;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([^:\[]+)(?::\s*\[([^\]]+)\])?").unwrap());
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*Descri[pt]tions?:\*\*\s*(.*)$").unwrap());
static PRIMARY_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?:View on [^\]]+|Demo)\]\(([^)]+)\)").unwrap());
static HTTP_LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\]\((https?://[^)]+)\)").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

/// Parse every `## Title` project of the projects document body.
pub fn extract(body: &str) -> Vec<ProjectEntry> {
    chunks(body)
        .into_iter()
        .filter_map(|lines| {
            let entry = parse_chunk(&lines);
            if entry.is_none() {
                warn!(section = "Projects", entry = lines[0], "Dropping malformed project entry");
            }
            entry
        })
        .collect()
}

/// Group lines into chunks that start at a `##` heading and stop before the
/// next `##` heading or `---` rule. Lines outside any chunk are ignored.
fn chunks(body: &str) -> Vec<Vec<&str>> {
    let mut out: Vec<Vec<&str>> = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in body.lines() {
        if line.starts_with("##") {
            out.extend(current.take());
            current = Some(vec![line]);
        } else if line.starts_with("---") {
            out.extend(current.take());
        } else if let Some(lines) = current.as_mut() {
            lines.push(line);
        }
    }
    out.extend(current);

    out
}

fn parse_chunk(lines: &[&str]) -> Option<ProjectEntry> {
    let title = lines.first()?.trim_start_matches('#').trim();
    let mut rest = lines[1..].iter().copied();

    let technologies = match blocks::labeled(rest.next()?)? {
        ("Technologies", value) => value,
        _ => return None,
    };

    let first = rest.by_ref().find(|l| !l.trim().is_empty())?;
    let lead = DESCRIPTION_RE.captures(first.trim())?.get(1)?.as_str();
    let description = std::iter::once(lead)
        .chain(rest)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    let (name, entity) = split_title(title);
    let (summary, highlights) = split_highlights(&clean(&description));

    Some(ProjectEntry {
        name,
        summary,
        highlights,
        keywords: technologies
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        start_date: String::new(),
        end_date: String::new(),
        url: primary_url(&description).unwrap_or_default(),
        roles: Vec::new(),
        entity,
        kind: String::new(),
    })
}

/// `Name: [Entity]` → (name, entity).
fn split_title(title: &str) -> (String, String) {
    match TITLE_RE.captures(title) {
        Some(caps) => (
            caps[1].trim().to_string(),
            caps.get(2).map(|m| m.as_str().trim().to_string()).unwrap_or_default(),
        ),
        None => (title.to_string(), String::new()),
    }
}

/// A "View on …"/"Demo" link wins, then the first http(s) link.
fn primary_url(description: &str) -> Option<String> {
    PRIMARY_LINK_RE
        .captures(description)
        .or_else(|| HTTP_LINK_RE.captures(description))
        .map(|caps| caps[1].to_string())
}

/// Unwrap links to their labels and drop bold markers.
fn clean(description: &str) -> String {
    let text = LINK_RE.replace_all(description, "$1");
    BOLD_RE.replace_all(&text, "$1").trim().to_string()
}

fn split_highlights(text: &str) -> (String, Vec<String>) {
    let mut parts = text.split("\n-");
    let summary = parts.next().unwrap_or("").trim().to_string();
    let highlights = parts
        .map(|item| item.trim().trim_start_matches(['*', ' ']).trim_end().to_string())
        .collect();
    (summary, highlights)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "Intro text.\n\n\
## Cache Simulator: [Tampere University]\n\
**Technologies:** C++, Python, gem5\n\
\n\
**Description:** A trace-driven **cache** simulator. [View on GitHub](https://github.com/x/cachesim)\n\
- Models **MESI** coherence\n\
- * Ships a [Demo](https://demo.example.com) too\n\
\n\
---\n\
\n\
## Home Lab\n\
**Technologies:** Rust , NixOS\n\
\n\
**Descriptions:** Self-hosted services, see [my site](https://example.com/lab).\n\
\n\
## Broken\n\
Nothing to see here.\n";

    #[test]
    fn parses_projects() {
        let projects = extract(BODY);
        assert_eq!(projects.len(), 2);

        let sim = &projects[0];
        assert_eq!(sim.name, "Cache Simulator");
        assert_eq!(sim.entity, "Tampere University");
        assert_eq!(sim.keywords, vec!["C++", "Python", "gem5"]);
        assert_eq!(sim.url, "https://github.com/x/cachesim");
        assert_eq!(sim.summary, "A trace-driven cache simulator. View on GitHub");
        assert_eq!(sim.highlights, vec!["Models MESI coherence", "Ships a Demo too"]);
        assert_eq!(sim.start_date, "");
        assert!(sim.roles.is_empty());

        let lab = &projects[1];
        assert_eq!(lab.name, "Home Lab");
        assert_eq!(lab.entity, "");
        assert_eq!(lab.keywords, vec!["Rust", "NixOS"]);
        assert_eq!(lab.url, "https://example.com/lab");
        assert_eq!(lab.summary, "Self-hosted services, see my site.");
        assert!(lab.highlights.is_empty());
    }

    #[test]
    fn type_field_renamed() {
        let projects = extract(BODY);
        let json = serde_json::to_value(&projects[0]).unwrap();
        assert_eq!(json["type"], "");
        assert_eq!(json["startDate"], "");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn demo_link_preferred_over_earlier_plain_link() {
        let desc = "See [docs](https://docs.example.com) or the [Demo](https://demo.example.com).";
        assert_eq!(primary_url(desc).as_deref(), Some("https://demo.example.com"));
        assert_eq!(primary_url("no links"), None);
        assert_eq!(primary_url("[rel](/local/path)"), None);
    }

    #[test]
    fn title_shapes() {
        assert_eq!(split_title("Plain"), ("Plain".to_string(), String::new()));
        assert_eq!(split_title("A: [B]"), ("A".to_string(), "B".to_string()));
        assert_eq!(split_title("A: subtitle"), ("A".to_string(), String::new()));
        assert_eq!(split_title("[odd]"), ("[odd]".to_string(), String::new()));
    }

    #[test]
    fn no_headings_no_projects() {
        assert!(extract("").is_empty());
        assert!(extract("**Technologies:** a\n\n**Description:** b").is_empty());
    }

    #[test]
    fn empty_technologies_give_no_keywords() {
        let body = "## Bare\n**Technologies:**\n\n**Description:** Just text.\n\n## Trailing\n**Technologies:** Go, \n\n**Description:** More.\n";
        let projects = extract(body);
        assert_eq!(projects.len(), 2);
        assert!(projects[0].keywords.is_empty());
        assert_eq!(projects[1].keywords, vec!["Go"]);
    }

    #[test]
    fn fixture_projects() {
        let md = std::fs::read_to_string("tests/fixtures/content/projects.md").unwrap();
        let (_, body) = crate::parser::front_matter::split(&md);
        let projects = extract(body);
        assert_eq!(projects.len(), 3);
        assert!(projects.iter().all(|p| !p.keywords.is_empty()));
    }
}
