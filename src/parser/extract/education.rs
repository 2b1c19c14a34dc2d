use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::parser::blocks::{self, EntryBlock};
use crate::parser::dates;
use crate::parser::sections::{self, SpanEnd};
use crate::profile::EducationEntry;

static TRAILING_NOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\*[^*]+\*\s*$").unwrap());
static THESIS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Thesis:\s*([^\n]+)").unwrap());

pub fn extract(body: &str) -> Vec<EducationEntry> {
    let Some(span) = sections::section_span(body, "Education", SpanEnd::Heading) else {
        return Vec::new();
    };
    let span = sections::strip_rules(span);
    // An italic footnote closing the section is not part of the last entry.
    let span = TRAILING_NOTE_RE.replace(&span, "");

    blocks::split_entries(&span)
        .iter()
        .filter_map(|block| {
            let entry = parse_block(block);
            if entry.is_none() {
                warn!(section = "Education", entry = block.title(), "Dropping malformed education entry");
            }
            entry
        })
        .collect()
}

/// `StudyType[, Area]`, `**Institution**`, `(*dates*)`, blank line, notes.
fn parse_block(block: &EntryBlock) -> Option<EducationEntry> {
    if block.lines.len() < 3 {
        return None;
    }
    let institution = blocks::bold_lead(block.line(1))?;
    let range = dates::parse_range(blocks::italic_dates(block.line(2))?);
    let (study_type, area) = split_degree(block.title());

    let notes = block.body_after_blank(false);
    let mut courses = Vec::new();
    if notes.to_lowercase().contains("thesis") {
        if let Some(caps) = THESIS_RE.captures(&notes) {
            courses.push(caps[1].trim().to_string());
        }
    }

    Some(EducationEntry {
        institution: institution.to_string(),
        study_type,
        area,
        start_date: range.start,
        end_date: range.end,
        score: String::new(),
        courses,
    })
}

/// `Master of Science (MS), Computer Architecture` → (study type, area).
fn split_degree(title: &str) -> (String, String) {
    match title.split_once(',') {
        Some((kind, area)) if !kind.trim().is_empty() => {
            (kind.trim().to_string(), area.trim().to_string())
        }
        _ => (title.to_string(), String::new()),
    }
}
