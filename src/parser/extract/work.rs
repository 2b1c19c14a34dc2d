use tracing::{debug, warn};

use crate::parser::blocks::{self, EntryBlock};
use crate::parser::dates;
use crate::parser::sections::{self, SpanEnd};
use crate::profile::WorkEntry;

pub fn extract(body: &str) -> Vec<WorkEntry> {
    let Some(span) = sections::section_span(body, "Experience", SpanEnd::Heading) else {
        return Vec::new();
    };
    let span = sections::strip_rules(span);

    blocks::split_entries(&span)
        .iter()
        .filter_map(|block| {
            let entry = parse_block(block);
            if entry.is_none() {
                warn!(section = "Experience", entry = block.title(), "Dropping malformed work entry");
            }
            entry
        })
        .collect()
}

/// Position, `**Company** – Location`, `(*dates*)`, blank line, summary.
fn parse_block(block: &EntryBlock) -> Option<WorkEntry> {
    if block.lines.len() < 3 {
        return None;
    }
    let (name, location) = blocks::org_with_location(block.line(1))?;
    let range = dates::parse_range(blocks::italic_dates(block.line(2))?);
    debug!(position = block.title(), ongoing = range.ongoing, "Parsed work entry");

    Some(WorkEntry {
        position: block.title().to_string(),
        name,
        location,
        start_date: range.start,
        summary: block.body_after_blank(true),
        end_date: range.end,
    })
}
