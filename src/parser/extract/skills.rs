use crate::parser::blocks;
use crate::parser::sections::{self, SpanEnd};
use crate::profile::SkillGroup;

pub fn extract(body: &str) -> Vec<SkillGroup> {
    let Some(span) = sections::section_span(body, "Skills", SpanEnd::HeadingOrRule) else {
        return Vec::new();
    };

    span.lines().filter_map(parse_line).collect()
}

/// `- **Category:** item1, item2, …`
fn parse_line(line: &str) -> Option<SkillGroup> {
    let item = line.trim_start().strip_prefix('-')?;
    if !item.starts_with(char::is_whitespace) {
        return None;
    }
    let (category, items) = blocks::labeled(item)?;
    if items.is_empty() {
        return None;
    }

    let keywords = items
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();

    Some(SkillGroup {
        name: category.to_string(),
        keywords,
    })
}
