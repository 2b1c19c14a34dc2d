use std::sync::LazyLock;

use regex::Regex;

static MONTH_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\w+)\s+(\d{4})").unwrap());
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{4})").unwrap());

const MONTHS: &[(&str, &str)] = &[
    ("jan", "01"), ("feb", "02"), ("mar", "03"), ("apr", "04"),
    ("may", "05"), ("jun", "06"), ("jul", "07"), ("aug", "08"),
    ("sep", "09"), ("oct", "10"), ("nov", "11"), ("dec", "12"),
];

/// A normalized date range. `end` is `None` both for open-ended ranges and
/// for unparseable end dates; `ongoing` tells the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
    pub ongoing: bool,
}

/// Normalize a free-form date expression like `(*Jan 2019 – present*)`.
///
/// An en-dash separator wins over a hyphen. Without a separator the single
/// date is both start and end.
pub fn parse_range(raw: &str) -> DateRange {
    let expr = raw.trim().trim_matches(|c| c == '(' || c == ')' || c == '*');

    let separator = if expr.contains('–') {
        Some('–')
    } else if expr.contains('-') {
        Some('-')
    } else {
        None
    };

    let Some((first, second)) = separator.and_then(|sep| expr.split_once(sep)) else {
        let date = normalize(expr);
        return DateRange {
            start: date.clone(),
            end: date,
            ongoing: false,
        };
    };

    let start = normalize(first);
    if second.to_lowercase().contains("present") {
        return DateRange {
            start,
            end: None,
            ongoing: true,
        };
    }

    DateRange {
        start,
        end: normalize(second),
        ongoing: false,
    }
}

/// `Month Year` → `YYYY-MM`, bare year → `YYYY`, anything else → `None`.
pub fn normalize(token: &str) -> Option<String> {
    let token = token.trim();

    if let Some(caps) = MONTH_YEAR_RE.captures(token) {
        let prefix: String = caps[1].to_lowercase().chars().take(3).collect();
        if let Some((_, month)) = MONTHS.iter().find(|(name, _)| *name == prefix) {
            return Some(format!("{}-{}", &caps[2], month));
        }
    }

    YEAR_RE.captures(token).map(|caps| caps[1].to_string())
}
