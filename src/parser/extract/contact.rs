use std::sync::LazyLock;

use regex::Regex;

use crate::defaults::ProfileDefaults;

static OBFUSCATED_EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([\w.+-]+)\s*\[at\]\s*([\w-]+(?:(?:\s+dot\s+|\s*\[dot\]\s*)[\w-]+)+)").unwrap()
});
static DOT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\s+dot\s+|\s*\[dot\]\s*").unwrap());
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap());
static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"linkedin\.com/in/([\w-]+)").unwrap());
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Phone:\*\*[ \t]*(\+?\d(?:[\d \-]*\d)?)").unwrap());
static CITY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*City:\*\*([^|\r\n]*)").unwrap());
static COUNTRY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*Country:\*\*([^|\r\n]*)").unwrap());

/// Fields found in the contact and "other" documents. Absent fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub linkedin: Option<LinkedIn>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedIn {
    pub username: String,
    pub url: String,
}

/// Combine the contact document (email, LinkedIn) and the other document
/// (phone, city, country). Either may be missing.
pub fn extract(contact: Option<&str>, other: Option<&str>, defaults: &ProfileDefaults) -> ContactInfo {
    let mut info = ContactInfo::default();

    if let Some(text) = contact {
        info.email = find_email(text);
        info.linkedin = find_linkedin(text);
    }

    if let Some(text) = other {
        info.phone = PHONE_RE
            .captures(text)
            .map(|caps| format_phone(&caps[1], &defaults.calling_code));
        info.city = field(&CITY_RE, text);
        info.country = field(&COUNTRY_RE, text);
    }

    info
}

/// `name [at] domain dot tld` resolves first; otherwise the first plain address.
pub fn find_email(text: &str) -> Option<String> {
    if let Some(caps) = OBFUSCATED_EMAIL_RE.captures(text) {
        let domain = DOT_RE.replace_all(&caps[2], ".");
        return Some(format!("{}@{}", &caps[1], domain).to_lowercase());
    }
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn find_linkedin(text: &str) -> Option<LinkedIn> {
    let username = LINKEDIN_RE.captures(text)?[1].to_string();
    Some(LinkedIn {
        url: format!("https://www.linkedin.com/in/{username}/"),
        username,
    })
}

/// First non-empty value after a bolded label, anywhere in the text. The
/// value runs to the end of the line or the next `|` table cell boundary.
fn field(re: &Regex, text: &str) -> Option<String> {
    re.captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .find(|value| !value.is_empty())
}

/// Local numbers lose their leading zeros and gain the calling code.
fn format_phone(raw: &str, calling_code: &str) -> String {
    let raw = raw.trim();
    if raw.starts_with('+') {
        raw.to_string()
    } else {
        format!("{} {}", calling_code, raw.trim_start_matches('0'))
    }
}
