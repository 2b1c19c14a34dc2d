use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::warn;

use crate::profile::SocialProfile;

static INFO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?m)^[ \t]*info\s*=\s*\[([^\]]+)\]"#).unwrap());
static QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]+)"|'([^']+)'"#).unwrap());
static SOCIAL_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\[\[params\.social\]\][ \t]*$").unwrap());
static TABLE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\[").unwrap());

/// Values read from the site configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteConfig {
    pub title: Option<String>,
    pub base_url: Option<String>,
    pub author: Option<String>,
    pub label: Option<String>,
    pub profiles: Vec<SocialProfile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HugoFile {
    title: Option<String>,
    #[serde(rename = "baseURL")]
    base_url: Option<String>,
    author: Option<String>,
    params: HugoParams,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HugoParams {
    author: Option<String>,
    info: Vec<String>,
    social: Vec<HugoSocial>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HugoSocial {
    name: Option<String>,
    url: Option<String>,
}

/// Read the site configuration. Files that do not deserialize fall back to a
/// line-anchored key scan, so this never fails.
pub fn extract(content: &str) -> SiteConfig {
    match toml::from_str::<HugoFile>(content) {
        Ok(file) => from_hugo(file),
        Err(e) => {
            warn!(error = %e, "Site configuration is not valid TOML, scanning keys instead");
            scan(content)
        }
    }
}

fn from_hugo(file: HugoFile) -> SiteConfig {
    let HugoFile { title, base_url, author, params } = file;
    SiteConfig {
        title: non_empty(title),
        base_url: non_empty(base_url).map(|u| u.trim_end_matches('/').to_string()),
        author: non_empty(params.author).or_else(|| non_empty(author)),
        label: non_empty(params.info.into_iter().next()),
        profiles: params
            .social
            .into_iter()
            .filter_map(|s| social(non_empty(s.name), non_empty(s.url)))
            .collect(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn scan(content: &str) -> SiteConfig {
    let label = INFO_RE
        .captures(content)
        .and_then(|caps| quoted(caps.get(1)?.as_str()));

    SiteConfig {
        title: string_value(content, "title"),
        base_url: string_value(content, "baseURL").map(|u| u.trim_end_matches('/').to_string()),
        author: string_value(content, "author"),
        label,
        profiles: social_blocks(content)
            .filter_map(|block| social(string_value(block, "name"), string_value(block, "url")))
            .collect(),
    }
}

/// First `"..."` or `'...'` literal in `text`.
fn quoted(text: &str) -> Option<String> {
    let caps = QUOTED_RE.captures(text)?;
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str().to_string())
}

/// First `key = "value"` (or single-quoted) assignment at line start.
fn string_value(content: &str, key: &str) -> Option<String> {
    let re = Regex::new(&format!(
        r#"(?m)^[ \t]*{}\s*=\s*("[^"]+"|'[^']+')"#,
        regex::escape(key)
    ))
    .ok()?;
    re.captures(content).and_then(|caps| quoted(&caps[1]))
}

/// Body of each `[[params.social]]` table, up to the next table header.
fn social_blocks(content: &str) -> impl Iterator<Item = &str> {
    SOCIAL_HEADER_RE.find_iter(content).map(move |m| {
        let rest = &content[m.end()..];
        let end = TABLE_HEADER_RE.find(rest).map(|h| h.start()).unwrap_or(rest.len());
        &rest[..end]
    })
}

fn social(network: Option<String>, url: Option<String>) -> Option<SocialProfile> {
    if network.is_none() && url.is_none() {
        return None;
    }
    Some(SocialProfile {
        network: network.unwrap_or_default(),
        username: None,
        url: url.unwrap_or_default(),
    })
}
