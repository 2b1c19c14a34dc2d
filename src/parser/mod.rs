pub mod assemble;
pub mod blocks;
pub mod dates;
pub mod extract;
pub mod front_matter;
pub mod sections;

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::defaults::ProfileDefaults;
use crate::profile::ProfileRecord;
use extract::{contact, projects, site, AboutSections};

pub const ABOUT_FILE: &str = "about.md";
pub const PROJECTS_FILE: &str = "projects.md";
pub const CONTACT_FILE: &str = "contact.md";
pub const OTHER_FILE: &str = "other.md";

/// Parse every known document under `content_dir` plus the site configuration.
///
/// Missing or unreadable inputs contribute nothing; this never fails.
/// The four input groups are extracted in parallel and merged afterwards.
pub fn parse_content(content_dir: &Path, site_config: &Path, defaults: &ProfileDefaults) -> ProfileRecord {
    let ((about, projects), (contact, site)) = rayon::join(
        || {
            rayon::join(
                || parse_about(content_dir),
                || parse_projects(content_dir),
            )
        },
        || {
            rayon::join(
                || parse_contact(content_dir, defaults),
                || read_optional(site_config).map(|c| site::extract(&c)).unwrap_or_default(),
            )
        },
    );

    info!(
        skills = about.skills.len(),
        work = about.work.len(),
        education = about.education.len(),
        projects = projects.len(),
        social = site.profiles.len(),
        "Extracted content"
    );

    assemble::assemble(site, contact, about, projects, defaults)
}

fn parse_about(content_dir: &Path) -> AboutSections {
    let Some(text) = read_optional(&content_dir.join(ABOUT_FILE)) else {
        return AboutSections::default();
    };
    let (meta, body) = front_matter::split(&text);
    debug!(title = meta.get("title").map(String::as_str), "Parsing about page");
    extract::extract_about(body)
}

fn parse_projects(content_dir: &Path) -> Vec<crate::profile::ProjectEntry> {
    let Some(text) = read_optional(&content_dir.join(PROJECTS_FILE)) else {
        return Vec::new();
    };
    let (_, body) = front_matter::split(&text);
    projects::extract(body)
}

fn parse_contact(content_dir: &Path, defaults: &ProfileDefaults) -> contact::ContactInfo {
    let contact_text = read_optional(&content_dir.join(CONTACT_FILE));
    let other_text = read_optional(&content_dir.join(OTHER_FILE));
    contact::extract(contact_text.as_deref(), other_text.as_deref(), defaults)
}

/// Read a UTF-8 document; absence or a read error means "no data".
fn read_optional(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Input document not found");
            None
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read input document");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = "tests/fixtures/content";
    const SITE: &str = "tests/fixtures/hugo.toml";

    fn fixture() -> ProfileRecord {
        parse_content(Path::new(CONTENT), Path::new(SITE), &ProfileDefaults::default())
    }

    #[test]
    fn full_fixture() {
        let record = fixture();
        let basics = &record.basics;
        assert_eq!(basics.name, "Saleh Mehdikhani");
        assert_eq!(basics.label, "System Software Engineer");
        assert_eq!(basics.email, "saleh.mehdikhani@gmail.com");
        assert_eq!(basics.phone, "+358 401234567");
        assert_eq!(basics.url, "https://example.github.io");
        assert_eq!(basics.location.city, "Tampere");
        assert_eq!(basics.location.region, "Finland");
        assert!(basics.summary.starts_with("I am a system software developer"));

        assert_eq!(record.skills.len(), 4);
        assert_eq!(record.work.len(), 3);
        assert_eq!(record.education.len(), 2);
        assert_eq!(record.projects.len(), 3);
    }

    #[test]
    fn linkedin_from_config_kept_once() {
        let record = fixture();
        let networks: Vec<&str> = record.basics.profiles.iter().map(|p| p.network.as_str()).collect();
        assert_eq!(networks, vec!["GitHub", "LinkedIn"]);
        assert_eq!(record.basics.profiles[1].username, None);
    }

    #[test]
    fn missing_everything_still_yields_record() {
        let dir = tempfile::tempdir().unwrap();
        let record = parse_content(dir.path(), &dir.path().join("hugo.toml"), &ProfileDefaults::default());
        assert_eq!(record.basics.name, "Saleh Mehdikhani");
        assert!(record.work.is_empty());
        assert!(record.projects.is_empty());
        assert!(record.basics.profiles.is_empty());
    }

    #[test]
    fn contact_linkedin_added_when_config_lacks_it() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONTACT_FILE),
            "Find me on [LinkedIn](https://www.linkedin.com/in/jane-doe)\n",
        )
        .unwrap();
        let record = parse_content(dir.path(), &dir.path().join("hugo.toml"), &ProfileDefaults::default());
        assert_eq!(record.basics.profiles.len(), 1);
        assert_eq!(record.basics.profiles[0].network, "LinkedIn");
        assert_eq!(record.basics.profiles[0].username.as_deref(), Some("jane-doe"));
    }

    #[test]
    fn idempotent_output() {
        let first = serde_json::to_string_pretty(&fixture()).unwrap();
        let second = serde_json::to_string_pretty(&fixture()).unwrap();
        assert_eq!(first, second);
    }
}
