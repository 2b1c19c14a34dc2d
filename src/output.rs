use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::profile::ProfileRecord;

/// Pretty JSON with two-space indentation, UTF-8 kept unescaped.
pub fn to_json(record: &ProfileRecord) -> Result<String> {
    serde_json::to_string_pretty(record).context("Failed to serialize profile record")
}

/// Write the record to `path`, creating parent directories as needed.
pub fn write_json(record: &ProfileRecord, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }
    fs::write(path, to_json(record)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "Resume JSON saved");
    Ok(())
}

pub fn read_json(path: &Path) -> Result<ProfileRecord> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid profile JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::ProfileDefaults;
    use crate::parser;

    fn fixture() -> ProfileRecord {
        parser::parse_content(
            Path::new("tests/fixtures/content"),
            Path::new("tests/fixtures/hugo.toml"),
            &ProfileDefaults::default(),
        )
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build/nested/resume.json");
        let record = fixture();
        write_json(&record, &path).unwrap();
        assert_eq!(read_json(&path).unwrap(), record);
    }

    #[test]
    fn two_space_indent_and_utf8() {
        let mut record = fixture();
        record.basics.location.city = "Jyväskylä".into();
        let json = to_json(&record).unwrap();
        assert!(json.starts_with("{\n  \"basics\": {\n    \"name\""));
        assert!(json.contains("Jyväskylä"));
    }

    #[test]
    fn byte_identical_runs() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        write_json(&fixture(), &a).unwrap();
        write_json(&fixture(), &b).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }

    #[test]
    fn unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(read_json(&path).is_err());
        assert!(read_json(&dir.path().join("missing.json")).is_err());
    }
}
