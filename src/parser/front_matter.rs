use std::collections::BTreeMap;

const DELIMITER: &str = "+++";

/// Split an optional `+++`-delimited front matter block from the body.
///
/// The metadata block is read as flat `key = value` lines; surrounding quotes
/// are stripped from values and lines without `=` are ignored. Without a
/// complete block the whole text is the body and the map is empty.
pub fn split(content: &str) -> (BTreeMap<String, String>, &str) {
    let mut meta = BTreeMap::new();

    let Some(rest) = content.strip_prefix(DELIMITER) else {
        return (meta, content);
    };
    let Some((block, body)) = rest.split_once(DELIMITER) else {
        return (meta, content);
    };

    for line in block.trim().lines() {
        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            meta.insert(key.trim().to_string(), value.to_string());
        }
    }

    (meta, body.trim())
}
