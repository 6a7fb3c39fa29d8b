use std::fs;
use std::path::Path;

/// Binary name declared in a Cargo.toml-style manifest, best effort.
///
/// Scans lines for the first `name = "..."` assignment and returns the value
/// with whitespace and surrounding quotes stripped. The first matching line
/// wins even when a later manifest section declares its own `name` key.
/// A missing or unreadable manifest yields `None`, never an error.
pub fn binary_name(manifest_path: &Path) -> Option<String> {
    let content = fs::read_to_string(manifest_path).ok()?;
    for line in content.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix("name") else {
            continue;
        };
        if let Some(value) = rest.trim_start().strip_prefix('=') {
            return Some(value.trim().trim_matches('"').to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_manifest(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp manifest");
        file.write_all(content.as_bytes()).expect("write manifest");
        file
    }

    #[test]
    fn name_value_is_unquoted_and_trimmed() {
        let file = write_manifest("[package]\nname = \"foo-bar\"\nversion = \"0.1.0\"\n");
        assert_eq!(binary_name(file.path()), Some("foo-bar".to_string()));
    }

    #[test]
    fn first_name_line_wins_across_sections() {
        let file = write_manifest(
            "[lib]\nname = \"first\"\n\n[package]\nname = \"second\"\n",
        );
        assert_eq!(binary_name(file.path()), Some("first".to_string()));
    }

    #[test]
    fn name_without_equals_is_skipped() {
        let file = write_manifest("nameless line\nname = \"actual\"\n");
        assert_eq!(binary_name(file.path()), Some("actual".to_string()));
    }

    #[test]
    fn indented_and_unspaced_assignments_match() {
        let file = write_manifest("  name=\"tight\"\n");
        assert_eq!(binary_name(file.path()), Some("tight".to_string()));
    }

    #[test]
    fn missing_manifest_yields_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(binary_name(&dir.path().join("Cargo.toml")), None);
    }

    #[test]
    fn manifest_without_name_yields_none() {
        let file = write_manifest("[package]\nversion = \"0.1.0\"\n");
        assert_eq!(binary_name(file.path()), None);
    }
}
