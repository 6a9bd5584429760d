//! File readers and writer
//!
//! Source format is sniffed from the file extension: `.txt` is one record
//! holding the whole file, `.json` is an array of strings, `.yaml`/`.yml`
//! is a string document or a list of strings. Output is always a JSON
//! array of strings. Unsupported extensions fail before any analysis.

use crate::domain::{Result, SkjoldError};
use std::fs;
use std::path::Path;

/// Read an ordered record sequence from a source file
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();

    match extension(path).as_deref() {
        Some("txt") => {
            let text = fs::read_to_string(path)
                .map_err(|e| SkjoldError::Io(format!("Failed to read {}: {e}", path.display())))?;
            Ok(vec![text])
        }
        Some("json") => {
            let content = fs::read_to_string(path)
                .map_err(|e| SkjoldError::Io(format!("Failed to read {}: {e}", path.display())))?;
            let records: Vec<String> = serde_json::from_str(&content).map_err(|e| {
                SkjoldError::Serialization(format!(
                    "{} must contain a JSON array of strings: {e}",
                    path.display()
                ))
            })?;
            Ok(records)
        }
        Some("yaml") | Some("yml") => {
            let content = fs::read_to_string(path)
                .map_err(|e| SkjoldError::Io(format!("Failed to read {}: {e}", path.display())))?;
            read_yaml_records(&content, path)
        }
        _ => Err(SkjoldError::Configuration(format!(
            "Source file must be a .txt, .json or .yaml file: {}",
            path.display()
        ))),
    }
}

/// Interpret a YAML document as records
fn read_yaml_records(content: &str, path: &Path) -> Result<Vec<String>> {
    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| {
        SkjoldError::Serialization(format!("Failed to parse {}: {e}", path.display()))
    })?;

    match value {
        serde_yaml::Value::String(text) => Ok(vec![text]),
        serde_yaml::Value::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                serde_yaml::Value::String(text) => Ok(text),
                other => Err(SkjoldError::Serialization(format!(
                    "{} must contain strings only, found: {other:?}",
                    path.display()
                ))),
            })
            .collect(),
        other => Err(SkjoldError::Serialization(format!(
            "{} must be a string or a list of strings, found: {other:?}",
            path.display()
        ))),
    }
}

/// Write redacted records as a JSON array of strings
pub fn write_records(path: impl AsRef<Path>, records: &[String]) -> Result<()> {
    let path = path.as_ref();

    if extension(path).as_deref() != Some("json") {
        return Err(SkjoldError::Configuration(format!(
            "Target file must be a .json file: {}",
            path.display()
        )));
    }

    let json = serde_json::to_string(records)?;
    fs::write(path, json)
        .map_err(|e| SkjoldError::Io(format!("Failed to write {}: {e}", path.display())))?;

    Ok(())
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_txt_is_one_record() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "input.txt", "Hun er 25 år gammel.\nMer tekst.");

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].contains("Mer tekst."));
    }

    #[test]
    fn test_read_json_array() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "input.json", r#"["første", "andre"]"#);

        let records = read_records(&path).unwrap();
        assert_eq!(records, vec!["første".to_string(), "andre".to_string()]);
    }

    #[test]
    fn test_read_json_wrong_shape() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "input.json", r#"{"text": "ikke en liste"}"#);

        assert!(matches!(
            read_records(&path),
            Err(SkjoldError::Serialization(_))
        ));
    }

    #[test]
    fn test_read_yaml_string() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "input.yaml", "Møtet er 1. januar 2019.");

        let records = read_records(&path).unwrap();
        assert_eq!(records, vec!["Møtet er 1. januar 2019.".to_string()]);
    }

    #[test]
    fn test_read_yaml_list() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "input.yml", "- første\n- andre\n");

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_read_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "input.csv", "a;b;c");

        assert!(matches!(
            read_records(&path),
            Err(SkjoldError::Configuration(_))
        ));
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.json");
        let records = vec!["Hun er <DATE>.".to_string(), "uendret".to_string()];

        write_records(&path, &records).unwrap();
        let read_back = read_records(&path).unwrap();
        assert_eq!(read_back, records);
    }

    #[test]
    fn test_write_preserves_norwegian_characters() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.json");

        write_records(&path, &["påske og jul".to_string()]).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        // UTF-8 on disk, not escape sequences
        assert!(content.contains("påske"));
    }

    #[test]
    fn test_write_rejects_non_json_target() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.txt");

        assert!(matches!(
            write_records(&path, &[]),
            Err(SkjoldError::Configuration(_))
        ));
    }
}
