//! TOML parser for declaration files with helpful error messages

use anyhow::{Context, Result};
use std::path::Path;

use super::schema::DeclarationsFile;

/// Parse a declarations file with detailed error messages
pub fn parse_declarations(path: &Path) -> Result<DeclarationsFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read declarations file: {}", path.display()))?;

    parse_declarations_str(&content)
        .with_context(|| format!("Failed to parse declarations file: {}", path.display()))
}

/// Parse declarations content from string
pub fn parse_declarations_str(content: &str) -> Result<DeclarationsFile> {
    let file: DeclarationsFile =
        toml::from_str(content).map_err(|e| enhance_toml_error(e, content))?;

    file.validate()?;

    Ok(file)
}

/// Enhance TOML parsing errors with helpful context
fn enhance_toml_error(error: toml::de::Error, content: &str) -> anyhow::Error {
    let error_msg = error.to_string();

    let line_hint = error_msg
        .lines()
        .find(|line| line.contains("line "))
        .and_then(|line| {
            line.split("line ")
                .nth(1)
                .and_then(|s| s.split_whitespace().next())
                .and_then(|s| s.parse::<usize>().ok())
        });

    if let Some(line_num) = line_hint {
        let context = get_line_context(content, line_num);
        anyhow::anyhow!(
            "TOML parsing error at line {}:\n{}\n\nError: {}",
            line_num,
            context,
            error_msg
        )
    } else {
        anyhow::anyhow!("TOML parsing error: {}", error_msg)
    }
}

/// Get context lines around an error
fn get_line_context(content: &str, line_num: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let start = line_num.saturating_sub(2);
    let end = (line_num + 2).min(lines.len());

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            let marker = if num == line_num { ">>>" } else { "   " };
            format!("{} {:4} | {}", marker, num, line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize a declarations file to a TOML string
pub fn to_toml(file: &DeclarationsFile) -> Result<String> {
    toml::to_string_pretty(file).with_context(|| "Failed to serialize declarations to TOML")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_declarations() {
        let toml = r#"
[types."Shape"]
use = "name"
include = "wrapper-object"

[properties."Envelope.body"]
use = "class"
default_impl = "null"
"#;

        let file = parse_declarations_str(toml).unwrap();
        assert_eq!(file.types.len(), 1);
        assert_eq!(file.properties.len(), 1);
        assert!(file.types.contains_key("Shape"));
        assert!(file.properties.contains_key("Envelope.body"));
    }

    #[test]
    fn test_parse_empty_declarations() {
        let file = parse_declarations_str("").unwrap();
        assert!(file.is_empty());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let toml = r#"
[types."Shape"
use = "name"
"#; // Missing closing bracket

        let result = parse_declarations_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_use_value() {
        let toml = r#"
[types."Shape"]
use = "klass"
"#;

        let result = parse_declarations_str(toml);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid type declaration") || err.contains("Invalid type id kind"));
    }

    #[test]
    fn test_parse_rejects_missing_use() {
        let toml = r#"
[types."Shape"]
include = "property"
"#;

        let result = parse_declarations_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let toml = r#"
[types."Shape"]
use = "name"
property = "shape-kind"
visible = true

[properties."Envelope.body"]
use = "minimal-class"
include = "external-property"
default_impl = "Blob"
skip_writing_default = true
"#;

        let original = parse_declarations_str(toml).unwrap();
        let serialized = to_toml(&original).unwrap();
        let parsed = parse_declarations_str(&serialized).unwrap();

        assert_eq!(parsed.types.len(), original.types.len());
        assert_eq!(parsed.properties.len(), original.properties.len());
        assert_eq!(parsed.types["Shape"].property, "shape-kind");
        assert_eq!(
            parsed.properties["Envelope.body"].default_impl,
            Some("Blob".to_string())
        );
    }

    #[test]
    fn test_enhance_toml_error_mentions_line() {
        let toml = "invalid = [unclosed";
        let result = parse_declarations_str(toml);
        assert!(result.is_err());

        let err = result.unwrap_err().to_string();
        assert!(err.contains("line ") || err.contains("TOML parsing error"));
    }
}
