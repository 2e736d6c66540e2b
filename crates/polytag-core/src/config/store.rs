//! Store for loading declaration files from disk.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::{DeclarationsFile, parser};

/// Handle on a declarations file path. Declarations are hand-authored
/// inputs; the store reads them but never writes.
#[derive(Debug, Clone)]
pub struct DeclarationStore {
    path: PathBuf,
}

impl DeclarationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> anyhow::Result<DeclarationsFile> {
        if !self.path.exists() {
            anyhow::bail!("Declarations file not found: {}", self.path.display());
        }
        parser::parse_declarations(&self.path)
            .with_context(|| format!("Failed to load declarations: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_from_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(
            temp,
            r#"
[types."Shape"]
use = "name"
"#
        )
        .unwrap();

        let store = DeclarationStore::new(temp.path());
        let file = store.load().unwrap();
        assert_eq!(file.types.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let store = DeclarationStore::new("/nonexistent/declarations.toml");
        let err = store.load().unwrap_err().to_string();
        assert!(err.contains("not found"));
    }
}
