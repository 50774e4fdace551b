use super::backend::KeyValueBackend;
use crate::error::{NotesError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-per-key storage rooted in the data directory.
///
/// The value for `key` lives in `<root>/<key>.json`. The root directory is
/// created lazily on the first write.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(NotesError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotesError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(NotesError::Io)?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let target_path = self.key_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(NotesError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &target_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(NotesError::Io(e));
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(path).map_err(NotesError::Io)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileBackend) {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("data"));
        (dir, backend)
    }

    #[test]
    fn missing_key_reads_as_none() {
        let (_dir, backend) = setup();
        assert_eq!(backend.get("pocket-notes").unwrap(), None);
    }

    #[test]
    fn set_get_remove() {
        let (_dir, backend) = setup();
        backend.set("pocket-notes", "[]").unwrap();
        assert_eq!(backend.get("pocket-notes").unwrap(), Some("[]".to_string()));

        backend.set("pocket-notes", "[1]").unwrap();
        assert_eq!(backend.get("pocket-notes").unwrap(), Some("[1]".to_string()));

        backend.remove("pocket-notes").unwrap();
        assert_eq!(backend.get("pocket-notes").unwrap(), None);
        backend.remove("pocket-notes").unwrap();
    }

    #[test]
    fn writes_leave_no_tmp_files() {
        let (_dir, backend) = setup();
        backend.set("notes", "value").unwrap();

        let on_disk = fs::read_to_string(backend.root().join("notes.json")).unwrap();
        assert_eq!(on_disk, "value");

        for entry in fs::read_dir(backend.root()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn rejects_keys_that_escape_root() {
        let (_dir, backend) = setup();
        assert!(matches!(
            backend.set("../evil", "x"),
            Err(NotesError::Store(_))
        ));
        assert!(backend.key_path(".hidden").is_err());
        assert!(backend.key_path("").is_err());
    }
}
