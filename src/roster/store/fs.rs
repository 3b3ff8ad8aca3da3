use super::{validate_slot_name, SessionStorage};
use crate::error::{Result, RosterError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const SESSIONS_DIR: &str = "sessions";
const SLOT_EXT: &str = ".json";

/// File-backed slots for one named session.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Storage rooted directly at `root`. The directory is created lazily on
    /// the first write.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Storage for `session` under `<data_dir>/sessions/<session>`.
    pub fn for_session(data_dir: &Path, session: &str) -> Result<Self> {
        validate_slot_name(session)?;
        Ok(Self::new(data_dir.join(SESSIONS_DIR).join(session)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_slot_name(key)?;
        Ok(self.root.join(format!("{}{}", key, SLOT_EXT)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RosterError::Io)?;
        }
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RosterError::Io(e)),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        self.ensure_dir()?;

        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(RosterError::Io)?;
        fs::rename(&tmp_path, &path).map_err(RosterError::Io)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RosterError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStorage) {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::for_session(dir.path(), "default").unwrap();
        (dir, storage)
    }

    #[test]
    fn missing_slot_reads_as_none() {
        let (_dir, storage) = setup();
        assert_eq!(storage.get_item("data").unwrap(), None);
    }

    #[test]
    fn write_then_read() {
        let (dir, mut storage) = setup();
        storage.set_item("data", "{\"a\":1}").unwrap();

        let expected = dir.path().join("sessions").join("default").join("data.json");
        assert_eq!(storage.slot_path("data").unwrap(), expected);
        assert_eq!(fs::read_to_string(expected).unwrap(), "{\"a\":1}");
        assert_eq!(
            storage.get_item("data").unwrap(),
            Some("{\"a\":1}".to_string())
        );
    }

    #[test]
    fn writes_leave_no_tmp_files() {
        let (_dir, mut storage) = setup();
        storage.set_item("data", "one").unwrap();
        storage.set_item("data", "two").unwrap();

        for entry in fs::read_dir(storage.root()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn remove_is_idempotent() {
        let (_dir, mut storage) = setup();
        storage.set_item("data", "x").unwrap();
        storage.remove_item("data").unwrap();
        storage.remove_item("data").unwrap();
        assert_eq!(storage.get_item("data").unwrap(), None);
    }

    #[test]
    fn sessions_are_isolated() {
        let dir = TempDir::new().unwrap();
        let mut a = FileStorage::for_session(dir.path(), "a").unwrap();
        let b = FileStorage::for_session(dir.path(), "b").unwrap();
        a.set_item("data", "x").unwrap();
        assert_eq!(b.get_item("data").unwrap(), None);
    }

    #[test]
    fn rejects_bad_session_names() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            FileStorage::for_session(dir.path(), "../x"),
            Err(RosterError::Storage(_))
        ));
    }
}
