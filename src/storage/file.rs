use super::*;

use std::env;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;

pub struct FileStore {
    pub medium: String,
    pub dir: String,
}

impl FileStore {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            medium: "file".to_string(),
            dir: env::var("FAVORITES_STORAGE_DIR").unwrap_or("./.instance".to_string()),
        })
    }

    pub fn with_dir(dir: &str) -> Self {
        Self {
            medium: "file".to_string(),
            dir: dir.to_string(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        PathBuf::from(&self.dir).join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.key_path(key);
        if !fs::exists(&path)? {
            return Ok(None);
        }

        let mut file = OpenOptions::new().read(true).open(&path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // A zero-length file is the same as a key that was never written
        if data.is_empty() {
            return Ok(None);
        }

        Ok(Some(data))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.key_path(key);
        if !path.exists() {
            create_file_parent(&path)?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        file.write_all(value.as_bytes())?;
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
