pub mod file;
pub mod memory;

use crate::errors::AppError;
use dotenv::dotenv;
use std::fs;
use std::path::Path;

/// Persistent key-value text storage. Values survive process restart for
/// durable mediums and are cleared only by explicit host action.
pub trait KvStore: Send + Sync {
    /// `Ok(None)` means the key was never written, which is a valid state.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug)]
pub enum StorageMediums {
    File,
    Mem,
}

impl StorageMediums {
    pub fn is_file(&self) -> bool {
        matches!(self, StorageMediums::File)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_file() { "file" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str {
            "file" => Ok(StorageMediums::File),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

pub fn parse_store(storage_medium: Option<StorageMediums>) -> Result<Box<dyn KvStore>, AppError> {
    let medium: StorageMediums;
    if let Some(storage_medium) = storage_medium {
        medium = storage_medium;
    } else {
        dotenv().ok();

        let choice = std::env::var("FAVORITES_STORAGE").unwrap_or("file".to_string());
        medium = StorageMediums::from(&choice)?;
    }

    match medium {
        StorageMediums::File => Ok(Box::new(file::FileStore::new()?)),
        StorageMediums::Mem => Ok(Box::new(memory::MemStore::new())),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
