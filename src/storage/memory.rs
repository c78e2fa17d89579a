use super::*;

use std::collections::HashMap;
use std::sync::Mutex;

/// Volatile store, mainly for tests. Shares the `KvStore` contract with
/// the durable mediums so callers cannot tell the difference.
#[derive(Default)]
pub struct MemStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let data = self.data.lock()?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut data = self.data.lock()?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn set_overwrites_previous_value() -> Result<(), AppError> {
        let store = MemStore::new();

        assert!(store.get("favorites")?.is_none());

        store.set("favorites", "[]")?;
        store.set("favorites", "[1]")?;

        assert_eq!(store.get("favorites")?.as_deref(), Some("[1]"));
        Ok(())
    }
}
