use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::tutor::TutorProfile;
use crate::errors::AppError;
use crate::storage::{self, KvStore};

/// Storage key shared by every card in the process.
pub const FAVORITES_KEY: &str = "favorites";

/// Ordered list of favorited tutors. At most one entry per tutor id;
/// insertion order is display order and nothing more.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Favorites {
    tutors: Vec<TutorProfile>,
}

impl Favorites {
    pub fn contains(&self, id: u64) -> bool {
        self.tutors.iter().any(|tutor| tutor.id == id)
    }

    /// Append `tutor` unless an entry with the same id is already stored.
    /// Returns false and leaves the list untouched on a duplicate.
    pub fn insert(&mut self, tutor: TutorProfile) -> bool {
        if self.contains(tutor.id) {
            return false;
        }

        self.tutors.push(tutor);
        true
    }

    /// Remove the entry with `id`. Returns false when no entry matched.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.tutors.len();
        self.tutors.retain(|tutor| tutor.id != id);
        before != self.tutors.len()
    }

    pub fn len(&self) -> usize {
        self.tutors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tutors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TutorProfile> {
        self.tutors.iter()
    }
}

/// Durable home of the favorite list. One instance is shared by all cards;
/// the write guard serializes every load-mutate-save so toggles from two
/// cards cannot interleave on the single stored blob.
pub struct FavoriteStore {
    storage: Box<dyn KvStore>,
    write_guard: Mutex<()>,
}

impl FavoriteStore {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self::with_storage(storage::parse_store(None)?))
    }

    pub fn with_storage(storage: Box<dyn KvStore>) -> Self {
        Self {
            storage,
            write_guard: Mutex::new(()),
        }
    }

    /// Read the whole collection. A key that was never written is the valid
    /// empty state; bytes that no longer decode are reported, not discarded.
    pub fn load(&self) -> Result<Favorites, AppError> {
        match self.storage.get(FAVORITES_KEY)? {
            None => Ok(Favorites::default()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|err| AppError::Corruption(err.to_string()))
            }
        }
    }

    /// Overwrite the stored blob with the full collection. There is no
    /// per-entry key, every save rewrites the whole list.
    pub fn save(&self, favorites: &Favorites) -> Result<(), AppError> {
        let raw = serde_json::to_string(favorites)
            .map_err(|err| AppError::Persistence(err.to_string()))?;

        self.storage.set(FAVORITES_KEY, &raw)
    }

    /// Authoritative membership read, used to derive the initial flag of a
    /// freshly rendered card.
    pub fn is_favorited(&self, id: u64) -> Result<bool, AppError> {
        Ok(self.load()?.contains(id))
    }

    /// Flip `tutor`'s membership and return the new favorited state.
    ///
    /// A removal whose id is absent and an insert whose id is already
    /// stored both mean the caller's flag had diverged from the stored
    /// list; the list is left consistent and the divergence is logged.
    pub fn toggle(
        &self,
        tutor: &TutorProfile,
        currently_favorited: bool,
    ) -> Result<bool, AppError> {
        let _guard = self.write_guard.lock()?;

        let mut favorites = self.load()?;

        if currently_favorited {
            if !favorites.remove(tutor.id) {
                tracing::warn!(id = tutor.id, "unfavorite: id was not in the stored list");
            }
        } else if !favorites.insert(tutor.clone()) {
            tracing::warn!(id = tutor.id, "favorite: id was already in the stored list");
        }

        self.save(&favorites)?;

        Ok(!currently_favorited)
    }

    pub fn get_medium(&self) -> &str {
        self.storage.get_medium()
    }
}
