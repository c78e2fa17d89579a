use std::sync::Arc;

use super::favorites::FavoriteStore;
use super::tutor::TutorProfile;
use crate::errors::AppError;
use crate::remote::ConnectionsApi;

/// One rendered tutor card. Holds the local favorited flag for its tutor
/// and forwards toggles to the shared store. The flag is a cache of
/// membership in the stored list, never the source of truth.
pub struct TutorCard {
    pub tutor: TutorProfile,
    favorited: bool,
    store: Arc<FavoriteStore>,
    connections: ConnectionsApi,
}

impl TutorCard {
    /// `favorited` is supplied by the caller, derived from an earlier
    /// `FavoriteStore::is_favorited` read.
    pub fn new(tutor: TutorProfile, favorited: bool, store: Arc<FavoriteStore>) -> Self {
        Self::with_connections(tutor, favorited, store, ConnectionsApi::new())
    }

    pub fn with_connections(
        tutor: TutorProfile,
        favorited: bool,
        store: Arc<FavoriteStore>,
        connections: ConnectionsApi,
    ) -> Self {
        Self {
            tutor,
            favorited,
            store,
            connections,
        }
    }

    pub fn is_favorited(&self) -> bool {
        self.favorited
    }

    /// Toggle the tutor's membership in the durable list. The local flag is
    /// assigned only after the write went through; on failure it keeps its
    /// previous value and the error propagates to the caller.
    pub fn toggle_favorite(&mut self) -> Result<bool, AppError> {
        self.favorited = self.store.toggle(&self.tutor, self.favorited)?;
        Ok(self.favorited)
    }

    /// Record the contact event and hand back the deep link for the host OS
    /// to open. A failed recording must not block the handoff.
    pub fn link_to_whatsapp(&self) -> String {
        if let Err(err) = self.connections.record_connection(self.tutor.id) {
            tracing::warn!(id = self.tutor.id, "connection not recorded: {err}");
        }

        self.tutor.whatsapp_link()
    }
}
