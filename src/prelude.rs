pub use crate::domain::{
    card::TutorCard,
    favorites::{FAVORITES_KEY, FavoriteStore, Favorites},
    tutor::TutorProfile,
};
pub use crate::errors::AppError;
pub use crate::remote::ConnectionsApi;
pub use crate::storage::{
    KvStore, StorageMediums, file::FileStore, memory::MemStore, parse_store,
};
