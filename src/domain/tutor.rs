use serde::{Deserialize, Serialize};

/// Snapshot of a tutor record as handed to a card. The favorites subsystem
/// stores the snapshot it was given at favorite-time and never re-fetches
/// descriptive fields, so a stored entry can lag behind the live profile.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TutorProfile {
    pub id: u64,
    pub avatar: String,
    pub bio: String,
    pub cost: f64,
    pub name: String,
    pub subject: String,
    pub whatsapp: String,
}

impl TutorProfile {
    /// Deep link for the host OS. The contact string is substituted as-is.
    pub fn whatsapp_link(&self) -> String {
        format!("whatsapp://send?phone={}", self.whatsapp)
    }
}
