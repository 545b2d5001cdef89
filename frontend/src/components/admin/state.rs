use crate::store::{ChangeFeed, TestimonialStore};
use crate::sync::SyncController;

/// State of the moderation panel.
///
/// The panel sees every testimonial, approved or not. Its controller and
/// change-feed subscription belong to this instance alone.
pub struct AdminPanel {
    pub store: TestimonialStore,
    pub sync: SyncController,
    pub feed: Option<ChangeFeed>,
    /// Client-side filter for the table; the fetched list is always full.
    pub show_approved_only: bool,
}

impl AdminPanel {
    pub fn new() -> Self {
        AdminPanel {
            store: TestimonialStore::from_window(),
            sync: SyncController::new(),
            feed: None,
            show_approved_only: false,
        }
    }
}
