use yew::NodeRef;

use crate::store::{ChangeFeed, TestimonialStore};
use crate::sync::SyncController;

/// State of the public wall page.
///
/// The page owns its synchronization controller and its change-feed
/// subscription; both live exactly as long as the page does.
pub struct WallPage {
    pub store: TestimonialStore,
    pub sync: SyncController,
    pub feed: Option<ChangeFeed>,
    pub modal_open: bool,
    pub submitting: bool,
    /// `data:` URI currently shown in the full-size overlay.
    pub expanded_image: Option<String>,
    pub overlay_ref: NodeRef,
}

impl WallPage {
    pub fn new() -> Self {
        WallPage {
            store: TestimonialStore::from_window(),
            sync: SyncController::new(),
            feed: None,
            modal_open: false,
            submitting: false,
            expanded_image: None,
            overlay_ref: NodeRef::default(),
        }
    }
}
