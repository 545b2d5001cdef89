use common::model::testimonial::Testimonial;

use crate::store::StoreError;

pub enum Msg {
    Loaded(Result<Vec<Testimonial>, StoreError>),
    RemoteChanged,
    /// A click on a row's delete button: arms the row or, on a second click
    /// inside the window, confirms the delete.
    DeleteTrigger(String),
    ConfirmWindowElapsed {
        id: String,
        generation: u32,
    },
    /// Focus left the armed button.
    Disarm,
    DeleteResolved {
        id: String,
        result: Result<bool, StoreError>,
    },
    ToggleApproval {
        id: String,
        approve: bool,
    },
    ApprovalResolved {
        id: String,
        approve: bool,
        result: Result<bool, StoreError>,
    },
    ToggleShowApproved,
    SignOut,
}
