//! Submission wizard: a two-step dialog that collects a new testimonial.
//!
//! Step one chooses the kind (written or LinkedIn screenshot), step two is
//! the matching form. The wizard validates and assembles the draft; the
//! hosting page performs the actual create and owns the `submitting` flag.
//! The host mounts the component only while the dialog is open, so a fresh
//! mount is a fresh form.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UploadProps;
pub use state::UploadModal;

impl Component for UploadModal {
    type Message = Msg;
    type Properties = UploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UploadModal::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
