//! Moderation panel: every testimonial, pending count, approve/unapprove
//! toggles and two-step confirmed deletes.
//!
//! The panel loads the full list on mount and subscribes to the change
//! feed, so edits from other sessions land here as background reloads. Who
//! may see the panel is decided by the app shell; this component assumes a
//! moderator is looking at it.

use gloo_console::warn;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::AdminPanel;

impl Component for AdminPanel {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AdminPanel::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if self.sync.begin_initial_load() {
                update::spawn_reload(self, ctx);
            }

            let link = ctx.link().clone();
            match self
                .store
                .subscribe(Callback::from(move |_| link.send_message(Msg::RemoteChanged)))
            {
                Ok(feed) => self.feed = Some(feed),
                Err(err) => {
                    warn!(format!("admin: realtime unavailable: {err}"));
                }
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(feed) = self.feed.take() {
            feed.unsubscribe();
        }
    }
}
