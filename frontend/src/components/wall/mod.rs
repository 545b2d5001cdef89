//! Public testimonial wall: the approved list, the submission wizard, and
//! a full-size overlay for LinkedIn screenshots.
//!
//! On first render the page starts its initial load and opens the change
//! feed, so a testimonial approved in the admin panel shows up here without
//! a refresh. The subscription is released when the page goes away.

use gloo_console::warn;
use yew::prelude::*;

mod card;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::WallPage;

impl Component for WallPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        WallPage::new()
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
                    // The wall still works without live updates.
                    warn!(format!("wall: realtime unavailable: {err}"));
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
