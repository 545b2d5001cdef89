use yew::{html, Component, Context, Html};

use crate::components::admin::AdminPanel;
use crate::components::wall::WallPage;
use crate::session;

pub enum Route {
    Wall,
    Admin,
}

pub struct App {
    route: Route,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            route: current_route(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match self.route {
            Route::Wall => html! { <WallPage /> },
            Route::Admin => {
                if session::is_admin() {
                    html! { <AdminPanel /> }
                } else {
                    html! {
                        <div class="auth-gate">
                            <p>{"You need to sign in to moderate testimonials."}</p>
                            <a href="/login">{"Go to sign in"}</a>
                        </div>
                    }
                }
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Route::Admin = self.route {
                if !session::is_admin() {
                    session::redirect_to_login();
                }
            }
        }
    }
}

fn current_route() -> Route {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    if hash.starts_with("#/admin") {
        Route::Admin
    } else {
        Route::Wall
    }
}
