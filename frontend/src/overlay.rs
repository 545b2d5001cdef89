//! Full-screen overlay container with a CSS-transition friendly show/hide.
//!
//! The container is always in the DOM under a generated id; visibility is
//! toggled by adding or removing the `show` class a moment after the call,
//! so the stylesheet's transition runs.

use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct ImageOverlay {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct OverlayProps {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for ImageOverlay {
    type Message = ();
    type Properties = OverlayProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("overlay-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="image-overlay" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_overlay(overlay_ref: NodeRef) {
    toggle_overlay(overlay_ref, "add");
}

pub fn close_overlay(overlay_ref: NodeRef) {
    toggle_overlay(overlay_ref, "remove");
}

fn toggle_overlay(overlay_ref: NodeRef, operation: &str) {
    if let Some(overlay) = overlay_ref.cast::<web_sys::HtmlElement>() {
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('show')",
            overlay.id(),
            operation
        ));
        if let Some(window) = web_sys::window() {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50)
                .ok();
        }
    }
}
