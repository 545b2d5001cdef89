//! Temporary notification messages at the bottom of the screen.
//!
//! Every mutating action on the wall ends in one of these: a green toast on
//! success, a red one on failure. The toast removes itself after a few
//! seconds.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const DISMISS_AFTER_MS: u32 = 4000;

pub fn show_success(message: &str) {
    show(message, "#2e7d32");
}

pub fn show_error(message: &str) {
    show(message, "#c62828");
}

fn show(message: &str, background: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "inherit").ok();
                style.set_property("box-shadow", "0 2px 8px rgba(0,0,0,0.25)").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
