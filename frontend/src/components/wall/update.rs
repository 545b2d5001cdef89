//! Message handling for the public wall.
//!
//! The wall shows approved testimonials only. Loads and reloads go through
//! the page's `SyncController`; submissions go through the store's `create`
//! and end in a toast either way. A fresh submission does not appear on the
//! wall because it starts unapproved.

use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::overlay::{close_overlay, open_overlay};
use crate::toast::{show_error, show_success};

use super::messages::Msg;
use super::state::WallPage;

pub fn update(page: &mut WallPage, ctx: &Context<WallPage>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(result) => {
            let follow_up = match result {
                Ok(items) => page.sync.loaded(Some(items)),
                Err(err) => {
                    error!(format!("wall: loading testimonials failed: {err}"));
                    show_error("Could not load testimonials. Please refresh the page.");
                    page.sync.loaded(None)
                }
            };
            if follow_up {
                spawn_reload(page, ctx);
            }
            true
        }
        Msg::RemoteChanged => {
            if page.sync.invalidated() {
                spawn_reload(page, ctx);
            }
            false
        }
        Msg::OpenModal => {
            page.modal_open = true;
            true
        }
        Msg::CloseModal => {
            if !page.submitting {
                page.modal_open = false;
            }
            true
        }
        Msg::Submit(draft, image) => {
            if page.submitting {
                return false;
            }
            page.submitting = true;
            let store = page.store.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::SubmitResolved(store.create(draft, image).await));
            });
            true
        }
        Msg::SubmitResolved(result) => {
            page.submitting = false;
            match result {
                Ok(_) => {
                    page.modal_open = false;
                    show_success("Thank you for sharing your story! It will appear once approved.");
                }
                Err(err) => {
                    error!(format!("wall: submission failed: {err}"));
                    show_error("Could not submit your testimonial. Please try again.");
                }
            }
            true
        }
        Msg::ExpandImage(data_uri) => {
            page.expanded_image = Some(data_uri);
            open_overlay(page.overlay_ref.clone());
            true
        }
        Msg::CloseImage => {
            page.expanded_image = None;
            close_overlay(page.overlay_ref.clone());
            true
        }
    }
}

pub fn spawn_reload(page: &WallPage, ctx: &Context<WallPage>) {
    let store = page.store.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        link.send_message(Msg::Loaded(store.list(false).await));
    });
}
