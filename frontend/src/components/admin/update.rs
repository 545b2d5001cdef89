//! Message handling for the moderation panel.
//!
//! Every mutation follows the same shape: ask the controller whether the
//! operation may start, spawn the store call if so, and report the outcome
//! with a toast when it resolves. The controller's per-row guards make a
//! second click on a busy row a no-op rather than a second request.

use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::session;
use crate::sync::{ArmOutcome, CONFIRM_WINDOW_MS};
use crate::toast::{show_error, show_success};

use super::messages::Msg;
use super::state::AdminPanel;

pub fn update(panel: &mut AdminPanel, ctx: &Context<AdminPanel>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(result) => {
            let follow_up = match result {
                Ok(items) => panel.sync.loaded(Some(items)),
                Err(err) => {
                    error!(format!("admin: loading testimonials failed: {err}"));
                    show_error("Error loading testimonials. Please refresh the page.");
                    panel.sync.loaded(None)
                }
            };
            if follow_up {
                spawn_reload(panel, ctx);
            }
            true
        }
        Msg::RemoteChanged => {
            if panel.sync.invalidated() {
                spawn_reload(panel, ctx);
            }
            false
        }
        Msg::DeleteTrigger(id) => match panel.sync.arm_delete(&id) {
            ArmOutcome::Armed(generation) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(CONFIRM_WINDOW_MS).await;
                    link.send_message(Msg::ConfirmWindowElapsed { id, generation });
                });
                true
            }
            ArmOutcome::Confirmed => {
                start_delete(panel, ctx, id);
                true
            }
            ArmOutcome::Ignored => false,
        },
        Msg::ConfirmWindowElapsed { id, generation } => {
            panel.sync.disarm_expired(&id, generation);
            true
        }
        Msg::Disarm => {
            panel.sync.disarm();
            true
        }
        Msg::DeleteResolved { id, result } => {
            panel.sync.delete_resolved(&id);
            match result {
                Ok(true) => {
                    panel.sync.apply_removal(&id);
                    show_success("Testimonial deleted successfully");
                }
                Ok(false) => {
                    // Someone else got there first; drop our stale copy too.
                    panel.sync.apply_removal(&id);
                    show_error("Testimonial was already removed.");
                }
                Err(err) => {
                    error!(format!("admin: delete failed: {err}"));
                    show_error("Failed to delete testimonial. Please try again.");
                }
            }
            true
        }
        Msg::ToggleApproval { id, approve } => {
            if !panel.sync.begin_approval(&id) {
                return false;
            }
            let store = panel.store.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = store.set_approval(&id, approve).await;
                link.send_message(Msg::ApprovalResolved {
                    id,
                    approve,
                    result,
                });
            });
            true
        }
        Msg::ApprovalResolved {
            id,
            approve,
            result,
        } => {
            panel.sync.approval_resolved(&id);
            match result {
                Ok(true) => {
                    panel.sync.apply_approval(&id, approve);
                    show_success(if approve {
                        "Testimonial approved successfully"
                    } else {
                        "Testimonial unapproved successfully"
                    });
                }
                Ok(false) => {
                    show_error("Testimonial no longer exists.");
                }
                Err(err) => {
                    error!(format!("admin: approval update failed: {err}"));
                    show_error("Error updating testimonial approval. Please try again.");
                }
            }
            true
        }
        Msg::ToggleShowApproved => {
            panel.show_approved_only = !panel.show_approved_only;
            true
        }
        Msg::SignOut => {
            session::sign_out();
            false
        }
    }
}

fn start_delete(panel: &mut AdminPanel, ctx: &Context<AdminPanel>, id: String) {
    if !panel.sync.begin_delete(&id) {
        return;
    }
    let store = panel.store.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = store.remove(&id).await;
        link.send_message(Msg::DeleteResolved { id, result });
    });
}

pub fn spawn_reload(panel: &AdminPanel, ctx: &Context<AdminPanel>) {
    let store = panel.store.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        link.send_message(Msg::Loaded(store.list(true).await));
    });
}
