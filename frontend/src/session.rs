//! Admin session boundary.
//!
//! Authentication itself happens elsewhere; this module only answers "is the
//! current visitor a moderator" from a flag the login flow leaves in local
//! storage, and sends visitors without one to the login entry point.

const SESSION_KEY: &str = "wallAdminSession";
const LOGIN_PATH: &str = "/login";

pub fn is_admin() -> bool {
    local_storage()
        .and_then(|storage| storage.get_item(SESSION_KEY).ok().flatten())
        .is_some()
}

pub fn sign_out() {
    if let Some(storage) = local_storage() {
        storage.remove_item(SESSION_KEY).ok();
    }
    redirect_to_login();
}

pub fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        window.location().set_href(LOGIN_PATH).ok();
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
