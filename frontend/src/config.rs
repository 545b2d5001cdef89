//! Deployment configuration for the hosted store.
//!
//! The host page may define a `window.__WALL_CONFIG` object with `restUrl`,
//! `realtimeUrl` and `apiKey` properties. Anything missing falls back to
//! relative paths, which assume the store is reverse-proxied under the same
//! origin.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__WALL_CONFIG";

#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    /// Base URL of the REST endpoint, without the table segment.
    pub rest_url: String,
    /// URL (or same-origin path) of the realtime websocket endpoint.
    pub realtime_url: String,
    /// API key sent as `apikey` and bearer token. Empty means none.
    pub api_key: String,
}

impl StoreConfig {
    pub fn from_window() -> Self {
        let global = window_config();
        StoreConfig {
            rest_url: string_prop(global.as_ref(), "restUrl")
                .unwrap_or_else(|| "/rest/v1".to_string()),
            realtime_url: string_prop(global.as_ref(), "realtimeUrl")
                .unwrap_or_else(|| "/realtime/v1/websocket".to_string()),
            api_key: string_prop(global.as_ref(), "apiKey").unwrap_or_default(),
        }
    }

    /// Absolute websocket URL for the realtime endpoint, including the
    /// query string the channel server expects. Same-origin paths are
    /// resolved against the current page location.
    pub fn websocket_url(&self) -> String {
        let base = if self.realtime_url.starts_with("ws://")
            || self.realtime_url.starts_with("wss://")
        {
            self.realtime_url.clone()
        } else {
            let location = web_sys::window().map(|w| w.location());
            let protocol = location
                .as_ref()
                .and_then(|l| l.protocol().ok())
                .unwrap_or_else(|| "https:".to_string());
            let host = location
                .as_ref()
                .and_then(|l| l.host().ok())
                .unwrap_or_default();
            let scheme = if protocol == "http:" { "ws" } else { "wss" };
            format!("{}://{}{}", scheme, host, self.realtime_url)
        };

        if self.api_key.is_empty() {
            format!("{}?vsn=1.0.0", base)
        } else {
            format!("{}?apikey={}&vsn=1.0.0", base, self.api_key)
        }
    }
}

fn window_config() -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

fn string_prop(config: Option<&JsValue>, key: &str) -> Option<String> {
    let config = config?;
    Reflect::get(config, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
        .filter(|s| !s.is_empty())
}
