//! Change feed over the store's realtime websocket.
//!
//! The channel server speaks a Phoenix-style framing: the client joins a
//! topic, answers with periodic heartbeats, and receives one frame per row
//! change. The payload carries no ordering guarantee relative to the writes
//! themselves, so subscribers treat every frame as "something changed" and
//! reload; nothing here is applied as a delta.

use futures_util::future::{abortable, AbortHandle};
use futures_util::stream::{self, SplitSink, StreamExt};
use futures_util::SinkExt;
use gloo_console::{log, warn};
use gloo_net::websocket::{futures::WebSocket, Message, WebSocketError};
use gloo_timers::future::IntervalStream;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use super::StoreError;
use crate::config::StoreConfig;

const TOPIC: &str = "realtime:public:testimonials";
const HEARTBEAT_TOPIC: &str = "phoenix";
const HEARTBEAT_MS: u32 = 30_000;

/// Live subscription to the testimonials change feed.
///
/// Consuming the handle is the only way to release it, so the socket is
/// shut down exactly once. After `unsubscribe` returns no further
/// callbacks fire.
pub struct ChangeFeed {
    stop: AbortHandle,
}

impl ChangeFeed {
    pub fn unsubscribe(self) {
        self.stop.abort();
    }
}

pub fn subscribe(config: &StoreConfig, on_change: Callback<()>) -> Result<ChangeFeed, StoreError> {
    let url = config.websocket_url();
    let socket = WebSocket::open(&url).map_err(|err| {
        warn!(format!("realtime: could not open socket: {err}"));
        StoreError::Socket(err.to_string())
    })?;

    let (task, stop) = abortable(run_feed(socket, on_change));
    spawn_local(async move {
        // Aborted on unsubscribe; the socket closes when its halves drop.
        let _ = task.await;
    });

    Ok(ChangeFeed { stop })
}

enum FeedItem {
    Socket(Result<Message, WebSocketError>),
    Heartbeat,
}

async fn run_feed(socket: WebSocket, on_change: Callback<()>) {
    let (mut sink, source) = socket.split();
    let mut reference: u32 = 0;

    reference += 1;
    if send_frame(&mut sink, &join_frame(reference)).await.is_err() {
        warn!("realtime: could not join the testimonials channel");
        return;
    }

    let frames = source.map(FeedItem::Socket);
    let beats = IntervalStream::new(HEARTBEAT_MS).map(|_| FeedItem::Heartbeat);
    let mut feed = stream::select(frames, beats);

    while let Some(item) = feed.next().await {
        match item {
            FeedItem::Socket(Ok(Message::Text(raw))) => {
                if let Ok(frame) = serde_json::from_str::<InboundFrame>(&raw) {
                    if is_change_event(&frame.event) {
                        log!("realtime: testimonials changed");
                        on_change.emit(());
                    }
                }
            }
            FeedItem::Socket(Ok(Message::Bytes(_))) => {}
            FeedItem::Socket(Err(err)) => {
                warn!(format!("realtime: socket closed: {err}"));
                break;
            }
            FeedItem::Heartbeat => {
                reference += 1;
                if send_frame(&mut sink, &heartbeat_frame(reference)).await.is_err() {
                    break;
                }
            }
        }
    }
}

async fn send_frame(
    sink: &mut SplitSink<WebSocket, Message>,
    frame: &str,
) -> Result<(), WebSocketError> {
    sink.send(Message::Text(frame.to_string())).await
}

#[derive(Serialize)]
struct OutboundFrame<'a> {
    topic: &'a str,
    event: &'a str,
    payload: serde_json::Value,
    #[serde(rename = "ref")]
    reference: String,
}

#[derive(Deserialize)]
struct InboundFrame {
    event: String,
}

fn join_frame(reference: u32) -> String {
    frame_json(TOPIC, "phx_join", reference)
}

fn heartbeat_frame(reference: u32) -> String {
    frame_json(HEARTBEAT_TOPIC, "heartbeat", reference)
}

fn frame_json(topic: &str, event: &str, reference: u32) -> String {
    serde_json::to_string(&OutboundFrame {
        topic,
        event,
        payload: serde_json::Value::Object(serde_json::Map::new()),
        reference: reference.to_string(),
    })
    .unwrap_or_default()
}

/// Row-change events, in both framings channel servers use for them.
/// Everything else on the wire (join replies, heartbeat acks) is noise.
fn is_change_event(event: &str) -> bool {
    matches!(event, "INSERT" | "UPDATE" | "DELETE" | "postgres_changes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_frame_targets_the_testimonials_topic() {
        let frame: serde_json::Value = serde_json::from_str(&join_frame(1)).unwrap();
        assert_eq!(frame["topic"], "realtime:public:testimonials");
        assert_eq!(frame["event"], "phx_join");
        assert_eq!(frame["ref"], "1");
    }

    #[test]
    fn heartbeat_frame_goes_to_the_phoenix_topic() {
        let frame: serde_json::Value = serde_json::from_str(&heartbeat_frame(7)).unwrap();
        assert_eq!(frame["topic"], "phoenix");
        assert_eq!(frame["event"], "heartbeat");
        assert_eq!(frame["ref"], "7");
    }

    #[test]
    fn row_changes_are_recognized() {
        assert!(is_change_event("INSERT"));
        assert!(is_change_event("UPDATE"));
        assert!(is_change_event("DELETE"));
        assert!(is_change_event("postgres_changes"));
    }

    #[test]
    fn protocol_chatter_is_ignored() {
        assert!(!is_change_event("phx_reply"));
        assert!(!is_change_event("phx_close"));
        assert!(!is_change_event("heartbeat"));
    }
}
