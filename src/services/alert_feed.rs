// ============================================================================
// ALERT FEED - live `sos-alert` subscription over Socket.IO
// ============================================================================
// One background task per feed. Dropping the handle stops it and closes the
// socket. Unexpected closes are retried a few times with backoff.
// ============================================================================

use futures::channel::oneshot;
use futures::{pin_mut, select, FutureExt, SinkExt, StreamExt};
use gloo_net::websocket::futures::WebSocket;
use gloo_net::websocket::Message;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use yew::Callback;

use crate::config::CONFIG;
use crate::models::{SosAlert, SosAlertPayload};
use crate::services::socket_io::{self, Packet};

pub const JOIN_ROOM_EVENT: &str = "join-volunteer-room";
pub const SOS_ALERT_EVENT: &str = "sos-alert";

const BASE_BACKOFF_MS: u32 = 1_000;
const MAX_BACKOFF_MS: u32 = 16_000;

/// Handle to a running feed; the subscription lives as long as this value
pub struct AlertFeed {
    shutdown: Option<oneshot::Sender<()>>,
}

impl AlertFeed {
    pub fn connect(volunteer_id: String, on_alert: Callback<SosAlert>) -> Self {
        let (tx, rx) = oneshot::channel();
        let url = socket_io::endpoint_url(&CONFIG.socket_base_url());
        log::info!("🔌 Opening alert feed at {}", url);

        wasm_bindgen_futures::spawn_local(run_feed(url, volunteer_id, on_alert, rx));

        Self { shutdown: Some(tx) }
    }

    /// Handle with no task behind it; the receiver sees the stop signal
    #[cfg(test)]
    pub(crate) fn detached() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (Self { shutdown: Some(tx) }, rx)
    }
}

impl Drop for AlertFeed {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// What to do after one inbound frame
#[derive(Debug, PartialEq)]
pub(crate) enum FeedStep {
    Reply(String),
    Join(String),
    Alert(SosAlertPayload),
    Closed(String),
    Nothing,
}

pub(crate) fn step(frame: &str, volunteer_id: &str) -> FeedStep {
    let packet = match socket_io::decode(frame) {
        Ok(packet) => packet,
        Err(e) => {
            log::warn!("⚠️ Dropping frame {:?}: {}", frame, e);
            return FeedStep::Nothing;
        }
    };

    match packet {
        Packet::Open(handshake) => {
            log::debug!("🤝 Engine.IO session {} (ping every {} ms)", handshake.sid, handshake.ping_interval);
            FeedStep::Reply(socket_io::encode_connect())
        }
        Packet::Ping => FeedStep::Reply(socket_io::encode_pong()),
        Packet::Connect { namespace } if namespace == "/" => FeedStep::Join(socket_io::encode_event(
            JOIN_ROOM_EVENT,
            &[Value::String(volunteer_id.to_string())],
        )),
        Packet::Event { name, mut args, .. } if name == SOS_ALERT_EVENT => {
            if args.is_empty() {
                log::warn!("⚠️ sos-alert without payload");
                return FeedStep::Nothing;
            }
            match serde_json::from_value::<SosAlertPayload>(args.swap_remove(0)) {
                Ok(payload) => FeedStep::Alert(payload),
                Err(e) => {
                    log::warn!("⚠️ Malformed sos-alert ignored: {}", e);
                    FeedStep::Nothing
                }
            }
        }
        Packet::Event { name, .. } => {
            log::debug!("Ignoring event '{}'", name);
            FeedStep::Nothing
        }
        Packet::Close => FeedStep::Closed("server closed the session".to_string()),
        Packet::Disconnect { namespace } if namespace == "/" => {
            FeedStep::Closed("server disconnected the namespace".to_string())
        }
        Packet::ConnectError { message, .. } => FeedStep::Closed(format!("connect error: {}", message)),
        _ => FeedStep::Nothing,
    }
}

enum SessionEnd {
    Shutdown,
    Lost { joined: bool, reason: String },
}

enum Incoming {
    Frame(Option<Result<Message, gloo_net::websocket::WebSocketError>>),
    Shutdown,
}

/// Delay before reconnect attempt `attempt` (1-based)
pub(crate) fn backoff_ms(attempt: u32) -> u32 {
    let shift = attempt.saturating_sub(1).min(8);
    BASE_BACKOFF_MS.saturating_mul(1 << shift).min(MAX_BACKOFF_MS)
}

async fn run_feed(
    url: String,
    volunteer_id: String,
    on_alert: Callback<SosAlert>,
    mut shutdown: oneshot::Receiver<()>,
) {
    let mut attempt: u32 = 0;

    loop {
        match run_session(&url, &volunteer_id, &on_alert, &mut shutdown).await {
            SessionEnd::Shutdown => break,
            SessionEnd::Lost { joined, reason } => {
                if joined {
                    attempt = 0;
                }
                attempt += 1;
                if attempt > CONFIG.reconnect_attempts {
                    log::error!("❌ Alert feed lost ({}), giving up after {} retries", reason, CONFIG.reconnect_attempts);
                    break;
                }

                let delay = backoff_ms(attempt);
                log::warn!("⚠️ Alert feed lost ({}), retry {} in {} ms", reason, attempt, delay);
                let sleep = TimeoutFuture::new(delay).fuse();
                pin_mut!(sleep);
                let stop = select! {
                    _ = sleep => false,
                    _ = shutdown => true,
                };
                if stop {
                    break;
                }
            }
        }
    }
    log::info!("🔌 Alert feed closed");
}

async fn run_session(
    url: &str,
    volunteer_id: &str,
    on_alert: &Callback<SosAlert>,
    mut shutdown: &mut oneshot::Receiver<()>,
) -> SessionEnd {
    let ws = match WebSocket::open(url) {
        Ok(ws) => ws,
        Err(e) => {
            return SessionEnd::Lost {
                joined: false,
                reason: e.to_string(),
            }
        }
    };

    let (mut write, read) = ws.split();
    let mut read = read.fuse();
    let mut joined = false;

    let end = loop {
        let incoming = select! {
            frame = read.next() => Incoming::Frame(frame),
            _ = shutdown => Incoming::Shutdown,
        };

        let text = match incoming {
            Incoming::Shutdown => break SessionEnd::Shutdown,
            Incoming::Frame(Some(Ok(Message::Text(text)))) => text,
            Incoming::Frame(Some(Ok(Message::Bytes(_)))) => {
                log::debug!("Ignoring binary frame");
                continue;
            }
            Incoming::Frame(Some(Err(e))) => {
                break SessionEnd::Lost { joined, reason: e.to_string() }
            }
            Incoming::Frame(None) => {
                break SessionEnd::Lost { joined, reason: "socket closed".to_string() }
            }
        };

        let outgoing = match step(&text, volunteer_id) {
            FeedStep::Reply(frame) => frame,
            FeedStep::Join(frame) => {
                log::info!("✅ Alert feed connected, joining room for {}", volunteer_id);
                joined = true;
                frame
            }
            FeedStep::Alert(payload) => {
                log::info!("🚨 SOS alert {} ({})", payload.sos_id, payload.sos_type);
                on_alert.emit(SosAlert::from_payload(payload, chrono::Utc::now()));
                continue;
            }
            FeedStep::Closed(reason) => break SessionEnd::Lost { joined, reason },
            FeedStep::Nothing => continue,
        };

        if let Err(e) = write.send(Message::Text(outgoing)).await {
            break SessionEnd::Lost { joined, reason: e.to_string() };
        }
    };

    if let Ok(ws) = read.into_inner().reunite(write) {
        let _ = ws.close(None, None);
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handshake_then_join() {
        assert_eq!(
            step(r#"0{"sid":"abc","upgrades":[],"pingInterval":25000,"pingTimeout":20000}"#, "v1"),
            FeedStep::Reply("40".into())
        );
        assert_eq!(
            step(r#"40{"sid":"xyz"}"#, "v1"),
            FeedStep::Join(r#"42["join-volunteer-room","v1"]"#.into())
        );
    }

    #[test]
    fn ping_gets_pong() {
        assert_eq!(step("2", "v1"), FeedStep::Reply("3".into()));
    }

    #[test]
    fn sos_alert_is_decoded() {
        match step(r#"42["sos-alert",{"sosId":"s9","address":"Ring Rd","type":"Accident","name":"Dev"}]"#, "v1") {
            FeedStep::Alert(payload) => {
                assert_eq!(payload.sos_id, "s9");
                assert_eq!(payload.sos_type, "Accident");
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn null_text_fields_keep_the_alert() {
        match step(
            r#"42["sos-alert",{"sosId":"s1","address":null,"type":"Medical","name":null,"location":null}]"#,
            "v1",
        ) {
            FeedStep::Alert(payload) => {
                assert_eq!(payload.sos_id, "s1");
                assert_eq!(payload.address, "");
                assert_eq!(payload.name, "");
                assert_eq!(payload.sos_type, "Medical");
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn malformed_alert_and_other_events_are_skipped() {
        assert_eq!(step(r#"42["sos-alert",{"address":"no id"}]"#, "v1"), FeedStep::Nothing);
        assert_eq!(step(r#"42["sos-alert"]"#, "v1"), FeedStep::Nothing);
        assert_eq!(step(r#"42["chat",{"sosId":"s1"}]"#, "v1"), FeedStep::Nothing);
        assert_eq!(step("garbage", "v1"), FeedStep::Nothing);
    }

    #[test]
    fn server_close_ends_session() {
        assert!(matches!(step("1", "v1"), FeedStep::Closed(_)));
        assert!(matches!(step("41", "v1"), FeedStep::Closed(_)));
        assert!(matches!(step(r#"44{"message":"nope"}"#, "v1"), FeedStep::Closed(_)));
    }

    #[test]
    fn backoff_doubles_and_caps() {
        assert_eq!(backoff_ms(1), 1_000);
        assert_eq!(backoff_ms(2), 2_000);
        assert_eq!(backoff_ms(3), 4_000);
        assert_eq!(backoff_ms(10), 16_000);
    }
}
