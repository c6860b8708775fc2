//! Minimal Socket.IO v5 / Engine.IO v4 text codec.
//!
//! Only what the alert feed needs: handshake, heartbeat, connect to the
//! default namespace and text events. Binary packets are not supported.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Query string for a WebSocket-only Engine.IO v4 session
const ENGINE_IO_PATH: &str = "/socket.io/?EIO=4&transport=websocket";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handshake {
    pub sid: String,
    #[serde(default)]
    pub ping_interval: u64,
    #[serde(default)]
    pub ping_timeout: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Packet {
    /// Engine.IO `0`
    Open(Handshake),
    /// Engine.IO `1`
    Close,
    /// Engine.IO `2`
    Ping,
    /// Engine.IO `3`
    Pong,
    /// Engine.IO `6`
    Noop,
    /// Socket.IO `40`
    Connect { namespace: String },
    /// Socket.IO `41`
    Disconnect { namespace: String },
    /// Socket.IO `42`
    Event {
        namespace: String,
        name: String,
        args: Vec<Value>,
    },
    /// Socket.IO `44`
    ConnectError { namespace: String, message: String },
    /// Anything else we can frame but do not act on (upgrade, acks, binary)
    Ignored(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum PacketError {
    #[error("empty frame")]
    Empty,
    #[error("unknown packet type '{0}'")]
    UnknownType(char),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// `wss://host` → `wss://host/socket.io/?EIO=4&transport=websocket`
pub fn endpoint_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), ENGINE_IO_PATH)
}

pub fn encode_connect() -> String {
    "40".to_string()
}

pub fn encode_pong() -> String {
    "3".to_string()
}

/// `42["name",arg,...]` on the default namespace
pub fn encode_event(name: &str, args: &[Value]) -> String {
    let mut frame = Vec::with_capacity(args.len() + 1);
    frame.push(Value::String(name.to_string()));
    frame.extend(args.iter().cloned());
    format!("42{}", Value::Array(frame))
}

pub fn decode(frame: &str) -> Result<Packet, PacketError> {
    let mut chars = frame.chars();
    let kind = chars.next().ok_or(PacketError::Empty)?;
    let rest = chars.as_str();

    match kind {
        '0' => serde_json::from_str::<Handshake>(rest)
            .map(Packet::Open)
            .map_err(|e| PacketError::Malformed(e.to_string())),
        '1' => Ok(Packet::Close),
        '2' => Ok(Packet::Ping),
        '3' => Ok(Packet::Pong),
        '4' => decode_message(rest),
        '5' => Ok(Packet::Ignored(frame.to_string())),
        '6' => Ok(Packet::Noop),
        other => Err(PacketError::UnknownType(other)),
    }
}

fn decode_message(body: &str) -> Result<Packet, PacketError> {
    let mut chars = body.chars();
    let kind = chars.next().ok_or(PacketError::Empty)?;
    let (namespace, rest) = split_namespace(chars.as_str());

    match kind {
        '0' => Ok(Packet::Connect { namespace }),
        '1' => Ok(Packet::Disconnect { namespace }),
        '2' => {
            let payload = rest.trim_start_matches(|c: char| c.is_ascii_digit());
            let mut items = match serde_json::from_str::<Value>(payload) {
                Ok(Value::Array(items)) => items,
                Ok(_) => return Err(PacketError::Malformed("event payload is not an array".into())),
                Err(e) => return Err(PacketError::Malformed(e.to_string())),
            };
            if items.is_empty() {
                return Err(PacketError::Malformed("event without a name".into()));
            }
            let name = match items.remove(0) {
                Value::String(name) => name,
                _ => return Err(PacketError::Malformed("event name is not a string".into())),
            };
            Ok(Packet::Event { namespace, name, args: items })
        }
        '4' => {
            let message = serde_json::from_str::<Value>(rest)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| rest.to_string());
            Ok(Packet::ConnectError { namespace, message })
        }
        '3' | '5' | '6' => Ok(Packet::Ignored(format!("4{}", body))),
        other => Err(PacketError::UnknownType(other)),
    }
}

/// Splits a leading `/ns,` off a Socket.IO body; default namespace is `/`
fn split_namespace(body: &str) -> (String, &str) {
    if body.starts_with('/') {
        match body.find(',') {
            Some(idx) => (body[..idx].to_string(), &body[idx + 1..]),
            None => (body.to_string(), ""),
        }
    } else {
        ("/".to_string(), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_engine_handshake() {
        let packet = decode(
            r#"0{"sid":"lv_VI97HAXpY6yYWAAAC","upgrades":[],"pingInterval":25000,"pingTimeout":20000,"maxPayload":1000000}"#,
        )
        .unwrap();
        assert_eq!(
            packet,
            Packet::Open(Handshake {
                sid: "lv_VI97HAXpY6yYWAAAC".into(),
                ping_interval: 25000,
                ping_timeout: 20000,
            })
        );
    }

    #[test]
    fn heartbeat_frames() {
        assert_eq!(decode("2").unwrap(), Packet::Ping);
        assert_eq!(decode("3").unwrap(), Packet::Pong);
        assert_eq!(encode_pong(), "3");
    }

    #[test]
    fn connect_ack_on_default_namespace() {
        assert_eq!(
            decode(r#"40{"sid":"wZX3oN0bSVIhsaknAAAI"}"#).unwrap(),
            Packet::Connect { namespace: "/".into() }
        );
        assert_eq!(encode_connect(), "40");
    }

    #[test]
    fn decodes_sos_alert_event() {
        let packet = decode(r#"42["sos-alert",{"sosId":"a1","type":"Medical"}]"#).unwrap();
        assert_eq!(
            packet,
            Packet::Event {
                namespace: "/".into(),
                name: "sos-alert".into(),
                args: vec![json!({"sosId":"a1","type":"Medical"})],
            }
        );
    }

    #[test]
    fn event_with_namespace_and_ack_id() {
        let packet = decode(r#"42/admin,13["hello",1]"#).unwrap();
        assert_eq!(
            packet,
            Packet::Event {
                namespace: "/admin".into(),
                name: "hello".into(),
                args: vec![json!(1)],
            }
        );
    }

    #[test]
    fn encodes_room_join() {
        assert_eq!(
            encode_event("join-volunteer-room", &[json!("v42")]),
            r#"42["join-volunteer-room","v42"]"#
        );
    }

    #[test]
    fn connect_error_message() {
        assert_eq!(
            decode(r#"44{"message":"Not authorized"}"#).unwrap(),
            Packet::ConnectError { namespace: "/".into(), message: "Not authorized".into() }
        );
    }

    #[test]
    fn rejects_bad_frames() {
        assert_eq!(decode(""), Err(PacketError::Empty));
        assert_eq!(decode("9"), Err(PacketError::UnknownType('9')));
        assert!(matches!(decode(r#"42{"not":"array"}"#), Err(PacketError::Malformed(_))));
        assert!(matches!(decode("42[]"), Err(PacketError::Malformed(_))));
    }

    #[test]
    fn upgrade_and_acks_are_ignored() {
        assert!(matches!(decode("5").unwrap(), Packet::Ignored(_)));
        assert!(matches!(decode("431[]").unwrap(), Packet::Ignored(_)));
        assert_eq!(decode("6").unwrap(), Packet::Noop);
    }

    #[test]
    fn endpoint_appends_engine_path() {
        assert_eq!(
            endpoint_url("wss://quickaid.test/"),
            "wss://quickaid.test/socket.io/?EIO=4&transport=websocket"
        );
    }
}
