use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The secure-serving protocol version this sample speaks (1.0.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolVersion {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self { major: 1, minor: 0, revision: 0 }
    }
}

/// Every request body carries one of these. `request_id` must be unique per request and
/// `request_timestamp` is the unix epoch in milliseconds, as a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeader {
    pub protocol_version: ProtocolVersion,
    pub request_id: String,
    pub request_timestamp: String,
}

impl RequestHeader {
    pub fn new() -> Self {
        Self {
            protocol_version: ProtocolVersion::default(),
            request_id: Uuid::new_v4().to_string(),
            request_timestamp: Utc::now().timestamp_millis().to_string(),
        }
    }
}

impl Default for RequestHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Body for the `echo` endpoint. The network echoes `client_message` back in its response, which makes
/// this the smoke test for the whole envelope (keys, encoding and connectivity).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoRequest {
    pub request_header: RequestHeader,
    pub client_message: String,
}

impl EchoRequest {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { request_header: RequestHeader::new(), client_message: message.into() }
    }
}
