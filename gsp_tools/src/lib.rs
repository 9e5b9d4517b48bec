//! Client tools for Google Standard Payments' secure-serving endpoints.
//!
//! Everything needed to talk to the payment network from the sample server lives here: the wire envelope
//! (OpenPGP + base64url, see [`MessageCipher`]), the request data objects, and the [`GspApi`] client that
//! posts encrypted bodies to the `echo` and `pushProvisioningNotification` endpoints.
//!
//! Handlers should depend on the [`PushProvisioning`] trait rather than [`GspApi`] directly, so that they
//! can be exercised against a mock backend in tests.

mod api;
mod config;
mod data_objects;
mod error;
mod helpers;
mod message_cipher;
mod traits;

pub use api::GspApi;
pub use config::GspConfig;
pub use data_objects::{EchoRequest, ProtocolVersion, RequestHeader};
pub use error::GspApiError;
pub use helpers::{decode_base64url, encode_base64url};
pub use message_cipher::MessageCipher;
pub use traits::PushProvisioning;
