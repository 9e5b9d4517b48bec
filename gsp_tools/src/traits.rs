use serde_json::Value;

use crate::{EchoRequest, GspApiError};

/// The `PushProvisioning` trait defines the two secure-serving operations the sample relays.
///
/// The concrete implementation is [`crate::GspApi`]. Server handlers are generic over this trait so that
/// endpoint tests can swap in a mock and never touch the network.
///
/// Both operations return the *decrypted* upstream response body verbatim. The sample does not parse or
/// validate responses; it is a pass-through demonstration.
#[allow(async_fn_in_trait)]
pub trait PushProvisioning {
    /// Sends an `echo` request and returns the decrypted response body.
    async fn echo(&self, request: EchoRequest) -> Result<String, GspApiError>;

    /// Sends a fully assembled `pushProvisioningNotification` body and returns the decrypted response
    /// body. The caller is responsible for the body's shape; see the server's template assembly.
    async fn push_provisioning_notification(&self, notification: Value) -> Result<String, GspApiError>;
}
