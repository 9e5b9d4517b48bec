use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};
use serde_json::Value;

use crate::{
    config::GspConfig,
    data_objects::EchoRequest,
    helpers::{decode_base64url, encode_base64url},
    GspApiError,
    MessageCipher,
    PushProvisioning,
};

/// Client for the payment network's secure-serving endpoints.
///
/// Every call runs the same round trip: serialize the body, sign-and-encrypt it with the
/// [`MessageCipher`], base64url the armored text, POST it as an octet stream, then base64url-decode and
/// decrypt the response body.
#[derive(Clone)]
pub struct GspApi {
    config: GspConfig,
    cipher: MessageCipher,
    client: Arc<Client>,
}

impl GspApi {
    pub fn new(config: GspConfig, cipher: MessageCipher) -> Result<Self, GspApiError> {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/octet-stream"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| GspApiError::Initialization(e.to_string()))?;
        Ok(Self { config, cipher, client: Arc::new(client) })
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("https://{}/secure-serving/gsp/v1/{endpoint}/{}", self.config.host, self.config.piaid)
    }

    /// Encrypts `plaintext`, posts it to the given endpoint and returns the decrypted response body.
    pub async fn secure_post(&self, endpoint: &str, plaintext: &str) -> Result<String, GspApiError> {
        let url = self.url(endpoint);
        trace!("📨️ Sending secure-serving request to {url}");
        let armored = self.cipher.encrypt(plaintext)?;
        let body = encode_base64url(armored);
        let response = self.client.post(&url).body(body).send().await.map_err(|e| {
            GspApiError::RequestError(format!("Error occurred while attempting to call {url}: {e}"))
        })?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| GspApiError::ResponseError(e.to_string()))?;
            return Err(GspApiError::QueryError { status, message });
        }
        trace!("📨️ Secure-serving request to {url} succeeded");
        let encoded = response.text().await.map_err(|e| GspApiError::ResponseError(e.to_string()))?;
        let encrypted = decode_base64url(&encoded)?;
        self.cipher.decrypt(&encrypted)
    }
}

impl PushProvisioning for GspApi {
    async fn echo(&self, request: EchoRequest) -> Result<String, GspApiError> {
        let request_id = request.request_header.request_id.clone();
        let plaintext = serde_json::to_string(&request).map_err(|e| GspApiError::JsonError(e.to_string()))?;
        debug!("📨️ Sending echo request {request_id}");
        let response = self.secure_post("echo", &plaintext).await?;
        info!("📨️ Echo request {request_id} completed");
        Ok(response)
    }

    async fn push_provisioning_notification(&self, notification: Value) -> Result<String, GspApiError> {
        let request_id = notification["requestHeader"]["requestId"].as_str().unwrap_or("<unset>").to_string();
        let plaintext =
            serde_json::to_string(&notification).map_err(|e| GspApiError::JsonError(e.to_string()))?;
        debug!("📨️ Sending push provisioning notification {request_id}");
        let response = self.secure_post("pushProvisioningNotification", &plaintext).await?;
        info!("📨️ Push provisioning notification {request_id} delivered");
        Ok(response)
    }
}
