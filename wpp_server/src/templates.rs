use std::path::PathBuf;

use log::*;
use serde_json::Value;

use crate::errors::ServerError;

pub const PUSH_PROVISIONING_TEMPLATE: &str = "push_provisioning_notification.json";
pub const PAYMENT_CARD_TEMPLATE: &str = "payment_card.json";
pub const OPAQUE_CREDENTIAL_TEMPLATE: &str = "tokenizable_opaque_account_credential.json";

/// Loads the request skeletons from the template directory.
///
/// The skeletons are read from disk on every request so sandbox card details can be edited without
/// restarting the server. They stay as [`Value`]s end to end; the server fills individual fields in and
/// never needs the full schema.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The `pushProvisioningNotification` body skeleton. Session identifiers and instrument material are
    /// filled in by the caller.
    pub async fn push_provisioning_notification(&self) -> Result<Value, ServerError> {
        self.load(PUSH_PROVISIONING_TEMPLATE).await
    }

    /// The sandbox payment card object.
    pub async fn payment_card(&self) -> Result<Value, ServerError> {
        self.load(PAYMENT_CARD_TEMPLATE).await
    }

    /// The opaque credential object. `publicWalletId` identifies the wallet that receives the token; when
    /// the session did not produce one, the field is dropped rather than sent empty.
    pub async fn tokenizable_opaque_account_credential(
        &self,
        public_wallet_id: Option<&str>,
    ) -> Result<Value, ServerError> {
        let mut credential = self.load(OPAQUE_CREDENTIAL_TEMPLATE).await?;
        match public_wallet_id {
            Some(id) => credential["publicWalletId"] = Value::from(id),
            None => {
                if let Some(fields) = credential.as_object_mut() {
                    fields.remove("publicWalletId");
                }
            },
        }
        Ok(credential)
    }

    async fn load(&self, name: &str) -> Result<Value, ServerError> {
        let path = self.dir.join(name);
        trace!("💻️ Loading request template {}", path.display());
        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ServerError::TemplateError(format!("Could not read {}. {e}", path.display())))?;
        let template: Value = serde_json::from_str(&raw)
            .map_err(|e| ServerError::TemplateError(format!("{} is not valid JSON. {e}", path.display())))?;
        if !template.is_object() {
            return Err(ServerError::TemplateError(format!(
                "{} must contain a JSON object at the top level",
                path.display()
            )));
        }
        Ok(template)
    }
}
