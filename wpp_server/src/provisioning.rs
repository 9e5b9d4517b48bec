use chrono::Utc;
use log::*;
use serde_json::Value;
use uuid::Uuid;

use crate::{data_objects::SessionCreatedPayload, errors::ServerError, templates::TemplateStore};

/// Setting value the widget reports when the user chose to save a credential.
pub const SETTING_ENABLED: i64 = 1;

/// Assembles the `pushProvisioningNotification` request body from the on-disk skeletons and the widget's
/// session payload.
///
/// The skeleton gets a fresh request id and timestamp, the session identifiers are copied into
/// `pushContext`, and the instrument material is built up according to the final settings: the opaque
/// credential when a token is being saved, the payment card when an FPAN is being saved. The card object
/// always rides along in `paymentAccount`, whatever the settings say.
pub async fn build_push_provisioning_request(
    templates: &TemplateStore,
    payload: &SessionCreatedPayload,
) -> Result<Value, ServerError> {
    let mut request = templates.push_provisioning_notification().await?;
    request["requestHeader"]["requestId"] = Value::from(Uuid::new_v4().to_string());
    request["requestHeader"]["requestTimestamp"] = Value::from(Utc::now().timestamp_millis().to_string());
    request["pushContext"]["serverSessionId"] = Value::from(payload.server_session_id.as_str());
    request["pushContext"]["clientSessionId"] = Value::from(payload.client_session_id.as_str());

    if payload.token_setting == SETTING_ENABLED {
        if payload.public_wallet_id.is_none() {
            warn!(
                "💻️ The session reported tokenSetting=1 but carried no publicWalletId. The network will \
                 likely reject this notification."
            );
        }
        let credential =
            templates.tokenizable_opaque_account_credential(payload.public_wallet_id.as_deref()).await?;
        push_instrument_material(&mut request, "tokenizableOpaqueAccountCredential", credential)?;
    }

    let payment_card = templates.payment_card().await?;
    request["paymentAccount"]["paymentCard"] = payment_card.clone();
    if payload.card_setting == SETTING_ENABLED {
        push_instrument_material(&mut request, "paymentCard", payment_card)?;
    }
    Ok(request)
}

fn push_instrument_material(request: &mut Value, kind: &str, material: Value) -> Result<(), ServerError> {
    let entries = request["paymentInstrumentMaterial"].as_array_mut().ok_or_else(|| {
        ServerError::TemplateError(
            "push_provisioning_notification.json must carry a paymentInstrumentMaterial array".to_string(),
        )
    })?;
    let mut entry = serde_json::Map::new();
    entry.insert(kind.to_string(), material);
    entries.push(Value::Object(entry));
    Ok(())
}
