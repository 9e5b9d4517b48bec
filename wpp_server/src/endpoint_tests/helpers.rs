use std::fs;

use crate::templates::{
    TemplateStore,
    OPAQUE_CREDENTIAL_TEMPLATE,
    PAYMENT_CARD_TEMPLATE,
    PUSH_PROVISIONING_TEMPLATE,
};

/// Writes the three request skeletons into a temp directory. Keep the returned directory alive for as
/// long as the store is in use.
pub fn sample_templates() -> (tempfile::TempDir, TemplateStore) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(PUSH_PROVISIONING_TEMPLATE),
        r#"{
            "requestHeader": {
                "protocolVersion": {"major": 1, "minor": 0, "revision": 0},
                "requestId": "",
                "requestTimestamp": ""
            },
            "pushContext": {"serverSessionId": "", "clientSessionId": ""},
            "paymentInstrumentMaterial": [],
            "paymentAccount": {}
        }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join(PAYMENT_CARD_TEMPLATE),
        r#"{"accountNumber": "4111111111111111", "expirationMonth": 12, "expirationYear": 2030}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join(OPAQUE_CREDENTIAL_TEMPLATE),
        r#"{"opaqueAccountCredential": "opc-sandbox", "publicWalletId": ""}"#,
    )
    .unwrap();
    let store = TemplateStore::new(dir.path());
    (dir, store)
}
