use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The `onSessionCreated` payload the widget wrapper forwards from the browser.
///
/// `token_setting` and `card_setting` are the *final* values reported by the widget; the values requested
/// when the widget was opened may have been overridden (for example, when the user has no device that
/// supports tokenized payments). `public_wallet_id` is only present when a token can be saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreatedPayload {
    pub server_session_id: String,
    pub client_session_id: String,
    #[serde(default)]
    pub token_setting: i64,
    #[serde(default)]
    pub card_setting: i64,
    #[serde(default)]
    pub public_device_id: Option<String>,
    #[serde(default)]
    pub public_wallet_id: Option<String>,
}

/// Layout of the static assets served alongside the API routes.
#[derive(Debug, Clone)]
pub struct StaticSite {
    public_dir: PathBuf,
}

impl StaticSite {
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self { public_dir: public_dir.into() }
    }

    /// The page hosting the Add to Google Pay button.
    pub fn form_page(&self) -> PathBuf {
        self.public_dir.join("form.html")
    }
}
