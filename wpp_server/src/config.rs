use std::{env, path::PathBuf};

use gsp_tools::GspConfig;
use log::*;
use wpp_common::Secret;

const DEFAULT_WPP_HOST: &str = "127.0.0.1";
const DEFAULT_WPP_PORT: u16 = 8080;
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_TEMPLATE_DIR: &str = "templates";
const DEFAULT_MERCHANT_KEY_FILE: &str = "keys/merchant_private_key.asc";
const DEFAULT_GSP_KEY_FILE: &str = "keys/gsp_public_key.asc";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding `form.html` and the widget wrapper script.
    pub public_dir: PathBuf,
    /// Directory holding the `pushProvisioningNotification` JSON skeletons.
    pub template_dir: PathBuf,
    /// Key material for the OpenPGP envelope.
    pub keys: KeyConfig,
    /// Host and account id for the payment network.
    pub gsp_config: GspConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_WPP_HOST.to_string(),
            port: DEFAULT_WPP_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            keys: KeyConfig::default(),
            gsp_config: GspConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("WPP_HOST").ok().unwrap_or_else(|| DEFAULT_WPP_HOST.into());
        let port = env::var("WPP_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for WPP_PORT. {e} Using the default, {DEFAULT_WPP_PORT}, instead."
                    );
                    DEFAULT_WPP_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_WPP_PORT);
        let public_dir =
            PathBuf::from(env::var("WPP_PUBLIC_DIR").ok().unwrap_or_else(|| DEFAULT_PUBLIC_DIR.into()));
        let template_dir =
            PathBuf::from(env::var("WPP_TEMPLATE_DIR").ok().unwrap_or_else(|| DEFAULT_TEMPLATE_DIR.into()));
        let keys = KeyConfig::from_env_or_default();
        let gsp_config = GspConfig::new_from_env_or_default();
        Self { host, port, public_dir, template_dir, keys, gsp_config }
    }
}

//-------------------------------------------------  KeyConfig  --------------------------------------------------------

/// Where the armored OpenPGP keys live and how to unlock the merchant key. The keys themselves are only
/// read once, when the server starts.
#[derive(Clone, Debug, Default)]
pub struct KeyConfig {
    /// The merchant's armored secret key. Signs outgoing requests and decrypts responses.
    pub merchant_key_file: PathBuf,
    /// The network's armored public key. Outgoing requests are encrypted to it.
    pub gsp_key_file: PathBuf,
    /// Passphrase for the merchant secret key.
    pub passphrase: Secret<String>,
}

impl KeyConfig {
    pub fn from_env_or_default() -> Self {
        let merchant_key_file = env::var("WPP_MERCHANT_KEY_FILE").map(PathBuf::from).unwrap_or_else(|_| {
            warn!(
                "🪛️ WPP_MERCHANT_KEY_FILE is not set. Looking for the merchant secret key in \
                 {DEFAULT_MERCHANT_KEY_FILE}."
            );
            PathBuf::from(DEFAULT_MERCHANT_KEY_FILE)
        });
        let gsp_key_file = env::var("WPP_GSP_KEY_FILE").map(PathBuf::from).unwrap_or_else(|_| {
            warn!("🪛️ WPP_GSP_KEY_FILE is not set. Looking for the network public key in {DEFAULT_GSP_KEY_FILE}.");
            PathBuf::from(DEFAULT_GSP_KEY_FILE)
        });
        let passphrase = Secret::new(env::var("WPP_KEY_PASSPHRASE").unwrap_or_else(|_| {
            warn!("🪛️ WPP_KEY_PASSPHRASE is not set. Assuming the merchant secret key has an empty passphrase.");
            String::default()
        }));
        Self { merchant_key_file, gsp_key_file, passphrase }
    }
}
