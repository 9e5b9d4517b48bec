use log::*;

pub const DEFAULT_GSP_HOST: &str = "billpaynotification.sandbox.googleapis.com";
const PIAID_PLACEHOLDER: &str = "YOUR_PIAID_HERE";

/// Where to reach the payment network. The host defaults to the sandbox; the payment integrator account id
/// (PIAID) has no useful default and must be set before the network will accept requests.
#[derive(Debug, Clone, Default)]
pub struct GspConfig {
    pub host: String,
    pub piaid: String,
}

impl GspConfig {
    pub fn new(host: &str, piaid: &str) -> Self {
        Self { host: host.to_string(), piaid: piaid.to_string() }
    }

    pub fn new_from_env_or_default() -> Self {
        let host = std::env::var("WPP_GSP_HOST").unwrap_or_else(|_| {
            info!("WPP_GSP_HOST not set, using the sandbox host, {DEFAULT_GSP_HOST}");
            DEFAULT_GSP_HOST.to_string()
        });
        let piaid = std::env::var("WPP_GSP_PIAID").unwrap_or_else(|_| {
            warn!(
                "WPP_GSP_PIAID not set, using a placeholder. The network will reject requests until you set it to \
                 your payment integrator account id."
            );
            PIAID_PLACEHOLDER.to_string()
        });
        Self { host, piaid }
    }
}
