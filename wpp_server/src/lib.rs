//! # Web Push Provisioning sample server
//!
//! A sample merchant backend showing how to wire the browser-side "Add to Google Pay" button to the
//! payment network's provisioning endpoints. It hosts the page that loads the vendor widget, and relays
//! the widget's session payload upstream inside an OpenPGP envelope.
//!
//! ## Routes
//! * `/health`: liveness check.
//! * `/`: the static page hosting the Add to Google Pay button. The page must be served from a domain
//!   allowed by the network.
//! * `/public/*`: the widget wrapper script and any other static assets.
//! * `/echo`: POST; wraps the request body in an `echo` request and relays it upstream.
//! * `/pushProvision`: POST; assembles a `pushProvisioningNotification` request from the on-disk JSON
//!   skeletons and the widget's `onSessionCreated` payload, and relays it upstream.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for details.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod provisioning;
pub mod routes;
pub mod server;
pub mod templates;

#[cfg(test)]
mod endpoint_tests;
