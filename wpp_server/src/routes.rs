//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Relay handlers are `async` end to end: the upstream round trip (encrypt, POST, decrypt) is I/O bound,
//! and a blocking call here would stall the worker thread for every other request it is serving.

use actix_files::NamedFile;
use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use gsp_tools::{EchoRequest, PushProvisioning};
use log::*;
use serde_json::Value;

use crate::{
    data_objects::{SessionCreatedPayload, StaticSite},
    errors::ServerError,
    provisioning::build_push_provisioning_request,
    templates::TemplateStore,
};

// Web-actix cannot handle generics in handlers, so routes over the `PushProvisioning` seam are
// registered manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

// ----------------------------------------------   Form page  -------------------------------------------------
/// Serves the page hosting the Add to Google Pay button and the widget wrapper. The page must be hosted
/// on a domain the network allows.
#[get("/")]
pub async fn index(site: web::Data<StaticSite>) -> Result<NamedFile, ServerError> {
    trace!("💻️ Serving the Add to Google Pay form");
    let file = NamedFile::open_async(site.form_page()).await?;
    Ok(file)
}

// ----------------------------------------------   Echo  ------------------------------------------------------
route!(echo => Post "/echo" impl PushProvisioning);
/// Accepts any JSON body from the frontend, wraps it in an `echo` request and relays it upstream. The
/// decrypted upstream response is returned verbatim.
pub async fn echo<B>(body: web::Json<Value>, api: web::Data<B>) -> Result<HttpResponse, ServerError>
where B: PushProvisioning {
    let message = body.into_inner();
    debug!("💻️ Received echo request: {message}");
    let request = EchoRequest::new(message.to_string());
    let response = api.echo(request).await.map_err(|e| {
        warn!("💻️ Could not relay echo request upstream. {e}");
        ServerError::RelayError(e)
    })?;
    Ok(HttpResponse::Ok().content_type(ContentType::json()).body(response))
}

// ----------------------------------------------   Push provisioning  -----------------------------------------
route!(push_provision => Post "/pushProvision" impl PushProvisioning);
/// Takes the widget's `onSessionCreated` payload, assembles the `pushProvisioningNotification` request
/// from the on-disk skeletons (see [`build_push_provisioning_request`]) and relays it upstream. The
/// decrypted upstream response is returned verbatim.
pub async fn push_provision<B>(
    body: web::Json<SessionCreatedPayload>,
    templates: web::Data<TemplateStore>,
    api: web::Data<B>,
) -> Result<HttpResponse, ServerError>
where
    B: PushProvisioning,
{
    let payload = body.into_inner();
    debug!(
        "💻️ Received push provisioning request for server session {} (tokenSetting={}, cardSetting={})",
        payload.server_session_id, payload.token_setting, payload.card_setting
    );
    let notification = build_push_provisioning_request(templates.as_ref(), &payload).await?;
    trace!("💻️ Assembled push provisioning notification: {notification}");
    let response = api.push_provisioning_notification(notification).await.map_err(|e| {
        warn!("💻️ Could not relay push provisioning notification upstream. {e}");
        ServerError::RelayError(e)
    })?;
    Ok(HttpResponse::Ok().content_type(ContentType::json()).body(response))
}
