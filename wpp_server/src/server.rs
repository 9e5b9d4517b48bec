use std::time::Duration;

use actix_files::Files;
use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use gsp_tools::{GspApi, MessageCipher};
use log::info;

use crate::{
    config::ServerConfig,
    data_objects::StaticSite,
    errors::ServerError,
    routes::{health, index, EchoRoute, PushProvisionRoute},
    templates::TemplateStore,
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let cipher = MessageCipher::from_files(
        &config.keys.merchant_key_file,
        &config.keys.gsp_key_file,
        config.keys.passphrase.clone(),
    )
    .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let api = GspApi::new(config.gsp_config.clone(), cipher)
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    info!("🚀️ Relaying provisioning requests to {}", config.gsp_config.host);
    let srv = create_server_instance(config, api)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, api: GspApi) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        let templates = TemplateStore::new(config.template_dir.clone());
        let site = StaticSite::new(config.public_dir.clone());
        let public_dir = config.public_dir.clone();
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("wpp::access_log"))
            .app_data(web::Data::new(api.clone()))
            .app_data(web::Data::new(templates))
            .app_data(web::Data::new(site))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                ServerError::InvalidRequestBody(err.to_string()).into()
            }))
            .service(health)
            .service(index)
            .service(EchoRoute::<GspApi>::new())
            .service(PushProvisionRoute::<GspApi>::new())
            .service(Files::new("/public", public_dir))
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
