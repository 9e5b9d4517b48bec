use dotenvy::dotenv;
use log::info;
use wpp_server::{cli::handle_command_line_args, config::ServerConfig, server::run_server};

#[actix_web::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    if handle_command_line_args() {
        return;
    }
    let config = ServerConfig::from_env_or_default();

    info!("🚀️ Starting the push provisioning sample server on http://{}:{}", config.host, config.port);
    if let Err(e) = run_server(config).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
