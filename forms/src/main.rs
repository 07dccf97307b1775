use std::process;
use std::sync::Arc;

use actix_web::HttpServer;
use forms::{build_state, config::Config, create_app};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{:#}", err);
            process::exit(1);
        }
    };

    let state = Arc::new(build_state(&config));

    log::info!("Server running on port {}", config.port);
    HttpServer::new(move || create_app(state.clone()))
        .bind(("0.0.0.0", config.port))?
        .run()
        .await
}
