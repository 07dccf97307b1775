use std::sync::Arc;

use actix_web::HttpServer;
use forms::{build_state, config::Config, create_app};
use lambda_web::{is_running_on_lambda, run_actix_on_lambda, LambdaError};

/// Serverless entry point. Behind API Gateway or a function URL it serves the
/// same app through the Lambda runtime; elsewhere it falls back to a plain
/// HTTP server so the function can be exercised locally.
#[actix_web::main]
async fn main() -> Result<(), LambdaError> {
    dotenv::dotenv().ok();

    env_logger::init();

    let config = Config::from_env().map_err(|err| {
        log::error!("{:#}", err);
        err
    })?;

    let state = Arc::new(build_state(&config));
    let factory = move || create_app(state.clone());

    if is_running_on_lambda() {
        run_actix_on_lambda(factory).await?;
    } else {
        log::info!("Server running on port {}", config.port);
        HttpServer::new(factory)
            .bind(("0.0.0.0", config.port))?
            .run()
            .await?;
    }
    Ok(())
}
