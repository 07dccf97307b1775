use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware, web, App,
};
use common::{
    context::ServiceState,
    entities::submission::{Submission, SUBMISSIONS_COLLECTION},
    repository::mongo_repository::{MongoConnection, MongoRepository},
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod service;

use crate::config::Config;
use crate::handlers::{form::configure_service, indexer::ping};

/// Request body limit, matching the 100kb default of the original body parser.
pub const MAX_BODY_SIZE: usize = 100 * 1024;

/// Wires the MongoDB-backed repositories. Nothing connects until the
/// first request needs the store.
pub fn build_state(config: &Config) -> ServiceState {
    let connection = Arc::new(MongoConnection::new(
        config.mongo_uri.clone(),
        config.database.clone(),
    ));
    let submissions: MongoRepository<Submission> =
        MongoRepository::new(connection, SUBMISSIONS_COLLECTION);

    let mut state = ServiceState::new();
    state.insert::<Submission>(Arc::new(submissions));
    state
}

pub fn create_app(
    state: Arc<ServiceState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody<Error = actix_web::http::Error>>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    let cors = Cors::permissive();

    // Cors wraps the body in `EitherBody`, whose error type is fixed above.
    App::new()
        .wrap(cors)
        .wrap(middleware::Logger::default())
        .app_data(web::Data::new(state))
        .app_data(web::PayloadConfig::new(MAX_BODY_SIZE))
        .configure(configure_service)
        .service(ping)
}
