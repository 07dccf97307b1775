use std::sync::Arc;

use actix_web::{dev::Payload, error::ErrorInternalServerError, web::Data, FromRequest, HttpRequest};
use type_map::concurrent::TypeMap;

use crate::{
    error::{self, StoreError},
    repository::RepositoryObject,
};

/// Long-lived state shared by every worker: one repository per entity type.
pub struct ServiceState {
    pub repositories: TypeMap,
}

impl Default for ServiceState {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceState {
    pub fn new() -> Self {
        Self {
            repositories: TypeMap::new(),
        }
    }

    pub fn insert<T: 'static>(&mut self, repository: RepositoryObject<T>) {
        self.repositories.insert(repository);
    }
}

#[derive(Clone)]
pub struct Context(pub Arc<ServiceState>);

impl FromRequest for Context {
    type Error = actix_web::Error;

    type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.app_data::<Data<Arc<ServiceState>>>() {
            Some(state) => Ok(Context(Arc::clone(state))),
            None => Err(ErrorInternalServerError("No state provided")),
        };

        futures_util::future::ready(result)
    }
}

impl Context {
    pub fn get_repository<T: 'static>(&self) -> Option<RepositoryObject<T>> {
        self.0.repositories.get::<RepositoryObject<T>>().cloned()
    }

    pub fn try_get_repository<T: 'static>(&self) -> error::Result<RepositoryObject<T>> {
        self.get_repository::<T>().ok_or_else(|| {
            StoreError::other(format!(
                "Repository for type {} not found",
                std::any::type_name::<T>()
            ))
        })
    }
}
