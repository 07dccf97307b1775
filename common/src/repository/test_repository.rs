use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{self, Bson};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{self, StoreError};

use super::Repository;

/// In-memory repository with switchable failures, for handler tests.
pub struct TestRepository<T> {
    _t: std::marker::PhantomData<fn() -> T>,
    pub db: Mutex<Vec<Bson>>,
    connect_failure: Mutex<Option<StoreError>>,
    insert_failure: Mutex<Option<StoreError>>,
}

impl<T> Default for TestRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TestRepository<T> {
    pub fn new() -> Self {
        Self {
            _t: std::marker::PhantomData,
            db: Mutex::new(Vec::new()),
            connect_failure: Mutex::new(None),
            insert_failure: Mutex::new(None),
        }
    }

    pub fn fail_connect(&self, err: StoreError) {
        *self.connect_failure.lock().unwrap() = Some(err);
    }

    pub fn fail_insert(&self, err: StoreError) {
        *self.insert_failure.lock().unwrap() = Some(err);
    }

    pub fn len(&self) -> usize {
        self.db.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: DeserializeOwned> TestRepository<T> {
    pub fn items(&self) -> Vec<T> {
        self.db
            .lock()
            .unwrap()
            .iter()
            .filter_map(|x| bson::from_bson(x.clone()).ok())
            .collect()
    }
}

#[async_trait]
impl<T> Repository<T> for TestRepository<T>
where
    T: Serialize + Send + Sync,
{
    async fn ensure_connected(&self) -> error::Result<()> {
        match self.connect_failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn insert(&self, item: &T) -> error::Result<()> {
        self.ensure_connected().await?;
        if let Some(err) = self.insert_failure.lock().unwrap().clone() {
            return Err(err);
        }

        let item = bson::to_bson(item).map_err(|err| StoreError::other(err.to_string()))?;
        self.db.lock().unwrap().push(item);
        Ok(())
    }
}
