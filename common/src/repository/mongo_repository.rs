use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use mongodb::{bson::doc, options::ClientOptions, Client, Database};
use serde::Serialize;
use tokio::sync::OnceCell;

use crate::error;

use super::Repository;

const APP_NAME: &str = "forms";
/// Database used when neither the config nor the URI names one.
pub const DEFAULT_DATABASE: &str = "test";

type ReadinessCheck =
    Box<dyn Fn(Database) -> BoxFuture<'static, mongodb::error::Result<()>> + Send + Sync>;

fn ping(database: Database) -> BoxFuture<'static, mongodb::error::Result<()>> {
    Box::pin(async move {
        database.run_command(doc! {"ping": 1}, None).await?;
        Ok(())
    })
}

/// Process-wide handle to one MongoDB database, opened on first use.
///
/// Concurrent callers racing on the first connection share a single
/// in-flight attempt. A failed attempt leaves the handle empty, so the
/// next caller tries again.
pub struct MongoConnection {
    uri: String,
    database: Option<String>,
    readiness: ReadinessCheck,
    handle: OnceCell<Database>,
}

impl MongoConnection {
    pub fn new(uri: impl Into<String>, database: Option<String>) -> Self {
        Self::with_readiness_check(uri, database, ping)
    }

    /// Like [`MongoConnection::new`], but decides the database is usable with
    /// `check` instead of a `ping` command.
    pub fn with_readiness_check<F, Fut>(
        uri: impl Into<String>,
        database: Option<String>,
        check: F,
    ) -> Self
    where
        F: Fn(Database) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = mongodb::error::Result<()>> + Send + 'static,
    {
        Self {
            uri: uri.into(),
            database,
            readiness: Box::new(move |database| Box::pin(check(database))),
            handle: OnceCell::new(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.handle.initialized()
    }

    pub async fn ensure_connected(&self) -> error::Result<&Database> {
        self.handle
            .get_or_try_init(|| async {
                self.connect().await.map_err(|err| {
                    log::error!("Error connecting to the database: {}", err);
                    err
                })
            })
            .await
    }

    async fn connect(&self) -> error::Result<Database> {
        let mut options = ClientOptions::parse(&self.uri).await?;
        options.app_name.get_or_insert_with(|| APP_NAME.to_string());

        let client = Client::with_options(options)?;
        let database = match &self.database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };

        (self.readiness)(database.clone()).await?;
        log::info!("Connected to MongoDB database {}", database.name());

        Ok(database)
    }
}

pub struct MongoRepository<T> {
    connection: Arc<MongoConnection>,
    collection: String,
    _t: PhantomData<fn() -> T>,
}

impl<T> MongoRepository<T> {
    pub fn new(connection: Arc<MongoConnection>, collection: &str) -> Self {
        Self {
            connection,
            collection: collection.to_string(),
            _t: PhantomData,
        }
    }
}

#[async_trait]
impl<T> Repository<T> for MongoRepository<T>
where
    T: Serialize + Send + Sync,
{
    async fn ensure_connected(&self) -> error::Result<()> {
        self.connection.ensure_connected().await?;
        Ok(())
    }

    async fn insert(&self, item: &T) -> error::Result<()> {
        let database = self.connection.ensure_connected().await?;
        database
            .collection::<T>(&self.collection)
            .insert_one(item, None)
            .await?;
        Ok(())
    }
}
