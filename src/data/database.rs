use crate::data::errors::RepoError;
use diesel_async::AsyncMysqlConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::deadpool::{Object, Pool};

/// Bounded pool of MySQL connections shared by every repository.
#[derive(Clone)]
pub struct Database {
    pool: Pool<AsyncMysqlConnection>,
}

impl Database {
    pub fn new(database_url: &str, max_connections: usize) -> Result<Self, RepoError> {
        let config = AsyncDieselConnectionManager::<AsyncMysqlConnection>::new(database_url);
        let pool = Pool::builder(config)
            .max_size(max_connections)
            .build()
            .map_err(|e| RepoError::Pool(e.to_string()))?;

        tracing::info!(max_connections, "DB connection pool created");

        Ok(Database { pool })
    }

    /// Checks a connection out of the pool. It returns to the pool when dropped.
    pub async fn get_connection(&self) -> Result<Object<AsyncMysqlConnection>, RepoError> {
        self.pool.get().await.map_err(|e| {
            tracing::error!("Failed to acquire database connection: {}", e);
            RepoError::Pool(e.to_string())
        })
    }
}
