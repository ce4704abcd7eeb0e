use crate::db::models::{NewSchool, School};
use crate::db::schema::{MYSQL_INIT, SQLITE_INIT};
use crate::error::LocatorError;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use sqlx::{Any, Pool};
use std::time::Duration;
use tracing::debug;

pub type AnyPool = Pool<Any>;

/// Database flavour behind the `Any` pool, picked from the URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    MySql,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Self {
        if url.starts_with("sqlite:") {
            Backend::Sqlite
        } else {
            Backend::MySql
        }
    }

    fn init_sql(self) -> &'static str {
        match self {
            Backend::MySql => MYSQL_INIT,
            Backend::Sqlite => SQLITE_INIT,
        }
    }
}

#[derive(Clone)]
pub struct SchoolsStorage {
    pool: AnyPool,
    backend: Backend,
}

impl SchoolsStorage {
    pub fn new(pool: AnyPool, backend: Backend) -> Self {
        Self { pool, backend }
    }

    /// Open the process-wide pool for `url`.
    pub async fn connect(url: &str) -> Result<Self, LocatorError> {
        install_default_drivers();
        let backend = Backend::from_url(url);

        // a single shared connection for the whole process
        let mut opts = AnyPoolOptions::new().max_connections(1);
        // every in-memory SQLite connection is its own database
        if backend == Backend::Sqlite && url.contains(":memory:") {
            opts = opts
                .idle_timeout(Option::<Duration>::None)
                .max_lifetime(Option::<Duration>::None);
        }
        let pool = opts.connect(url).await?;
        debug!(?backend, "database pool established");
        Ok(Self::new(pool, backend))
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Create the `schools` table when it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), LocatorError> {
        sqlx::query(self.backend.init_sql().trim())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Every row, in the order the store returns them.
    pub async fn list_schools(&self) -> Result<Vec<School>, LocatorError> {
        let rows = sqlx::query_as::<_, School>("SELECT * FROM schools")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a school and return the store-assigned id.
    pub async fn insert_school(&self, school: &NewSchool) -> Result<i64, LocatorError> {
        let result = sqlx::query(
            "INSERT INTO schools (name, address, latitude, longitude) VALUES (?, ?, ?, ?)",
        )
        .bind(school.name.as_str())
        .bind(school.address.as_str())
        .bind(school.latitude)
        .bind(school.longitude)
        .execute(&self.pool)
        .await?;

        result.last_insert_id().ok_or_else(|| {
            LocatorError::Database(sqlx::Error::Protocol(
                "insert did not report a generated id".to_string(),
            ))
        })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_storage() -> SchoolsStorage {
        let storage = SchoolsStorage::connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite should open");
        storage.init_schema().await.expect("schema should apply");
        storage
    }

    fn new_school(name: &str, latitude: f64, longitude: f64) -> NewSchool {
        NewSchool {
            name: name.to_string(),
            address: format!("{name} street"),
            latitude,
            longitude,
        }
    }

    #[test]
    fn backend_follows_url_scheme() {
        assert_eq!(Backend::from_url("sqlite::memory:"), Backend::Sqlite);
        assert_eq!(Backend::from_url("sqlite://schools.db"), Backend::Sqlite);
        assert_eq!(Backend::from_url("mysql://root@localhost/db"), Backend::MySql);
    }

    #[tokio::test]
    async fn pool_holds_a_single_connection() {
        let storage = memory_storage().await;
        assert_eq!(storage.pool.options().get_max_connections(), 1);
        assert!(storage.pool.size() <= 1);
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let storage = memory_storage().await;
        let first = storage.insert_school(&new_school("A", 1.0, 1.0)).await.unwrap();
        let second = storage.insert_school(&new_school("B", 2.0, 2.0)).await.unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn list_returns_rows_in_insert_order() {
        let storage = memory_storage().await;
        storage.insert_school(&new_school("North", 10.0, 0.0)).await.unwrap();
        storage.insert_school(&new_school("South", -10.5, 3.25)).await.unwrap();

        let rows = storage.list_schools().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "North");
        assert_eq!(rows[1].address, "South street");
        assert_eq!(rows[1].latitude, -10.5);
        assert_eq!(rows[1].longitude, 3.25);
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let storage = memory_storage().await;
        storage.insert_school(&new_school("Kept", 0.0, 0.0)).await.unwrap();
        storage.init_schema().await.unwrap();
        assert_eq!(storage.list_schools().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn closed_pool_surfaces_database_error() {
        let storage = memory_storage().await;
        storage.close().await;
        let err = storage.list_schools().await.unwrap_err();
        assert!(matches!(err, LocatorError::Database(_)));
    }
}
