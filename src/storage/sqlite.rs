//! SQLite-backed product store

use crate::error::ImportError;
use crate::etl::Sink;
use crate::product::Product;

use eyre::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

const CREATE_PRODUCT_TABLE: &str = "CREATE TABLE IF NOT EXISTS product (
    id INTEGER PRIMARY KEY NOT NULL,
    name VARCHAR(255) NOT NULL,
    description TEXT NOT NULL,
    price INTEGER NOT NULL,
    taxRate INTEGER NOT NULL
)";

const INSERT_PRODUCT: &str =
    "INSERT INTO product (id, name, description, price, taxRate) VALUES (?, ?, ?, ?, ?)";

/// Product store on top of a single-connection SQLite pool
///
/// Staged products are held in memory until [`Sink::commit`] writes them in
/// one transaction.
pub struct SqliteStore {
    pool: SqlitePool,
    staged: Vec<Product>,
}

impl SqliteStore {
    /// Connect using a URL such as `sqlite://products.db` or `sqlite::memory:`
    ///
    /// The database file is created if missing.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);

        Self::connect_with(options)
            .await
            .with_context(|| format!("Failed to open database: {}", database_url))
    }

    /// Open (or create) the database file at `path`
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        Self::connect_with(options)
            .await
            .with_context(|| format!("Failed to open database: {}", path.display()))
    }

    async fn connect_with(options: SqliteConnectOptions) -> Result<Self, ImportError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(ImportError::Persistence)?;

        sqlx::query(CREATE_PRODUCT_TABLE)
            .execute(&pool)
            .await
            .map_err(ImportError::Persistence)?;

        Ok(Self {
            pool,
            staged: Vec::new(),
        })
    }

    /// Number of products waiting for the next commit
    pub fn staged(&self) -> usize {
        self.staged.len()
    }

    /// All committed products, ordered by id
    pub async fn products(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, taxRate FROM product ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(ImportError::Persistence)?;

        Ok(products)
    }

    /// Number of committed products
    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM product")
            .fetch_one(&self.pool)
            .await
            .map_err(ImportError::Persistence)?;

        Ok(count)
    }

    /// Close the underlying pool, waiting for the connection to be released
    pub async fn close(self) {
        self.pool.close().await;
    }
}

// Implement Sink trait for persisting products

impl Sink for SqliteStore {
    type Item = Product;

    async fn stage(&mut self, item: Self::Item) -> Result<()> {
        log::debug!("Staging product {}", item.id);
        self.staged.push(item);
        Ok(())
    }

    async fn commit(&mut self) -> Result<()> {
        let staged = std::mem::take(&mut self.staged);
        if staged.is_empty() {
            return Ok(());
        }

        // Dropping the transaction on error rolls it back
        let mut tx = self.pool.begin().await.map_err(ImportError::Persistence)?;
        for product in &staged {
            sqlx::query(INSERT_PRODUCT)
                .bind(product.id)
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(product.tax_rate)
                .execute(&mut *tx)
                .await
                .map_err(ImportError::Persistence)?;
        }
        tx.commit().await.map_err(ImportError::Persistence)?;

        log::debug!("Committed {} product(s)", staged.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            price: 100 * id,
            tax_rate: 20,
        }
    }

    #[tokio::test]
    async fn test_stage_then_commit() {
        let mut store = SqliteStore::connect("sqlite::memory:").await.unwrap();

        store.stage(product(1, "Widget")).await.unwrap();
        assert_eq!(store.staged(), 1);
        assert_eq!(store.count().await.unwrap(), 0);

        store.commit().await.unwrap();
        assert_eq!(store.staged(), 0);
        assert_eq!(store.products().await.unwrap(), vec![product(1, "Widget")]);
    }

    #[tokio::test]
    async fn test_commit_without_staged_items() {
        let mut store = SqliteStore::connect("sqlite::memory:").await.unwrap();

        store.commit().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_a_persistence_error() {
        let mut store = SqliteStore::connect("sqlite::memory:").await.unwrap();

        store.stage(product(1, "Widget")).await.unwrap();
        store.commit().await.unwrap();

        store.stage(product(1, "Gadget")).await.unwrap();
        let err = store.commit().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ImportError>(),
            Some(ImportError::Persistence(_))
        ));

        // The failed commit clears the stage and leaves the first row alone
        assert_eq!(store.staged(), 0);
        assert_eq!(store.products().await.unwrap(), vec![product(1, "Widget")]);
    }

    #[tokio::test]
    async fn test_failed_commit_rolls_back_whole_stage() {
        let mut store = SqliteStore::connect("sqlite::memory:").await.unwrap();

        store.stage(product(2, "Gadget")).await.unwrap();
        store.stage(product(2, "Gadget again")).await.unwrap();
        assert!(store.commit().await.is_err());

        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_commits_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("products.db");

        let mut store = SqliteStore::open(&db_path).await.unwrap();
        store.stage(product(1, "Widget")).await.unwrap();
        store.commit().await.unwrap();
        store.stage(product(2, "Gadget")).await.unwrap();
        // Never committed
        store.close().await;

        let store = SqliteStore::open(&db_path).await.unwrap();
        assert_eq!(store.products().await.unwrap(), vec![product(1, "Widget")]);
    }
}
