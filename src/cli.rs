//! CLI helper functions

use crate::{
    etl::Pipeline,
    storage::{CsvReader, SqliteStore},
    transform::ProductMapper,
};
use eyre::{Context, Result};
use std::path::Path;

/// Database used when neither `--database` nor `DATABASE_URL` is given
pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.db";

/// Dotenv file sourced when `--env` is not given
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Source configuration from a dotenv file
///
/// An explicitly named file must exist. Without one, [`DEFAULT_ENV_FILE`]
/// is loaded only if present.
pub fn load_env_file(explicit: Option<&Path>) -> Result<()> {
    match explicit {
        Some(path) => {
            dotenvy::from_filename(path)
                .with_context(|| format!("Failed to load env file: {}", path.display()))?;
        }
        None if Path::new(DEFAULT_ENV_FILE).exists() => {
            dotenvy::from_filename(DEFAULT_ENV_FILE)
                .with_context(|| format!("Failed to load env file: {}", DEFAULT_ENV_FILE))?;
        }
        None => log::debug!("No {} file found, using process environment", DEFAULT_ENV_FILE),
    }
    Ok(())
}

/// Resolve the database URL
///
/// Precedence:
/// 1. `override_url` (the `--database` flag)
/// 2. DATABASE_URL environment variable
/// 3. [`DEFAULT_DATABASE_URL`]
pub fn load_database_url(override_url: Option<&str>) -> String {
    if let Some(url) = override_url {
        return url.to_string();
    }

    match std::env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            log::debug!("DATABASE_URL not set, using {}", DEFAULT_DATABASE_URL);
            DEFAULT_DATABASE_URL.to_string()
        }
    }
}

/// Import products from a CSV file into the store at `database_url`
///
/// Pipeline: CsvReader → ProductMapper → SqliteStore
///
/// Each product is committed on its own, so a failure part-way through
/// leaves every earlier product in the store.
///
/// Returns the number of products imported
pub async fn import_products(file: impl AsRef<Path>, database_url: &str) -> Result<usize> {
    let file = file.as_ref();

    // A bad path must fail before the database is touched
    let reader = CsvReader::new(file);
    reader.ensure_readable()?;

    log::info!("Connecting to {}", database_url);
    let store = SqliteStore::connect(database_url).await?;

    let mut pipeline = Pipeline::new(reader, ProductMapper, store);
    let count = pipeline.run().await?;

    let store = pipeline.into_sink();
    log::debug!("Store now holds {} product(s)", store.count().await?);
    store.close().await;

    log::info!("✓ Imported {} product(s) from {}", count, file.display());
    Ok(count)
}
