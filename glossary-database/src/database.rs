use sqlx::{PgPool, migrate::Migrator};

use crate::cache::CacheService;

/// Migrations for the `glossary_entries` table.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Postgres-backed glossary storage: the connection pool plus the cache that
/// holds the distinct term list.
#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
    cache: CacheService,
}

impl Database {
    /// Pass `CacheService::disabled` to run without redis.
    pub fn with_cache(pool: PgPool, cache: CacheService) -> Self {
        Self { pool, cache }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Term-list cache, invalidated on every new definition.
    pub fn cache(&self) -> &CacheService {
        &self.cache
    }
}
