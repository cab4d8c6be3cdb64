use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::ad::AdWithSearch;
pub use repositories::search::SearchInput;
pub use repositories::stats::{LAST_LAUNCH, SCAN_PENDING, SCAN_REQUEST};

use crate::entities::{logs, searches};

/// Cloneable handle over the shared database. Constructed once at startup
/// and injected into the request state; there is no global accessor.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.starts_with(":memory:") && !db_url.contains("::memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn search_repo(&self) -> repositories::search::SearchRepository {
        repositories::search::SearchRepository::new(self.conn.clone())
    }

    fn ad_repo(&self) -> repositories::ad::AdRepository {
        repositories::ad::AdRepository::new(self.conn.clone())
    }

    fn logs_repo(&self) -> repositories::logs::LogRepository {
        repositories::logs::LogRepository::new(self.conn.clone())
    }

    fn stats_repo(&self) -> repositories::stats::StatsRepository {
        repositories::stats::StatsRepository::new(self.conn.clone())
    }

    // ========================================================================
    // Searches
    // ========================================================================

    pub async fn list_searches(&self) -> Result<Vec<searches::Model>> {
        self.search_repo().list().await
    }

    pub async fn get_search(&self, id: i32) -> Result<Option<searches::Model>> {
        self.search_repo().get(id).await
    }

    pub async fn create_search(&self, input: SearchInput) -> Result<searches::Model> {
        self.search_repo().create(input).await
    }

    pub async fn update_search(&self, id: i32, input: SearchInput) -> Result<bool> {
        self.search_repo().update(id, input).await
    }

    pub async fn delete_search(&self, id: i32) -> Result<bool> {
        self.search_repo().delete(id).await
    }

    pub async fn toggle_search(&self, id: i32) -> Result<bool> {
        self.search_repo().toggle_active(id).await
    }

    pub async fn scanner_activity(&self) -> Result<Option<String>> {
        self.search_repo().latest_activity().await
    }

    // ========================================================================
    // Ads
    // ========================================================================

    pub async fn list_new_ads(
        &self,
        limit: u64,
        search_id: Option<i32>,
    ) -> Result<Vec<AdWithSearch>> {
        self.ad_repo().list(false, limit, search_id).await
    }

    pub async fn list_archived_ads(
        &self,
        limit: u64,
        search_id: Option<i32>,
    ) -> Result<Vec<AdWithSearch>> {
        self.ad_repo().list(true, limit, search_id).await
    }

    pub async fn count_new_ads(&self, search_id: Option<i32>, since: Option<&str>) -> Result<u64> {
        self.ad_repo().count_new(search_id, since).await
    }

    pub async fn mark_ad_seen(&self, id: i32) -> Result<bool> {
        self.ad_repo().mark_seen(id).await
    }

    pub async fn toggle_ad_favorite(&self, id: i32) -> Result<bool> {
        self.ad_repo().toggle_favorite(id).await
    }

    // ========================================================================
    // Scanner collaboration
    // ========================================================================

    pub async fn recent_logs(&self, limit: u64) -> Result<Vec<logs::Model>> {
        self.logs_repo().latest(limit).await
    }

    pub async fn request_scan(&self) -> Result<()> {
        self.stats_repo().request_scan().await
    }

    pub async fn get_stat(&self, name: &str) -> Result<Option<String>> {
        self.stats_repo().get(name).await
    }

    pub async fn set_stat(&self, name: &str, value: &str) -> Result<()> {
        self.stats_repo().set(name, value).await
    }
}
