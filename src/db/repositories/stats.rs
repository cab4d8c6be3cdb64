use crate::entities::{prelude::*, system_stats};
use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use tracing::info;

/// Key the web app writes to request an out-of-band scan.
pub const SCAN_REQUEST: &str = "scan_request";

/// Key the scanner writes at startup; read-only here.
pub const LAST_LAUNCH: &str = "last_launch";

/// Value signalling the scanner that a manual scan is wanted.
pub const SCAN_PENDING: &str = "pending";

/// Repository for the key-value `system_stats` table used to signal the
/// external scanner.
pub struct StatsRepository {
    conn: DatabaseConnection,
}

impl StatsRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&self, name: &str) -> Result<Option<String>> {
        let row = SystemStats::find_by_id(name.to_string())
            .one(&self.conn)
            .await?;
        Ok(row.map(|stat| stat.value))
    }

    /// Insert-or-update for a key; never creates duplicate keys.
    pub async fn set(&self, name: &str, value: &str) -> Result<()> {
        let active_model = system_stats::ActiveModel {
            name: Set(name.to_string()),
            value: Set(value.to_string()),
        };

        SystemStats::insert(active_model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(system_stats::Column::Name)
                    .update_columns([system_stats::Column::Value])
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await?;

        Ok(())
    }

    /// Advisory signal for the external scanner. Repeated calls collapse to
    /// the same pending row; no acknowledgment is observable from this side.
    pub async fn request_scan(&self) -> Result<()> {
        self.set(SCAN_REQUEST, SCAN_PENDING).await?;
        info!("Manual scan requested");
        Ok(())
    }
}
