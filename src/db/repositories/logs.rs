use crate::entities::{logs, prelude::*};
use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};

/// Read-only view over the scanner's journal. Rows are written exclusively
/// by the external scanner.
pub struct LogRepository {
    conn: DatabaseConnection,
}

impl LogRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn latest(&self, limit: u64) -> Result<Vec<logs::Model>> {
        let rows = Logs::find()
            .order_by_desc(logs::Column::CreatedAt)
            .order_by_desc(logs::Column::Id)
            .limit(limit)
            .all(&self.conn)
            .await?;
        Ok(rows)
    }
}
