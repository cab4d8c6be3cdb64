use crate::entities::{ads, prelude::*};
use anyhow::Result;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

/// Repository for scanner-discovered ads. This application never inserts or
/// deletes rows here; it only flips the two user-facing flags.
pub struct AdRepository {
    conn: DatabaseConnection,
}

/// An ad joined with the name of the search that found it.
#[derive(Debug, Clone)]
pub struct AdWithSearch {
    pub ad: ads::Model,
    pub search_name: String,
}

impl AdRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Ads on one side of the seen partition, newest first, joined with the
    /// owning search's name, optionally restricted to one search.
    pub async fn list(
        &self,
        seen: bool,
        limit: u64,
        search_id: Option<i32>,
    ) -> Result<Vec<AdWithSearch>> {
        let mut query = Ads::find()
            .find_also_related(Searches)
            .filter(ads::Column::IsSeen.eq(seen));

        if let Some(id) = search_id {
            query = query.filter(ads::Column::SearchId.eq(id));
        }

        let rows = query
            .order_by_desc(ads::Column::ScrapedAt)
            .order_by_desc(ads::Column::Id)
            .limit(limit)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(ad, search)| AdWithSearch {
                ad,
                search_name: search.map(|s| s.name).unwrap_or_default(),
            })
            .collect())
    }

    /// Count of unseen ads, optionally restricted to one search and/or to
    /// ads scraped strictly after `since`. Drives the client-side polling.
    pub async fn count_new(&self, search_id: Option<i32>, since: Option<&str>) -> Result<u64> {
        let mut query = Ads::find().filter(ads::Column::IsSeen.eq(false));

        if let Some(stamp) = since {
            query = query.filter(ads::Column::ScrapedAt.gt(stamp));
        }

        if let Some(id) = search_id {
            query = query.filter(ads::Column::SearchId.eq(id));
        }

        let count = query.count(&self.conn).await?;
        Ok(count)
    }

    /// One-way `is_seen = true`; idempotent. Returns false when the id does
    /// not exist.
    pub async fn mark_seen(&self, id: i32) -> Result<bool> {
        let result = Ads::update_many()
            .col_expr(ads::Column::IsSeen, Expr::value(true))
            .filter(ads::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Bidirectional favorite flip in a single statement.
    pub async fn toggle_favorite(&self, id: i32) -> Result<bool> {
        let result = Ads::update_many()
            .col_expr(
                ads::Column::IsFavorite,
                Expr::col(ads::Column::IsFavorite).not(),
            )
            .filter(ads::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
