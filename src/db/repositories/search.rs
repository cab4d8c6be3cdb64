use crate::entities::{prelude::*, searches};
use anyhow::Result;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::info;

/// Repository for saved-search operations. Every mutation is a single
/// statement; `last_checked` belongs to the external scanner and is never
/// written here.
pub struct SearchRepository {
    conn: DatabaseConnection,
}

/// Caller-supplied fields for create/update. Field-level validation is the
/// handler's job; this layer only persists.
#[derive(Debug, Clone)]
pub struct SearchInput {
    pub name: String,
    pub zipcodes: String,
    pub price_min: Option<i32>,
    pub price_max: Option<i32>,
    pub keywords: String,
    pub category: i32,
    pub is_donation: bool,
    pub excluded_categories: Option<String>,
}

impl SearchRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<searches::Model>> {
        let rows = Searches::find()
            .order_by_desc(searches::Column::CreatedAt)
            .order_by_desc(searches::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: i32) -> Result<Option<searches::Model>> {
        let row = Searches::find_by_id(id).one(&self.conn).await?;
        Ok(row)
    }

    pub async fn create(&self, input: SearchInput) -> Result<searches::Model> {
        let active_model = searches::ActiveModel {
            name: Set(input.name),
            zipcodes: Set(input.zipcodes),
            price_min: Set(input.price_min),
            price_max: Set(input.price_max),
            keywords: Set(input.keywords),
            category: Set(input.category),
            is_donation: Set(input.is_donation),
            excluded_categories: Set(input.excluded_categories),
            ..Default::default()
        };

        let res = Searches::insert(active_model).exec(&self.conn).await?;
        let created = Searches::find_by_id(res.last_insert_id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Failed to reload search {}", res.last_insert_id))?;

        info!("Created search #{}: {}", created.id, created.name);
        Ok(created)
    }

    /// Full-field replace; `is_active`, `created_at` and `last_checked` are
    /// untouched. Returns false when the id does not exist.
    pub async fn update(&self, id: i32, input: SearchInput) -> Result<bool> {
        let result = Searches::update_many()
            .col_expr(searches::Column::Name, Expr::value(input.name))
            .col_expr(searches::Column::Zipcodes, Expr::value(input.zipcodes))
            .col_expr(searches::Column::PriceMin, Expr::value(input.price_min))
            .col_expr(searches::Column::PriceMax, Expr::value(input.price_max))
            .col_expr(searches::Column::Keywords, Expr::value(input.keywords))
            .col_expr(searches::Column::Category, Expr::value(input.category))
            .col_expr(searches::Column::IsDonation, Expr::value(input.is_donation))
            .col_expr(
                searches::Column::ExcludedCategories,
                Expr::value(input.excluded_categories),
            )
            .filter(searches::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = Searches::delete_by_id(id).exec(&self.conn).await?;
        if result.rows_affected > 0 {
            info!("Deleted search #{}", id);
        }
        Ok(result.rows_affected > 0)
    }

    /// Flips `is_active` in place. The scanner only evaluates active
    /// searches, so this pauses/resumes scraping for the search.
    pub async fn toggle_active(&self, id: i32) -> Result<bool> {
        let result = Searches::update_many()
            .col_expr(
                searches::Column::IsActive,
                Expr::col(searches::Column::IsActive).not(),
            )
            .filter(searches::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Most recent `last_checked` across all searches, the scanner's
    /// liveness signal.
    pub async fn latest_activity(&self) -> Result<Option<String>> {
        let row: Option<Option<String>> = Searches::find()
            .select_only()
            .column_as(Expr::col(searches::Column::LastChecked).max(), "last_activity")
            .into_tuple()
            .one(&self.conn)
            .await?;

        Ok(row.flatten())
    }
}
