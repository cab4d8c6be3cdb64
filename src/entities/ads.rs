use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A listing discovered by the external scanner. Rows are created and
/// refreshed exclusively by the scanner; this application only flips
/// `is_seen` and `is_favorite`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "ads")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub search_id: i32,
    /// Marketplace listing id, unique per search (the scanner's upsert key).
    pub lbc_id: String,
    pub title: String,
    pub price: i32,
    pub surface: i32,
    pub location: String,
    pub image_url: Option<String>,
    pub url: String,
    pub category_id: Option<i32>,
    pub is_seen: bool,
    pub is_favorite: bool,
    pub scraped_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::searches::Entity",
        from = "Column::SearchId",
        to = "super::searches::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Searches,
}

impl Related<super::searches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Searches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
