use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "searches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub zipcodes: String,
    pub price_min: Option<i32>,
    pub price_max: Option<i32>,
    pub keywords: String,
    pub category: i32,
    pub is_donation: bool,
    pub excluded_categories: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    /// Written only by the external scanner after each pass over this search.
    pub last_checked: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ads::Entity")]
    Ads,
}

impl Related<super::ads::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ads.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
