use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Searches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Searches::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Searches::Name).string().not_null())
                    .col(
                        ColumnDef::new(Searches::Zipcodes)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Searches::PriceMin).integer().null())
                    .col(ColumnDef::new(Searches::PriceMax).integer().null())
                    .col(
                        ColumnDef::new(Searches::Keywords)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Searches::Category)
                            .integer()
                            .not_null()
                            .default(9),
                    )
                    .col(
                        ColumnDef::new(Searches::IsDonation)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Searches::ExcludedCategories).string().null())
                    .col(
                        ColumnDef::new(Searches::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Searches::CreatedAt)
                            .date_time()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_owned()),
                    )
                    .col(ColumnDef::new(Searches::LastChecked).date_time().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Ads::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ads::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ads::SearchId).integer().not_null())
                    .col(ColumnDef::new(Ads::LbcId).string().not_null())
                    .col(ColumnDef::new(Ads::Title).string().not_null())
                    .col(ColumnDef::new(Ads::Price).integer().not_null().default(0))
                    .col(ColumnDef::new(Ads::Surface).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Ads::Location)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Ads::ImageUrl).string().null())
                    .col(ColumnDef::new(Ads::Url).string().not_null().default(""))
                    .col(ColumnDef::new(Ads::CategoryId).integer().null())
                    .col(
                        ColumnDef::new(Ads::IsSeen)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Ads::IsFavorite)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Ads::ScrapedAt)
                            .date_time()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_owned()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ads_search_id")
                            .from(Ads::Table, Ads::SearchId)
                            .to(Searches::Table, Searches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The scanner upserts on (search_id, lbc_id).
        manager
            .create_index(
                Index::create()
                    .name("idx_ads_search_lbc")
                    .table(Ads::Table)
                    .col(Ads::SearchId)
                    .col(Ads::LbcId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ads_scraped_at")
                    .table(Ads::Table)
                    .col(Ads::ScrapedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ads_is_seen")
                    .table(Ads::Table)
                    .col(Ads::IsSeen)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Logs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Logs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Logs::Message).string().not_null())
                    .col(
                        ColumnDef::new(Logs::Level)
                            .string()
                            .not_null()
                            .default("INFO"),
                    )
                    .col(
                        ColumnDef::new(Logs::CreatedAt)
                            .date_time()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_owned()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_logs_created_at")
                    .table(Logs::Table)
                    .col(Logs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SystemStats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SystemStats::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SystemStats::Value).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ads::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Searches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Logs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SystemStats::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Searches {
    Table,
    Id,
    Name,
    Zipcodes,
    PriceMin,
    PriceMax,
    Keywords,
    Category,
    IsDonation,
    ExcludedCategories,
    IsActive,
    CreatedAt,
    LastChecked,
}

#[derive(Iden)]
enum Ads {
    Table,
    Id,
    SearchId,
    LbcId,
    Title,
    Price,
    Surface,
    Location,
    ImageUrl,
    Url,
    CategoryId,
    IsSeen,
    IsFavorite,
    ScrapedAt,
}

#[derive(Iden)]
enum Logs {
    Table,
    Id,
    Message,
    Level,
    CreatedAt,
}

#[derive(Iden)]
enum SystemStats {
    Table,
    Name,
    Value,
}
