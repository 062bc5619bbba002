use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum LandPrices {
    Table,
    Id,
    Wilaya,
    Region,
    PriceHousing,
    PriceCommercial,
    PriceIndustrial,
    PriceAgricultural,
    PricePerSqm,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LandPrices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LandPrices::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LandPrices::Wilaya).string().not_null())
                    .col(ColumnDef::new(LandPrices::Region).string().not_null())
                    .col(ColumnDef::new(LandPrices::PriceHousing).double())
                    .col(ColumnDef::new(LandPrices::PriceCommercial).double())
                    .col(ColumnDef::new(LandPrices::PriceIndustrial).double())
                    .col(ColumnDef::new(LandPrices::PriceAgricultural).double())
                    .col(ColumnDef::new(LandPrices::PricePerSqm).double())
                    .col(
                        ColumnDef::new(LandPrices::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_land_prices_wilaya_region")
                    .table(LandPrices::Table)
                    .col(LandPrices::Wilaya)
                    .col(LandPrices::Region)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LandPrices::Table).to_owned())
            .await
    }
}
