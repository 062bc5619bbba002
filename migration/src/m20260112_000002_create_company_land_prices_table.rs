use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum CompanyLandPrices {
    Table,
    Id,
    CompanyId,
    Wilaya,
    Region,
    PriceHousing,
    PriceCommercial,
    PriceIndustrial,
    PriceAgricultural,
    PricePerSqm,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyLandPrices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompanyLandPrices::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CompanyLandPrices::CompanyId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompanyLandPrices::Wilaya).string().not_null())
                    .col(ColumnDef::new(CompanyLandPrices::Region).string().not_null())
                    .col(ColumnDef::new(CompanyLandPrices::PriceHousing).double())
                    .col(ColumnDef::new(CompanyLandPrices::PriceCommercial).double())
                    .col(ColumnDef::new(CompanyLandPrices::PriceIndustrial).double())
                    .col(ColumnDef::new(CompanyLandPrices::PriceAgricultural).double())
                    .col(ColumnDef::new(CompanyLandPrices::PricePerSqm).double())
                    .col(
                        ColumnDef::new(CompanyLandPrices::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_land_prices_company_id")
                            .from(CompanyLandPrices::Table, CompanyLandPrices::CompanyId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_company_land_prices_company_wilaya_region")
                    .table(CompanyLandPrices::Table)
                    .col(CompanyLandPrices::CompanyId)
                    .col(CompanyLandPrices::Wilaya)
                    .col(CompanyLandPrices::Region)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompanyLandPrices::Table).to_owned())
            .await
    }
}
