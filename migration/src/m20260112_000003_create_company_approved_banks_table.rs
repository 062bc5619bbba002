use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum CompanyApprovedBanks {
    Table,
    Id,
    CompanyId,
    BankId,
    CreditLimit,
    CreatedAt,
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
                    .table(CompanyApprovedBanks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompanyApprovedBanks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CompanyApprovedBanks::CompanyId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyApprovedBanks::BankId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompanyApprovedBanks::CreditLimit).double())
                    .col(
                        ColumnDef::new(CompanyApprovedBanks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_approved_banks_company_id")
                            .from(CompanyApprovedBanks::Table, CompanyApprovedBanks::CompanyId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_approved_banks_bank_id")
                            .from(CompanyApprovedBanks::Table, CompanyApprovedBanks::BankId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One approval row per (company, bank) relationship.
        manager
            .create_index(
                Index::create()
                    .name("uq_company_approved_banks_company_bank")
                    .table(CompanyApprovedBanks::Table)
                    .col(CompanyApprovedBanks::CompanyId)
                    .col(CompanyApprovedBanks::BankId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompanyApprovedBanks::Table).to_owned())
            .await
    }
}
