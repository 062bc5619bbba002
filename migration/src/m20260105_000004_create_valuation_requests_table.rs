use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ValuationRequests {
    Table,
    Id,
    Title,
    Description,
    ValuationType,
    RequestedAmount,
    Value,
    Status,
    RejectionReason,
    RejectedAt,
    ClientId,
    CompanyId,
    BankId,
    CreatedAt,
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
                    .table(ValuationRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ValuationRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ValuationRequests::Title).string().not_null())
                    .col(
                        ColumnDef::new(ValuationRequests::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ValuationRequests::ValuationType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ValuationRequests::RequestedAmount).double())
                    .col(ColumnDef::new(ValuationRequests::Value).double())
                    .col(
                        ColumnDef::new(ValuationRequests::Status)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ValuationRequests::RejectionReason).string())
                    .col(
                        ColumnDef::new(ValuationRequests::RejectedAt)
                            .timestamp_with_time_zone(),
                    )
                    .col(
                        ColumnDef::new(ValuationRequests::ClientId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ValuationRequests::CompanyId).uuid())
                    .col(ColumnDef::new(ValuationRequests::BankId).uuid())
                    .col(
                        ColumnDef::new(ValuationRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ValuationRequests::UpdatedAt)
                            .timestamp_with_time_zone(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_valuation_requests_client_id")
                            .from(ValuationRequests::Table, ValuationRequests::ClientId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_valuation_requests_company_id")
                            .from(ValuationRequests::Table, ValuationRequests::CompanyId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_valuation_requests_bank_id")
                            .from(ValuationRequests::Table, ValuationRequests::BankId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ValuationRequests::Table).to_owned())
            .await
    }
}
