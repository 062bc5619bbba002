use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum LoanPolicies {
    Table,
    Id,
    BankId,
    LoanType,
    MaxRatio,
    DefaultYears,
    DefaultAnnualRate,
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
                    .table(LoanPolicies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LoanPolicies::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LoanPolicies::BankId).uuid().not_null())
                    .col(ColumnDef::new(LoanPolicies::LoanType).string().not_null())
                    .col(ColumnDef::new(LoanPolicies::MaxRatio).double().not_null())
                    .col(
                        ColumnDef::new(LoanPolicies::DefaultYears)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LoanPolicies::DefaultAnnualRate)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LoanPolicies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_loan_policies_bank_id")
                            .from(LoanPolicies::Table, LoanPolicies::BankId)
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
                    .name("uq_loan_policies_bank_loan_type")
                    .table(LoanPolicies::Table)
                    .col(LoanPolicies::BankId)
                    .col(LoanPolicies::LoanType)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoanPolicies::Table).to_owned())
            .await
    }
}
