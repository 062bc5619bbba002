use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum VisitAppointments {
    Table,
    Id,
    RequestId,
    ProposedTime,
    ProposedBy,
    Status,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ValuationRequests {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VisitAppointments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VisitAppointments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VisitAppointments::RequestId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VisitAppointments::ProposedTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VisitAppointments::ProposedBy)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VisitAppointments::Status)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VisitAppointments::Notes).string())
                    .col(
                        ColumnDef::new(VisitAppointments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_visit_appointments_request_id")
                            .from(VisitAppointments::Table, VisitAppointments::RequestId)
                            .to(ValuationRequests::Table, ValuationRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VisitAppointments::Table).to_owned())
            .await
    }
}
