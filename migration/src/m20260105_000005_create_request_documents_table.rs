use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum RequestDocuments {
    Table,
    Id,
    RequestId,
    Kind,
    FilePath,
    UploadedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ValuationRequests {
    Table,
    Id,
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
                    .table(RequestDocuments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequestDocuments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RequestDocuments::RequestId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RequestDocuments::Kind).string().not_null())
                    .col(
                        ColumnDef::new(RequestDocuments::FilePath)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RequestDocuments::UploadedBy)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RequestDocuments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_documents_request_id")
                            .from(RequestDocuments::Table, RequestDocuments::RequestId)
                            .to(ValuationRequests::Table, ValuationRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_documents_uploaded_by")
                            .from(RequestDocuments::Table, RequestDocuments::UploadedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RequestDocuments::Table).to_owned())
            .await
    }
}
