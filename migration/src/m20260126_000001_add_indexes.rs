use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ValuationRequests {
    Table,
    ClientId,
    CompanyId,
    BankId,
    Status,
}

#[derive(DeriveIden)]
enum Messages {
    Table,
    ConversationId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum VisitAppointments {
    Table,
    RequestId,
}

#[derive(DeriveIden)]
enum RequestDocuments {
    Table,
    RequestId,
}

/// Hot-path indexes: dashboard listings filter requests per party, message
/// polling scans one conversation by time, and every lifecycle transition
/// touches a request's appointments and documents.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_valuation_requests_client_id")
                    .table(ValuationRequests::Table)
                    .col(ValuationRequests::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_valuation_requests_company_id")
                    .table(ValuationRequests::Table)
                    .col(ValuationRequests::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_valuation_requests_bank_id")
                    .table(ValuationRequests::Table)
                    .col(ValuationRequests::BankId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_valuation_requests_status")
                    .table(ValuationRequests::Table)
                    .col(ValuationRequests::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_messages_conversation_created")
                    .table(Messages::Table)
                    .col(Messages::ConversationId)
                    .col(Messages::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_visit_appointments_request_id")
                    .table(VisitAppointments::Table)
                    .col(VisitAppointments::RequestId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_request_documents_request_id")
                    .table(RequestDocuments::Table)
                    .col(RequestDocuments::RequestId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_valuation_requests_client_id")
                    .table(ValuationRequests::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_valuation_requests_company_id")
                    .table(ValuationRequests::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_valuation_requests_bank_id")
                    .table(ValuationRequests::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_valuation_requests_status")
                    .table(ValuationRequests::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_messages_conversation_created")
                    .table(Messages::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_visit_appointments_request_id")
                    .table(VisitAppointments::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_request_documents_request_id")
                    .table(RequestDocuments::Table)
                    .to_owned(),
            )
            .await
    }
}
