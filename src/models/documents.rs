use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Document-type tag for an uploaded file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum DocumentKind {
    #[sea_orm(string_value = "identity_card")]
    IdentityCard,
    #[sea_orm(string_value = "site_sketch")]
    SiteSketch,
    #[sea_orm(string_value = "deed")]
    Deed,
    #[sea_orm(string_value = "completion_certificate")]
    CompletionCertificate,
    #[sea_orm(string_value = "map")]
    Map,
    #[sea_orm(string_value = "contractor_agreement")]
    ContractorAgreement,
    #[sea_orm(string_value = "final_report")]
    FinalReport,
}

/// SeaORM entity for the `request_documents` table.
///
/// Rows are additive only — a document is never edited or replaced, a new
/// upload creates a new row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "request_documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub request_id: Uuid,
    pub kind: DocumentKind,
    /// Whatever reference string the storage collaborator returned — a URL
    /// for remote stores, a relative path for the local fallback.
    pub file_path: String,
    pub uploaded_by: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::requests::Entity",
        from = "Column::RequestId",
        to = "super::requests::Column::Id"
    )]
    Request,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UploadedBy",
        to = "super::users::Column::Id"
    )]
    Uploader,
}

impl Related<super::requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Query parameters for POST /api/requests/{id}/documents (body is raw bytes).
#[derive(Debug, Clone, Deserialize)]
pub struct UploadQuery {
    pub kind: DocumentKind,
    pub filename: String,
}
