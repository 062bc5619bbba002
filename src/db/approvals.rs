use sea_orm::*;
use uuid::Uuid;

use crate::models::approvals;

/// Record (or refresh) a bank's approval of a company. The optional limit
/// override beats the company's profile-wide limit for this bank only.
pub async fn upsert_approval(
    db: &DatabaseConnection,
    company_id: Uuid,
    bank_id: Uuid,
    credit_limit: Option<f64>,
) -> Result<approvals::Model, DbErr> {
    if let Some(existing) = approvals::Entity::find()
        .filter(approvals::Column::CompanyId.eq(company_id))
        .filter(approvals::Column::BankId.eq(bank_id))
        .one(db)
        .await?
    {
        let mut active: approvals::ActiveModel = existing.into();
        active.credit_limit = Set(credit_limit);
        return active.update(db).await;
    }

    let new_approval = approvals::ActiveModel {
        id: Set(Uuid::new_v4()),
        company_id: Set(company_id),
        bank_id: Set(bank_id),
        credit_limit: Set(credit_limit),
        created_at: Set(chrono::Utc::now()),
    };
    new_approval.insert(db).await
}

pub async fn delete_approval(
    db: &DatabaseConnection,
    company_id: Uuid,
    bank_id: Uuid,
) -> Result<u64, DbErr> {
    let result = approvals::Entity::delete_many()
        .filter(approvals::Column::CompanyId.eq(company_id))
        .filter(approvals::Column::BankId.eq(bank_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Every approval row a bank has issued.
pub async fn approvals_for_bank(
    db: &DatabaseConnection,
    bank_id: Uuid,
) -> Result<Vec<approvals::Model>, DbErr> {
    approvals::Entity::find()
        .filter(approvals::Column::BankId.eq(bank_id))
        .all(db)
        .await
}
