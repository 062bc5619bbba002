use sea_orm::*;
use uuid::Uuid;

use crate::models::loan_policies::{self, LoanType, UpsertLoanPolicy};

/// One policy row per (bank, loan type); re-posting replaces the terms.
pub async fn upsert_policy(
    db: &DatabaseConnection,
    bank_id: Uuid,
    input: UpsertLoanPolicy,
) -> Result<loan_policies::Model, DbErr> {
    if let Some(existing) = loan_policies::Entity::find()
        .filter(loan_policies::Column::BankId.eq(bank_id))
        .filter(loan_policies::Column::LoanType.eq(input.loan_type))
        .one(db)
        .await?
    {
        let mut active: loan_policies::ActiveModel = existing.into();
        active.max_ratio = Set(input.max_ratio);
        active.default_years = Set(input.default_years);
        active.default_annual_rate = Set(input.default_annual_rate);
        return active.update(db).await;
    }

    let new_policy = loan_policies::ActiveModel {
        id: Set(Uuid::new_v4()),
        bank_id: Set(bank_id),
        loan_type: Set(input.loan_type),
        max_ratio: Set(input.max_ratio),
        default_years: Set(input.default_years),
        default_annual_rate: Set(input.default_annual_rate),
        created_at: Set(chrono::Utc::now()),
    };
    new_policy.insert(db).await
}

pub async fn list_for_bank(
    db: &DatabaseConnection,
    bank_id: Uuid,
    loan_type: Option<LoanType>,
) -> Result<Vec<loan_policies::Model>, DbErr> {
    let mut query = loan_policies::Entity::find().filter(loan_policies::Column::BankId.eq(bank_id));
    if let Some(loan_type) = loan_type {
        query = query.filter(loan_policies::Column::LoanType.eq(loan_type));
    }
    query.all(db).await
}
