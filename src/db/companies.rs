use sea_orm::*;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::companies::{self, CompanyDirectoryEntry};
use crate::models::users::{self, Role};

pub async fn get_profile_by_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<companies::Model>, DbErr> {
    companies::Entity::find()
        .filter(companies::Column::UserId.eq(user_id))
        .one(db)
        .await
}

pub async fn insert_profile<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    address: Option<String>,
    contact_phone: Option<String>,
    credit_limit: Option<f64>,
) -> Result<companies::Model, DbErr> {
    let new_profile = companies::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        logo_path: Set(None),
        contact_phone: Set(contact_phone),
        address: Set(address),
        credit_limit: Set(credit_limit),
        created_at: Set(chrono::Utc::now()),
    };
    new_profile.insert(db).await
}

/// Profile rows for a set of company users, keyed by user id.
pub async fn profiles_by_user_ids(
    db: &DatabaseConnection,
    user_ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, companies::Model>, DbErr> {
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = companies::Entity::find()
        .filter(companies::Column::UserId.is_in(user_ids))
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|p| (p.user_id, p)).collect())
}

/// The public company directory: every company user, joined with whatever
/// profile metadata exists.
pub async fn directory(db: &DatabaseConnection) -> Result<Vec<CompanyDirectoryEntry>, DbErr> {
    let companies = users::Entity::find()
        .filter(users::Column::Role.eq(Role::Company))
        .order_by_asc(users::Column::Name)
        .all(db)
        .await?;

    let profiles = profiles_by_user_ids(db, companies.iter().map(|u| u.id).collect()).await?;

    Ok(companies
        .into_iter()
        .map(|user| {
            let profile = profiles.get(&user.id);
            CompanyDirectoryEntry {
                company_id: user.id,
                name: user.name,
                logo_path: profile.and_then(|p| p.logo_path.clone()),
                contact_phone: profile.and_then(|p| p.contact_phone.clone()),
                address: profile.and_then(|p| p.address.clone()),
            }
        })
        .collect())
}
