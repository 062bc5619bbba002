use sea_orm::*;
use uuid::Uuid;

use crate::models::banks::{self, BankDirectoryEntry};
use crate::models::users::{self, Role};

pub async fn get_profile_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<banks::Model>, DbErr> {
    banks::Entity::find()
        .filter(banks::Column::Slug.eq(slug))
        .one(db)
        .await
}

pub async fn get_profile_by_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<banks::Model>, DbErr> {
    banks::Entity::find()
        .filter(banks::Column::UserId.eq(user_id))
        .one(db)
        .await
}

pub async fn insert_profile<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    slug: String,
    contact_phone: Option<String>,
) -> Result<banks::Model, DbErr> {
    let new_profile = banks::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        slug: Set(slug),
        logo_path: Set(None),
        contact_phone: Set(contact_phone),
        created_at: Set(chrono::Utc::now()),
    };
    new_profile.insert(db).await
}

/// The public bank directory.
pub async fn directory(db: &DatabaseConnection) -> Result<Vec<BankDirectoryEntry>, DbErr> {
    let bank_users = users::Entity::find()
        .filter(users::Column::Role.eq(Role::Bank))
        .order_by_asc(users::Column::Name)
        .all(db)
        .await?;

    let profiles = banks::Entity::find()
        .filter(banks::Column::UserId.is_in(bank_users.iter().map(|u| u.id).collect::<Vec<_>>()))
        .all(db)
        .await?;

    Ok(bank_users
        .into_iter()
        .filter_map(|user| {
            let profile = profiles.iter().find(|p| p.user_id == user.id)?;
            Some(BankDirectoryEntry {
                bank_id: user.id,
                name: user.name,
                slug: profile.slug.clone(),
                logo_path: profile.logo_path.clone(),
            })
        })
        .collect())
}
