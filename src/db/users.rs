use sea_orm::*;
use uuid::Uuid;

use crate::models::users::{self, CreateUserFromAuth, Role};

/// Look up a user by the id carried in the JWT; create the row on first
/// sight. The role comes from the identity collaborator and is trusted.
pub async fn find_or_create_from_auth(
    db: &DatabaseConnection,
    input: CreateUserFromAuth,
) -> Result<users::Model, DbErr> {
    if let Some(existing) = users::Entity::find_by_id(input.id).one(db).await? {
        return Ok(existing);
    }

    let new_user = users::ActiveModel {
        id: Set(input.id),
        name: Set(input.name),
        email: Set(input.email),
        phone: Set(None),
        role: Set(input.role),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_user.insert(db).await
}

/// Insert an admin-provisioned user (bank or company account).
pub async fn insert_user<C: ConnectionTrait>(
    db: &C,
    name: String,
    email: String,
    phone: Option<String>,
    role: Role,
) -> Result<users::Model, DbErr> {
    let new_user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        email: Set(email),
        phone: Set(phone),
        role: Set(role),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_user.insert(db).await
}

pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Fetch a user only if it holds the expected role. Used to validate
/// client-supplied company/bank ids before assignment.
pub async fn get_user_with_role(
    db: &DatabaseConnection,
    id: Uuid,
    role: Role,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id)
        .filter(users::Column::Role.eq(role))
        .one(db)
        .await
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<users::Model>, DbErr> {
    users::Entity::find()
        .order_by_asc(users::Column::Name)
        .all(db)
        .await
}

pub async fn list_by_role(
    db: &DatabaseConnection,
    role: Role,
) -> Result<Vec<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Role.eq(role))
        .order_by_asc(users::Column::Name)
        .all(db)
        .await
}

/// Batch fetch for response assembly (e.g. conversation partner names).
pub async fn get_users_by_ids(
    db: &DatabaseConnection,
    ids: Vec<Uuid>,
) -> Result<Vec<users::Model>, DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    users::Entity::find()
        .filter(users::Column::Id.is_in(ids))
        .all(db)
        .await
}
