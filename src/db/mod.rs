pub mod appointments;
pub mod approvals;
pub mod banks;
pub mod companies;
pub mod conversations;
pub mod documents;
pub mod land_prices;
pub mod loan_policies;
pub mod requests;
pub mod users;

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::env;
use thiserror::Error;

use crate::lifecycle::LifecycleError;

/// Create a SeaORM database connection pool from the `DATABASE_URL` env var.
pub async fn create_pool() -> DatabaseConnection {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    Database::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

/// Failure of a transactional lifecycle mutation. Rule violations carry a
/// user-facing message; database errors mean the whole transaction rolled
/// back and the caller should say "try again".
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error(transparent)]
    Rule(#[from] LifecycleError),
    #[error(transparent)]
    Db(#[from] DbErr),
    #[error("not found")]
    NotFound,
}
