pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_users_table;
mod m20260105_000002_create_company_profiles_table;
mod m20260105_000003_create_bank_profiles_table;
mod m20260105_000004_create_valuation_requests_table;
mod m20260105_000005_create_request_documents_table;
mod m20260105_000006_create_visit_appointments_table;
mod m20260105_000007_create_conversations_table;
mod m20260105_000008_create_messages_table;
mod m20260105_000009_create_activity_log_table;
mod m20260112_000001_create_land_prices_table;
mod m20260112_000002_create_company_land_prices_table;
mod m20260112_000003_create_company_approved_banks_table;
mod m20260119_000001_create_loan_policies_table;
mod m20260126_000001_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_users_table::Migration),
            Box::new(m20260105_000002_create_company_profiles_table::Migration),
            Box::new(m20260105_000003_create_bank_profiles_table::Migration),
            Box::new(m20260105_000004_create_valuation_requests_table::Migration),
            Box::new(m20260105_000005_create_request_documents_table::Migration),
            Box::new(m20260105_000006_create_visit_appointments_table::Migration),
            Box::new(m20260105_000007_create_conversations_table::Migration),
            Box::new(m20260105_000008_create_messages_table::Migration),
            Box::new(m20260105_000009_create_activity_log_table::Migration),
            Box::new(m20260112_000001_create_land_prices_table::Migration),
            Box::new(m20260112_000002_create_company_land_prices_table::Migration),
            Box::new(m20260112_000003_create_company_approved_banks_table::Migration),
            Box::new(m20260119_000001_create_loan_policies_table::Migration),
            Box::new(m20260126_000001_add_indexes::Migration),
        ]
    }
}
