pub mod activity;
pub mod appointments;
pub mod approvals;
pub mod banks;
pub mod companies;
pub mod company_land_prices;
pub mod conversations;
pub mod documents;
pub mod land_prices;
pub mod loan_policies;
pub mod messages;
pub mod requests;
pub mod users;
