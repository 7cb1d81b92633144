//! Accounts management service (`/api/accounts_mgmt`).

pub mod v1;
