//! Entity models and DTOs.
//!
//! One module per table: the full row struct (`FromRow`) plus `Create*` /
//! `Update*` DTOs. Updates are full replacements, so update DTOs carry no
//! optional fields.

pub mod activity;
pub mod assignment;
pub mod client;
pub mod contact;
pub mod page;
pub mod status;
pub mod user;
pub mod user_assignment;
pub mod user_role;
