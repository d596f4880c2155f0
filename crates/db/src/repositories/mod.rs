//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. All of them share the same
//! contract: `find_by_id` and `list` see active rows only, `update` is a
//! full replacement, `soft_delete` marks rather than removes.

pub mod activity_repo;
pub mod assignment_repo;
pub mod client_repo;
pub mod contact_repo;
pub mod status_repo;
pub mod user_assignment_repo;
pub mod user_repo;
pub mod user_role_repo;

pub use activity_repo::ActivityRepo;
pub use assignment_repo::AssignmentRepo;
pub use client_repo::ClientRepo;
pub use contact_repo::ContactRepo;
pub use status_repo::StatusRepo;
pub use user_assignment_repo::UserAssignmentRepo;
pub use user_repo::UserRepo;
pub use user_role_repo::UserRoleRepo;
