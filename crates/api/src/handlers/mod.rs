//! Request handlers, one module per resource.
//!
//! Each handler is a thin composition: validate the raw payload against the
//! entity's rule table, delegate to the repository, shape the response and
//! status code. The assignments, activities, and user-assignment groups sit
//! behind the bearer-token gate.

pub mod activity;
pub mod assignment;
pub mod client;
pub mod contact;
pub mod status;
pub mod user;
pub mod user_assignment;
pub mod user_role;
