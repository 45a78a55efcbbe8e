//! Wire models exchanged with the users API

pub mod user;

pub use user::{ADMIN_ROLE, ApiErrorBody, User, UserId, UserPayload};
